//! Domain - Pure Data Structures
//!
//! These types don't depend on GPUI and represent the business domain.

pub mod preferences;
pub mod server;
