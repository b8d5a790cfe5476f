//! State - GPUI Entity State Modules
//!
//! Each state module represents a distinct piece of application state,
//! split by update frequency to avoid unnecessary re-renders.

pub mod connection_state;
pub mod greeting_state;
pub mod log_state;
pub mod preferences_state;
