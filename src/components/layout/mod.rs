//! Layout Components
//!
//! Header, log panel, and other shell chrome.

pub mod header;
pub mod log_panel;
