//! Service Layer
//!
//! The backend side of the shell. Services run on a dedicated thread with a
//! tokio runtime and report back to the UI exclusively through `AppEvent`s,
//! so nothing here ever blocks a render or surfaces an error dialog.

pub mod api;
pub mod greeting;
pub mod service_hub;
