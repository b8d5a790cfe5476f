//! Features - Vertical Feature Slices
//!
//! Each feature contains its page and controller.

pub mod home;
