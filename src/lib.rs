//! LibreChat Desktop Library
//!
//! This crate provides the main application logic for LibreChat Desktop,
//! a native desktop shell for LibreChat.

pub mod app;
pub mod components;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod services;
pub mod state;
pub mod theme;
pub mod utils;
