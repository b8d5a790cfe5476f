//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and management.
//! State is split by update frequency to avoid unnecessary re-renders.

use gpui::{App, AppContext, Entity, Global};

use crate::state::{
    connection_state::ConnectionState, greeting_state::GreetingState, log_state::LogState,
    preferences_state::PreferencesState,
};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Home page greeting
    pub greeting: Entity<GreetingState>,
    /// LibreChat server reachability
    pub connection: Entity<ConnectionState>,
    /// Diagnostic log (ring buffer)
    pub logs: Entity<LogState>,
    /// Active user preferences
    pub preferences: Entity<PreferencesState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities with default values
    pub fn init(cx: &mut App) -> Self {
        Self {
            greeting: cx.new(|_| GreetingState::default()),
            connection: cx.new(|_| ConnectionState::default()),
            logs: cx.new(|_| LogState::default()),
            preferences: cx.new(|_| PreferencesState::default()),
        }
    }
}
