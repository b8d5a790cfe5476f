//! PreferencesState - Loaded User Preferences

use crate::domain::preferences::UserPreferences;

/// State wrapper around the active user preferences
#[derive(Debug, Clone, Default)]
pub struct PreferencesState {
    preferences: UserPreferences,
}

impl PreferencesState {
    pub fn preferences(&self) -> &UserPreferences {
        &self.preferences
    }

    /// Replace the active preferences
    pub fn update(&mut self, preferences: UserPreferences) {
        self.preferences = preferences;
    }
}
