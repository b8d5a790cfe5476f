//! User Preferences
//!
//! Per-user settings persisted locally for the desktop client. Field names
//! stay camelCase on disk so preference files survive migrations from the
//! web client.

use serde::{Deserialize, Serialize};

/// Color theme for the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
    System,
}

/// Persisted window sizing and positioning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowSettings {
    pub width: u32,
    pub height: u32,
    pub is_maximized: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            is_maximized: false,
        }
    }
}

/// Desktop notification configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub enabled: bool,
    pub play_sound: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            play_sound: true,
        }
    }
}

/// Per-user preferences for the desktop shell
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    /// Local profile identifier, generated on first run
    pub user_id: String,
    pub theme: Theme,
    #[serde(default)]
    pub window_settings: WindowSettings,
    #[serde(default)]
    pub notification_settings: NotificationSettings,
    /// Keystroke for the quick-capture shortcut, None disables it
    pub global_hotkey: Option<String>,
    pub quick_capture_enabled: bool,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            user_id: uuid::Uuid::new_v4().to_string(),
            theme: Theme::default(),
            window_settings: WindowSettings::default(),
            notification_settings: NotificationSettings::default(),
            global_hotkey: Some("ctrl-shift-l".to_string()),
            quick_capture_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let prefs = UserPreferences::default();
        assert_eq!(prefs.theme, Theme::Dark);
        assert_eq!(prefs.window_settings.width, 1024);
        assert_eq!(prefs.window_settings.height, 768);
        assert!(prefs.notification_settings.enabled);
        assert!(!prefs.user_id.is_empty());
    }

    #[test]
    fn test_serde_camel_case() {
        let prefs = UserPreferences::default();
        let json = serde_json::to_string(&prefs).expect("serialize");
        assert!(json.contains("\"windowSettings\""));
        assert!(json.contains("\"quickCaptureEnabled\""));

        let back: UserPreferences = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.window_settings, prefs.window_settings);
        assert_eq!(back.user_id, prefs.user_id);
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let json = r#"{"userId":"u1","theme":"dark","globalHotkey":null,"quickCaptureEnabled":false}"#;
        let prefs: UserPreferences = serde_json::from_str(json).expect("deserialize");
        assert_eq!(prefs.window_settings, WindowSettings::default());
        assert_eq!(prefs.notification_settings, NotificationSettings::default());
        assert!(prefs.global_hotkey.is_none());
    }
}
