//! Home Controller
//!
//! Kicks off the one-shot backend work when the home page activates and
//! handles preference persistence.

use gpui::App;

use crate::app::entities::AppEntities;
use crate::domain::preferences::UserPreferences;
use crate::domain::server::ServerConfig;
use crate::eventing::app_event::AppEvent;
use crate::services::service_hub::ServiceHub;

/// Home page controller
pub struct HomeController {
    entities: AppEntities,
}

impl HomeController {
    /// Create a new controller
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Run the page's activation work: request the greeting exactly once and
    /// probe the configured server. Called from the page constructor, so a
    /// re-render never repeats the request; a fresh activation does.
    pub fn activate(&self, cx: &mut App) {
        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.fetch_greeting();

            let server = load_server_config(hub);
            hub.check_server(server);
        }
    }

    /// Load saved preferences into the preferences entity.
    ///
    /// The result is written straight back so the generated profile id from a
    /// first run survives the next launch.
    pub fn load_preferences(&self, cx: &mut App) {
        match crate::utils::config_store::load_config::<UserPreferences>("preferences.json") {
            Ok(preferences) => {
                self.entities.preferences.update(cx, |state, cx| {
                    state.update(preferences);
                    cx.notify();
                });
                self.save_preferences(cx);
            }
            Err(e) => {
                if let Some(hub) = cx.try_global::<ServiceHub>() {
                    hub.log(AppEvent::warn(format!("Failed to load preferences: {e}")));
                }
            }
        }
    }

    /// Save the active preferences
    pub fn save_preferences(&self, cx: &mut App) {
        let preferences = self.entities.preferences.read(cx).preferences().clone();
        match crate::utils::config_store::save_config("preferences.json", &preferences) {
            Ok(()) => {
                if let Some(hub) = cx.try_global::<ServiceHub>() {
                    hub.log(AppEvent::info("Preferences saved"));
                }
            }
            Err(e) => {
                if let Some(hub) = cx.try_global::<ServiceHub>() {
                    hub.log(AppEvent::error(format!("Failed to save preferences: {e}")));
                }
            }
        }
    }
}

/// Read the server config from disk, logging and falling back to the default
/// local server when it cannot be read.
fn load_server_config(hub: &ServiceHub) -> ServerConfig {
    match crate::utils::config_store::load_config::<ServerConfig>("server.json") {
        Ok(config) => config,
        Err(e) => {
            hub.log(AppEvent::warn(format!("Failed to load server config: {e}")));
            ServerConfig::default()
        }
    }
}
