//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    actions, px, App, AppContext, Application, Bounds, KeyBinding, SharedString, TitlebarOptions,
    WindowBounds, WindowOptions,
};

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::domain::preferences::UserPreferences;
use crate::eventing::app_event::AppEvent;
use crate::services::service_hub::ServiceHub;
use crate::utils::config_store;

actions!(librechat, [Quit, ToggleQuickCapture]);

/// Run the LibreChat Desktop application
pub fn run_app() {
    Application::new().run(|cx: &mut App| {
        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());
        cx.on_action(|_: &ToggleQuickCapture, cx: &mut App| {
            if let Some(hub) = cx.try_global::<ServiceHub>() {
                hub.log(AppEvent::info("Quick capture shortcut triggered"));
            }
        });
        cx.bind_keys([
            KeyBinding::new("ctrl-shift-l", ToggleQuickCapture, None),
            KeyBinding::new("cmd-shift-l", ToggleQuickCapture, None),
        ]);

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        // Initialize global entities
        let entities = AppEntities::init(cx);
        cx.set_global(entities.clone());

        // Create event channel for service -> UI communication
        let (event_tx, event_rx) = flume::unbounded::<AppEvent>();

        // Initialize service hub
        let service_hub = ServiceHub::new(event_tx);
        cx.set_global(service_hub);

        // Size the main window from persisted preferences
        let prefs =
            config_store::load_config::<UserPreferences>("preferences.json").unwrap_or_default();
        let size = gpui::size(
            px(prefs.window_settings.width as f32),
            px(prefs.window_settings.height as f32),
        );

        let bounds = Bounds::centered(None, size, cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("LibreChat Desktop")),
                appears_transparent: false,
                ..Default::default()
            }),
            ..Default::default()
        };

        cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| Workspace::new(entities.clone(), event_rx, cx))
        })
        .expect("failed to open main window");

        cx.activate(true);
    });
}
