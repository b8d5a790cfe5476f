//! Workspace - Main Shell with Layout and Event Pump
//!
//! The workspace holds the header, home page, and log panel, and runs the
//! event pump bridging service events to UI updates. If the workspace is
//! torn down while service results are still in flight, the pump's `cx`
//! update fails and the late results are discarded instead of mutating
//! dropped state.

use gpui::{
    div, prelude::*, App, Context, Entity, IntoElement, ParentElement, Render, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::layout::header::Header;
use crate::components::layout::log_panel::LogPanel;
use crate::eventing::app_event::AppEvent;
use crate::features::home::page::HomePage;
use crate::theme::colors::ChatColors;

/// Main workspace containing the application layout
pub struct Workspace {
    header: Entity<Header>,
    home_page: Entity<HomePage>,
    log_panel: Entity<LogPanel>,
}

impl Workspace {
    pub fn new(
        entities: AppEntities,
        event_rx: flume::Receiver<AppEvent>,
        cx: &mut Context<Self>,
    ) -> Self {
        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let log_panel = cx.new(|cx| LogPanel::new(entities.clone(), cx));

        // Start the event pump before the page so its activation events have
        // somewhere to land.
        Self::start_event_pump(event_rx, entities.clone(), cx);

        let home_page = cx.new(|cx| HomePage::new(entities.clone(), cx));

        Self {
            header,
            home_page,
            log_panel,
        }
    }

    /// Start the event pump that dispatches service events to UI entities
    fn start_event_pump(
        event_rx: flume::Receiver<AppEvent>,
        entities: AppEntities,
        cx: &mut Context<Self>,
    ) {
        cx.spawn(async move |_this, cx| {
            while let Ok(event) = event_rx.recv_async().await {
                let entities = entities.clone();
                let _ = cx.update(|cx: &mut App| {
                    dispatch_event(event, &entities, cx);
                });
            }
        })
        .detach();
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(ChatColors::background())
            .child(self.header.clone())
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .overflow_hidden()
                    .child(self.home_page.clone()),
            )
            .child(self.log_panel.clone())
    }
}

/// Dispatch an AppEvent to the appropriate entity
fn dispatch_event(event: AppEvent, entities: &AppEntities, cx: &mut App) {
    match event {
        AppEvent::Log {
            level,
            message,
            timestamp,
        } => {
            entities.logs.update(cx, |logs, cx| {
                logs.push(level, message, timestamp);
                cx.notify();
            });
        }
        AppEvent::GreetingLoaded { message } => {
            let applied = entities.greeting.update(cx, |state, cx| {
                let applied = state.apply(&message);
                if applied {
                    cx.notify();
                }
                applied
            });
            if !applied {
                entities.logs.update(cx, |logs, cx| {
                    logs.push_now(
                        crate::state::log_state::LogLevel::Warn,
                        "Ignoring malformed or repeated greeting from backend",
                    );
                    cx.notify();
                });
            }
        }
        AppEvent::ConnectionChanged {
            target,
            connected,
            detail,
        } => {
            entities.connection.update(cx, |conn, cx| {
                conn.set_status(target, connected, detail);
                cx.notify();
            });
        }
    }
}
