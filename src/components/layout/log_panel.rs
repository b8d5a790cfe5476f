//! Log Panel Component
//!
//! Displays backend diagnostics at the bottom of the screen. This is the
//! only place service failures become visible.

use gpui::{
    div, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement,
    Render, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::state::log_state::LogEntry;
use crate::theme::colors::ChatColors;
use crate::utils::format::format_time_ms;

/// Log panel component
pub struct LogPanel {
    entities: AppEntities,
    expanded: bool,
}

impl LogPanel {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe log changes
        cx.observe(&entities.logs, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            expanded: false,
        }
    }

    fn toggle_expanded(&mut self, cx: &mut Context<Self>) {
        self.expanded = !self.expanded;
        cx.notify();
    }

    fn render_log_entry(&self, entry: &LogEntry) -> impl IntoElement {
        div()
            .w_full()
            .flex()
            .items_center()
            .gap_2()
            .py_px()
            .child(
                div()
                    .text_color(ChatColors::text_faint())
                    .text_size(px(11.0))
                    .min_w(px(85.0))
                    .child(format_time_ms(&entry.timestamp)),
            )
            .child(
                div()
                    .text_color(entry.level.color())
                    .text_size(px(11.0))
                    .min_w(px(45.0))
                    .child(entry.level.label()),
            )
            .child(
                div()
                    .text_color(ChatColors::text_secondary())
                    .text_size(px(12.0))
                    .flex_1()
                    .child(entry.message.clone()),
            )
    }
}

impl Render for LogPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let logs = self.entities.logs.read(cx);
        let height = if self.expanded { px(150.0) } else { px(32.0) };
        let entities = self.entities.clone();

        let mut panel = div()
            .h(height)
            .w_full()
            .bg(ChatColors::log_panel_bg())
            .border_t_1()
            .border_color(ChatColors::border())
            .flex()
            .flex_col()
            // Header row
            .child(
                div()
                    .h(px(32.0))
                    .w_full()
                    .px_4()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(
                                div()
                                    .text_color(ChatColors::text_secondary())
                                    .text_size(px(13.0))
                                    .font_weight(gpui::FontWeight::MEDIUM)
                                    .child("Logs"),
                            )
                            .child(
                                div()
                                    .text_color(ChatColors::text_faint())
                                    .text_size(px(11.0))
                                    .child(format!("({})", logs.len())),
                            ),
                    )
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(
                                div()
                                    .id("clear-logs")
                                    .px_2()
                                    .py_1()
                                    .rounded_sm()
                                    .text_color(ChatColors::text_faint())
                                    .text_size(px(11.0))
                                    .cursor_pointer()
                                    .hover(|s| s.bg(gpui::rgba(0xffffff22)))
                                    .on_click(move |_event: &ClickEvent, _window, cx| {
                                        entities.logs.update(cx, |logs, cx| {
                                            logs.clear();
                                            cx.notify();
                                        });
                                    })
                                    .child("Clear"),
                            )
                            .child(
                                div()
                                    .id("toggle-logs")
                                    .px_2()
                                    .py_1()
                                    .rounded_sm()
                                    .text_color(ChatColors::text_faint())
                                    .text_size(px(11.0))
                                    .cursor_pointer()
                                    .hover(|s| s.bg(gpui::rgba(0xffffff22)))
                                    .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                        this.toggle_expanded(cx);
                                    }))
                                    .child(if self.expanded { "▼" } else { "▲" }),
                            ),
                    ),
            );

        // Log entries (only when expanded), newest first
        if self.expanded {
            let entries: Vec<_> = logs.entries().iter().rev().take(50).cloned().collect();

            panel = panel.child(
                div()
                    .id("log-entries")
                    .flex_1()
                    .overflow_y_scroll()
                    .px_4()
                    .py_1()
                    .children(entries.iter().map(|entry| self.render_log_entry(entry))),
            );
        }

        panel
    }
}
