//! Header Component
//!
//! The application header with the product title and server status.

use gpui::{
    div, px, Context, IntoElement, ParentElement, Render, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::state::connection_state::ConnectionTarget;
use crate::theme::colors::ChatColors;

/// Header component
pub struct Header {
    entities: AppEntities,
}

impl Header {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe connection changes
        cx.observe(&entities.connection, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_server_indicator(&self, cx: &Context<Self>) -> impl IntoElement {
        let conn = self.entities.connection.read(cx);
        let connected = conn.is_connected(ConnectionTarget::Server);

        let (color, dot) = if connected {
            (ChatColors::success(), "●")
        } else {
            (ChatColors::text_faint(), "○")
        };

        div()
            .flex()
            .items_center()
            .gap_1()
            .child(div().text_color(color).text_size(px(10.0)).child(dot))
            .child(
                div()
                    .text_color(ChatColors::text_secondary())
                    .text_size(px(12.0))
                    .child(ConnectionTarget::Server.label()),
            )
    }
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .h(px(48.0))
            .w_full()
            .bg(ChatColors::header_bg())
            .border_b_1()
            .border_color(ChatColors::border())
            .flex()
            .items_center()
            .justify_between()
            .px_4()
            // Left side: logo mark and title
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        div()
                            .size(px(28.0))
                            .rounded_md()
                            .bg(ChatColors::greeting())
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_color(ChatColors::header_bg())
                            .font_weight(gpui::FontWeight::BOLD)
                            .text_size(px(14.0))
                            .child("L"),
                    )
                    .child(
                        div()
                            .text_color(ChatColors::text_primary())
                            .text_size(px(16.0))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .child("LibreChat Desktop"),
                    ),
            )
            // Right side: server status
            .child(self.render_server_indicator(cx))
    }
}
