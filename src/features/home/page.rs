//! Home Page
//!
//! The greeting card plus a short getting-started list. The greeting starts
//! as the built-in default and is upgraded once by the backend fetch the
//! controller fires on activation; render itself has no loading or error
//! branches.

use gpui::{
    div, prelude::*, px, Context, IntoElement, ParentElement, Render, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::features::home::controller::HomeController;
use crate::theme::colors::ChatColors;

/// Getting-started bullet lines; `code` is rendered in an inline code chip
const GETTING_STARTED: &[(&str, &str, &str)] = &[
    ("Start your LibreChat server, ", "http://localhost:3080", " by default."),
    ("Press ", "ctrl-shift-l", " to trigger quick capture."),
    ("Expand the ", "Logs", " panel below to watch backend diagnostics."),
];

/// Home page component
pub struct HomePage {
    entities: AppEntities,
}

impl HomePage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = HomeController::new(entities.clone());

        // Re-render when the greeting arrives
        cx.observe(&entities.greeting, |_this, _, cx| cx.notify())
            .detach();

        // One-shot activation work; constructing the page is the activation.
        controller.load_preferences(cx);
        controller.activate(cx);

        Self { entities }
    }

    fn render_bullet(&self, (before, code, after): &(&'static str, &'static str, &'static str)) -> impl IntoElement {
        div()
            .w_full()
            .flex()
            .items_center()
            .gap_1()
            .text_size(px(13.0))
            .text_color(ChatColors::text_muted())
            .child("•")
            .child(*before)
            .child(
                div()
                    .px_2()
                    .py_px()
                    .rounded_sm()
                    .bg(ChatColors::code_bg())
                    .text_color(ChatColors::text_secondary())
                    .child(*code),
            )
            .child(*after)
    }
}

impl Render for HomePage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let greeting = self.entities.greeting.read(cx).greeting().clone();

        div()
            .id("home-page")
            .size_full()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap_6()
            .p_8()
            .bg(ChatColors::background())
            // Greeting card
            .child(
                div()
                    .rounded_lg()
                    .border_1()
                    .border_color(ChatColors::border())
                    .bg(ChatColors::card_bg())
                    .p_8()
                    .flex()
                    .flex_col()
                    .items_center()
                    .gap_4()
                    .child(
                        div()
                            .text_size(px(28.0))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(ChatColors::text_primary())
                            .child("LibreChat Desktop"),
                    )
                    .child(
                        div()
                            .text_size(px(15.0))
                            .text_color(ChatColors::text_secondary())
                            .child("A native desktop experience for LibreChat."),
                    )
                    .child(
                        div()
                            .text_size(px(17.0))
                            .font_weight(gpui::FontWeight::MEDIUM)
                            .text_color(ChatColors::greeting())
                            .child(greeting),
                    ),
            )
            // Getting started
            .child(
                div()
                    .max_w(px(560.0))
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(
                        div()
                            .text_size(px(12.0))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(ChatColors::text_faint())
                            .child("GETTING STARTED"),
                    )
                    .children(GETTING_STARTED.iter().map(|item| self.render_bullet(item))),
            )
    }
}
