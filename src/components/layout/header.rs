//! Header Component
//!
//! The application header with logo, title, unread notice count and the
//! signed-in user.

use gpui::{
    div, prelude::*, px, Context, IntoElement, ParentElement, Render, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::primitives::avatar::{Avatar, AvatarSize};
use crate::theme::colors::DeskColors;

/// Header component
pub struct Header {
    entities: AppEntities,
}

impl Header {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.profile, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.notices, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let profile = self.entities.profile.read(cx);
        let user_name = profile.profile.committed().name.clone();
        let unread = self.entities.notices.read(cx).unread_count();

        div()
            .h(px(48.0))
            .w_full()
            .bg(DeskColors::header_bg())
            .flex()
            .items_center()
            .justify_between()
            .px_4()
            // Left side: Logo and title
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        div()
                            .size(px(32.0))
                            .rounded_md()
                            .bg(gpui::rgba(0xffffffcc))
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_color(DeskColors::header_bg())
                            .font_weight(gpui::FontWeight::BOLD)
                            .child("L"),
                    )
                    .child(
                        div()
                            .text_color(DeskColors::text_header())
                            .text_size(px(18.0))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .child("LedgerDesk"),
                    ),
            )
            // Right side: unread notices and signed-in user
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_4()
                    .when(unread > 0, |el| {
                        el.child(
                            div()
                                .px_2()
                                .py_0p5()
                                .rounded_full()
                                .bg(DeskColors::danger())
                                .text_color(DeskColors::text_light())
                                .text_size(px(11.0))
                                .child(format!("{unread} unread")),
                        )
                    })
                    .when(!user_name.is_empty(), |el| {
                        el.child(
                            div()
                                .flex()
                                .items_center()
                                .gap_2()
                                .child(
                                    div()
                                        .text_color(DeskColors::text_header())
                                        .text_size(px(13.0))
                                        .child(user_name.clone()),
                                )
                                .child(Avatar::new(user_name).size(AvatarSize::Small)),
                        )
                    }),
            )
    }
}
