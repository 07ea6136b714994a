//! ChatHeader Component
//!
//! Generic header shell for messaging surfaces: avatar, title, subtitle and
//! a trailing action slot. No domain logic.

use gpui::{
    div, prelude::*, px, App, AnyElement, IntoElement, ParentElement, RenderOnce, SharedString,
    Styled, Window,
};

use crate::components::primitives::avatar::{Avatar, AvatarSize};
use crate::theme::colors::DeskColors;

/// A chat/message pane header
#[derive(IntoElement)]
pub struct ChatHeader {
    title: SharedString,
    subtitle: Option<SharedString>,
    presence: Option<SharedString>,
    actions: Vec<AnyElement>,
}

impl ChatHeader {
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            presence: None,
            actions: Vec::new(),
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<SharedString>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Presence string shown as the avatar dot
    pub fn presence(mut self, presence: impl Into<SharedString>) -> Self {
        self.presence = Some(presence.into());
        self
    }

    /// Add a trailing action element
    pub fn action(mut self, action: impl IntoElement) -> Self {
        self.actions.push(action.into_any_element());
        self
    }
}

impl RenderOnce for ChatHeader {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let mut avatar = Avatar::new(self.title.clone()).size(AvatarSize::Large);
        if let Some(presence) = self.presence.clone() {
            avatar = avatar.presence(presence);
        }

        div()
            .w_full()
            .px_4()
            .py_3()
            .bg(DeskColors::content_bg())
            .border_b_1()
            .border_color(DeskColors::border())
            .flex()
            .items_center()
            .justify_between()
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(avatar)
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .child(
                                div()
                                    .text_size(px(15.0))
                                    .font_weight(gpui::FontWeight::SEMIBOLD)
                                    .text_color(DeskColors::text_primary())
                                    .child(self.title),
                            )
                            .when_some(self.subtitle, |el, subtitle| {
                                el.child(
                                    div()
                                        .text_size(px(12.0))
                                        .text_color(DeskColors::text_muted())
                                        .child(subtitle),
                                )
                            }),
                    ),
            )
            .child(div().flex().items_center().gap_2().children(self.actions))
    }
}
