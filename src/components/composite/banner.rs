//! Banner Component
//!
//! One-line inline banner for transient success/error/info messages.

use gpui::{
    div, px, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window,
};

use crate::theme::colors::DeskColors;

/// Banner kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
    Info,
}

/// An inline message banner
#[derive(IntoElement)]
pub struct Banner {
    kind: BannerKind,
    message: SharedString,
}

impl Banner {
    pub fn new(kind: BannerKind, message: impl Into<SharedString>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<SharedString>) -> Self {
        Self::new(BannerKind::Success, message)
    }

    pub fn error(message: impl Into<SharedString>) -> Self {
        Self::new(BannerKind::Error, message)
    }

    pub fn info(message: impl Into<SharedString>) -> Self {
        Self::new(BannerKind::Info, message)
    }
}

impl RenderOnce for Banner {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg, fg, glyph) = match self.kind {
            BannerKind::Success => (DeskColors::banner_success_bg(), DeskColors::success(), "✓"),
            BannerKind::Error => (DeskColors::banner_error_bg(), DeskColors::danger(), "!"),
            BannerKind::Info => (DeskColors::banner_info_bg(), DeskColors::info(), "i"),
        };

        div()
            .w_full()
            .px_3()
            .py_2()
            .rounded_md()
            .bg(bg)
            .flex()
            .items_center()
            .gap_2()
            .child(
                div()
                    .text_color(fg)
                    .text_size(px(13.0))
                    .font_weight(gpui::FontWeight::BOLD)
                    .child(glyph),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(DeskColors::text_primary())
                    .child(self.message),
            )
    }
}
