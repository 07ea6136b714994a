//! Badge Component

use gpui::{
    div, px, App, IntoElement, ParentElement, RenderOnce, Rgba, SharedString, Styled, Window,
};

/// A small colored status pill
#[derive(IntoElement)]
pub struct Badge {
    label: SharedString,
    color: Rgba,
}

impl Badge {
    pub fn new(label: impl Into<SharedString>, color: Rgba) -> Self {
        Self {
            label: label.into(),
            color,
        }
    }
}

impl RenderOnce for Badge {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let tint = Rgba {
            a: 0.15,
            ..self.color
        };
        div()
            .px_2()
            .py_0p5()
            .rounded_full()
            .bg(tint)
            .text_color(self.color)
            .text_size(px(11.0))
            .font_weight(gpui::FontWeight::MEDIUM)
            .child(self.label)
    }
}
