//! LoadMore Component
//!
//! Cursor-paging footer for lists: shows the loaded row count and a button
//! that asks the owning screen for the next page. The screen tracks the
//! cursor; this component holds no page state.

use gpui::{
    div, App, ClickEvent, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window,
};

use crate::components::primitives::button::{Button, ButtonSize, ButtonVariant};
use crate::theme::colors::DeskColors;

/// Load-more footer component
#[derive(IntoElement)]
pub struct LoadMore {
    loaded: usize,
    items_label: SharedString,
    loading: bool,
    /// The source reported no older rows
    exhausted: bool,
    on_load_more: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl LoadMore {
    pub fn new(loaded: usize) -> Self {
        Self {
            loaded,
            items_label: "items".into(),
            loading: false,
            exhausted: false,
            on_load_more: None,
        }
    }

    pub fn items_label(mut self, label: impl Into<SharedString>) -> Self {
        self.items_label = label.into();
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn exhausted(mut self, exhausted: bool) -> Self {
        self.exhausted = exhausted;
        self
    }

    pub fn on_load_more(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_load_more = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for LoadMore {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let mut footer = div()
            .w_full()
            .px_4()
            .py_2()
            .flex()
            .items_center()
            .justify_between()
            .border_t_1()
            .border_color(DeskColors::border())
            .child(
                div()
                    .text_sm()
                    .text_color(DeskColors::text_secondary())
                    .child(format!("{} {}", self.loaded, self.items_label)),
            );

        if self.exhausted {
            footer = footer.child(
                div()
                    .text_sm()
                    .text_color(DeskColors::text_muted())
                    .child("End of history"),
            );
        } else {
            let mut button = Button::new("load-more", "Load more")
                .variant(ButtonVariant::Secondary)
                .size(ButtonSize::Small)
                .loading(self.loading);
            if let Some(handler) = self.on_load_more {
                button = button.on_click(handler);
            }
            footer = footer.child(button);
        }

        footer
    }
}
