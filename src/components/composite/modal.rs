//! Modal Component
//!
//! A controlled overlay: the caller owns visibility and passes one close
//! callback. The backdrop click and the close button both funnel through it;
//! the owning page routes Escape to the same callback via its focus handle.
//! A closed modal renders nothing.

use gpui::{
    div, prelude::*, px, App, ClickEvent, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use std::rc::Rc;

use crate::theme::colors::DeskColors;

/// Modal component
#[derive(IntoElement)]
pub struct Modal {
    title: SharedString,
    open: bool,
    children: Vec<gpui::AnyElement>,
    footer: Vec<gpui::AnyElement>,
    on_close: Option<Rc<dyn Fn(&mut App) + 'static>>,
    show_close_button: bool,
}

impl Modal {
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            open: true,
            children: Vec::new(),
            footer: Vec::new(),
            on_close: None,
            show_close_button: true,
        }
    }

    /// Caller-controlled visibility; `false` renders nothing
    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    /// Add a body element
    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    /// Add a footer element (action row)
    pub fn footer(mut self, child: impl IntoElement) -> Self {
        self.footer.push(child.into_any_element());
        self
    }

    /// Set the close handler shared by backdrop click and the close button
    pub fn on_close(mut self, handler: impl Fn(&mut App) + 'static) -> Self {
        self.on_close = Some(Rc::new(handler));
        self
    }

    pub fn hide_close_button(mut self) -> Self {
        self.show_close_button = false;
        self
    }
}

impl RenderOnce for Modal {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        if !self.open {
            return div().into_any_element();
        }

        let on_close = self.on_close;
        let backdrop_close = on_close.clone();
        let button_close = on_close;

        // Backdrop: occludes and scroll-locks the content beneath
        div()
            .id("modal-backdrop")
            .absolute()
            .inset_0()
            .occlude()
            .bg(gpui::rgba(0x00000088))
            .flex()
            .items_center()
            .justify_center()
            .when_some(backdrop_close, |el, handler| {
                el.on_click(move |_event: &ClickEvent, _window, cx| {
                    handler(cx);
                })
            })
            .child(
                // Modal container; clicks inside must not reach the backdrop
                div()
                    .id("modal-container")
                    .occlude()
                    .bg(DeskColors::content_bg())
                    .rounded_lg()
                    .shadow_lg()
                    .min_w(px(400.0))
                    .max_w(px(600.0))
                    .flex()
                    .flex_col()
                    // Header
                    .child(
                        div()
                            .px_6()
                            .py_4()
                            .border_b_1()
                            .border_color(DeskColors::border())
                            .flex()
                            .items_center()
                            .justify_between()
                            .child(
                                div()
                                    .text_size(px(16.0))
                                    .font_weight(gpui::FontWeight::SEMIBOLD)
                                    .text_color(DeskColors::text_primary())
                                    .child(self.title),
                            )
                            .when(self.show_close_button, |el| {
                                el.child(
                                    div()
                                        .id("modal-close")
                                        .size(px(24.0))
                                        .rounded_sm()
                                        .flex()
                                        .items_center()
                                        .justify_center()
                                        .text_color(DeskColors::text_muted())
                                        .text_size(px(16.0))
                                        .cursor_pointer()
                                        .hover(|s| s.bg(DeskColors::table_row_hover()))
                                        .when_some(button_close, |el, handler| {
                                            el.on_click(move |_event: &ClickEvent, _window, cx| {
                                                handler(cx);
                                            })
                                        })
                                        .child("×"),
                                )
                            }),
                    )
                    // Body
                    .child(
                        div()
                            .px_6()
                            .py_4()
                            .flex()
                            .flex_col()
                            .gap_4()
                            .children(self.children),
                    )
                    // Footer
                    .when(!self.footer.is_empty(), |el| {
                        el.child(
                            div()
                                .px_6()
                                .py_4()
                                .border_t_1()
                                .border_color(DeskColors::border())
                                .flex()
                                .items_center()
                                .justify_end()
                                .gap_2()
                                .children(self.footer),
                        )
                    }),
            )
            .into_any_element()
    }
}
