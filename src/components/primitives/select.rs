//! Select Component

use gpui::{
    div, prelude::*, px, App, ElementId, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::DeskColors;

/// A select option
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: String,
    pub label: SharedString,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<SharedString>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A select component.
///
/// A full dropdown needs its own overlay state; this simplified control
/// cycles to the next option on click, which is enough for the demo screens
/// while keeping the caller-owns-value contract.
#[derive(IntoElement)]
pub struct Select {
    id: ElementId,
    selected: Option<String>,
    options: Vec<SelectOption>,
    placeholder: SharedString,
    disabled: bool,
    error: bool,
    on_change: Option<Box<dyn Fn(&str, &mut Window, &mut App) + 'static>>,
}

impl Select {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            selected: None,
            options: Vec::new(),
            placeholder: "Select...".into(),
            disabled: false,
            error: false,
            on_change: None,
        }
    }

    pub fn selected(mut self, value: Option<String>) -> Self {
        self.selected = value;
        self
    }

    pub fn options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Toggle the error presentation (red border)
    pub fn error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }

    /// Handler receiving the newly selected option value
    pub fn on_change(mut self, handler: impl Fn(&str, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    fn next_value(&self) -> Option<String> {
        if self.options.is_empty() {
            return None;
        }
        let index = self
            .selected
            .as_deref()
            .and_then(|sel| self.options.iter().position(|o| o.value == sel))
            .map(|i| (i + 1) % self.options.len())
            .unwrap_or(0);
        self.options.get(index).map(|o| o.value.clone())
    }
}

impl RenderOnce for Select {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let display_text = self
            .selected
            .as_ref()
            .and_then(|val| {
                self.options
                    .iter()
                    .find(|opt| &opt.value == val)
                    .map(|opt| opt.label.clone())
            })
            .unwrap_or(self.placeholder.clone());

        let text_color = if self.selected.is_some() {
            DeskColors::text_primary()
        } else {
            DeskColors::input_placeholder()
        };

        let border_color = if self.error {
            DeskColors::border_error()
        } else {
            DeskColors::input_border()
        };

        let opacity = if self.disabled { 0.5 } else { 1.0 };
        let next = self.next_value();
        let on_change = self.on_change;

        div()
            .id(self.id)
            .px_3()
            .py_2()
            .bg(DeskColors::input_bg())
            .border_1()
            .border_color(border_color)
            .rounded_md()
            .text_color(text_color)
            .text_sm()
            .min_w(px(150.0))
            .flex()
            .items_center()
            .justify_between()
            .cursor_pointer()
            .opacity(opacity)
            .when(!self.disabled, |el| {
                el.when_some(on_change, |el, handler| {
                    el.on_click(move |_event, window, cx| {
                        if let Some(value) = &next {
                            handler(value, window, cx);
                        }
                    })
                })
            })
            .child(display_text)
            .child(
                div()
                    .text_color(DeskColors::text_muted())
                    .text_size(px(10.0))
                    .child("▼"),
            )
    }
}
