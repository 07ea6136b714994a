//! TextInput Component
//!
//! A minimal focusable text input. Key handling covers printable characters
//! and backspace; everything else is left to the platform.

use gpui::{
    div, prelude::*, px, Context, ElementId, Entity, FocusHandle, Focusable,
    InteractiveElement, IntoElement, KeyDownEvent, ParentElement, Render, SharedString, Styled,
    Window,
};

use crate::theme::colors::DeskColors;

/// A text input component
pub struct TextInput {
    id: ElementId,
    value: String,
    placeholder: SharedString,
    disabled: bool,
    error: bool,
    multiline: bool,
    focus_handle: FocusHandle,
    on_change: Option<Box<dyn Fn(&str, &mut Context<Self>) + 'static>>,
}

impl TextInput {
    pub fn new(id: impl Into<ElementId>, cx: &mut Context<Self>) -> Self {
        Self {
            id: id.into(),
            value: String::new(),
            placeholder: SharedString::default(),
            disabled: false,
            error: false,
            multiline: false,
            focus_handle: cx.focus_handle(),
            on_change: None,
        }
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<SharedString>) {
        self.placeholder = placeholder.into();
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Toggle the error presentation (red border)
    pub fn set_error(&mut self, error: bool) {
        self.error = error;
    }

    /// Render taller, for body text
    pub fn set_multiline(&mut self, multiline: bool) {
        self.multiline = multiline;
    }

    /// Set the change handler
    pub fn on_change(&mut self, handler: impl Fn(&str, &mut Context<Self>) + 'static) {
        self.on_change = Some(Box::new(handler));
    }

    fn emit_change(&mut self, cx: &mut Context<Self>) {
        if let Some(handler) = self.on_change.take() {
            handler(&self.value, cx);
            self.on_change = Some(handler);
        }
        cx.notify();
    }

    fn handle_key(&mut self, event: &KeyDownEvent, cx: &mut Context<Self>) {
        if self.disabled {
            return;
        }
        let keystroke = &event.keystroke;
        if keystroke.modifiers.control || keystroke.modifiers.platform || keystroke.modifiers.alt {
            return;
        }
        match keystroke.key.as_str() {
            "backspace" => {
                if self.value.pop().is_some() {
                    self.emit_change(cx);
                }
            }
            "space" => {
                self.value.push(' ');
                self.emit_change(cx);
            }
            "enter" if self.multiline => {
                self.value.push('\n');
                self.emit_change(cx);
            }
            _ => {
                if let Some(text) = keystroke.key_char.as_deref() {
                    self.value.push_str(text);
                    self.emit_change(cx);
                }
            }
        }
    }
}

impl Focusable for TextInput {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for TextInput {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let is_focused = self.focus_handle.is_focused(window);
        let border_color = if self.error {
            DeskColors::border_error()
        } else if is_focused {
            DeskColors::border_focus()
        } else {
            DeskColors::input_border()
        };

        let display_text = if self.value.is_empty() {
            self.placeholder.clone()
        } else {
            SharedString::from(self.value.clone())
        };

        let text_color = if self.value.is_empty() {
            DeskColors::input_placeholder()
        } else {
            DeskColors::text_primary()
        };

        let opacity = if self.disabled { 0.5 } else { 1.0 };

        div()
            .id(self.id.clone())
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(|this, event: &KeyDownEvent, _window, cx| {
                this.handle_key(event, cx);
            }))
            .px_3()
            .py_2()
            .when(self.multiline, |el| el.min_h(px(96.0)))
            .bg(DeskColors::input_bg())
            .border_1()
            .border_color(border_color)
            .rounded_md()
            .text_color(text_color)
            .text_sm()
            .min_w(px(200.0))
            .opacity(opacity)
            .child(display_text)
    }
}

/// Create a text input entity with an initial value
pub fn text_input<V: 'static>(
    id: impl Into<ElementId>,
    value: impl Into<String>,
    placeholder: impl Into<SharedString>,
    cx: &mut Context<V>,
) -> Entity<TextInput> {
    let id = id.into();
    let value = value.into();
    let placeholder = placeholder.into();

    cx.new(|cx| {
        let mut input = TextInput::new(id, cx);
        input.set_value(value);
        input.set_placeholder(placeholder);
        input
    })
}
