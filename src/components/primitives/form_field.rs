//! FormField Component
//!
//! One polymorphic wrapper around the input primitives: label, control,
//! help/error line. The caller owns the value and the change callback; the
//! field only decides presentation (size, error, disabled). Error text is
//! caller-supplied and purely presentational.

use gpui::{
    div, prelude::*, px, AnyElement, App, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::DeskColors;

/// Field label size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FieldSize {
    fn label_size(&self) -> f32 {
        match self {
            FieldSize::Small => 11.0,
            FieldSize::Medium => 13.0,
            FieldSize::Large => 14.0,
        }
    }
}

/// A labelled form field wrapping any control element
#[derive(IntoElement)]
pub struct FormField {
    label: Option<SharedString>,
    control: Option<AnyElement>,
    error: Option<SharedString>,
    help: Option<SharedString>,
    size: FieldSize,
    required: bool,
}

impl FormField {
    pub fn new() -> Self {
        Self {
            label: None,
            control: None,
            error: None,
            help: None,
            size: FieldSize::Medium,
            required: false,
        }
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// The wrapped control: text input, select, checkbox, radio group
    pub fn control(mut self, control: impl IntoElement) -> Self {
        self.control = Some(control.into_any_element());
        self
    }

    /// Caller-supplied error text; shown in red and overrides help text
    pub fn error(mut self, error: Option<impl Into<SharedString>>) -> Self {
        self.error = error.map(Into::into);
        self
    }

    pub fn help(mut self, help: impl Into<SharedString>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn size(mut self, size: FieldSize) -> Self {
        self.size = size;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

impl Default for FormField {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOnce for FormField {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let mut field = div().flex().flex_col().gap_1();

        if let Some(label) = self.label {
            let mut label_row = div()
                .flex()
                .items_center()
                .gap_0p5()
                .text_size(px(self.size.label_size()))
                .font_weight(gpui::FontWeight::MEDIUM)
                .text_color(DeskColors::text_secondary())
                .child(label);
            if self.required {
                label_row = label_row.child(
                    div().text_color(DeskColors::danger()).child("*"),
                );
            }
            field = field.child(label_row);
        }

        if let Some(control) = self.control {
            field = field.child(control);
        }

        if let Some(error) = self.error {
            field = field.child(
                div()
                    .text_size(px(12.0))
                    .text_color(DeskColors::danger())
                    .child(error),
            );
        } else if let Some(help) = self.help {
            field = field.child(
                div()
                    .text_size(px(12.0))
                    .text_color(DeskColors::text_muted())
                    .child(help),
            );
        }

        field
    }
}

/// A horizontal radio group control
#[derive(IntoElement)]
pub struct RadioGroup {
    id: ElementId,
    options: Vec<(String, SharedString)>,
    selected: Option<String>,
    disabled: bool,
    on_change: Option<Box<dyn Fn(&str, &mut Window, &mut App) + 'static>>,
}

impl RadioGroup {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            options: Vec::new(),
            selected: None,
            disabled: false,
            on_change: None,
        }
    }

    pub fn option(mut self, value: impl Into<String>, label: impl Into<SharedString>) -> Self {
        self.options.push((value.into(), label.into()));
        self
    }

    pub fn selected(mut self, value: Option<String>) -> Self {
        self.selected = value;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Handler receiving the newly selected option value
    pub fn on_change(mut self, handler: impl Fn(&str, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for RadioGroup {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let selected = self.selected.clone();
        let disabled = self.disabled;
        let handler = self.on_change.map(std::rc::Rc::new);

        div()
            .id(self.id)
            .flex()
            .items_center()
            .gap_4()
            .when(disabled, |el| el.opacity(0.5))
            .children(self.options.into_iter().enumerate().map(|(i, (value, label))| {
                let is_selected = selected.as_deref() == Some(value.as_str());
                let handler = handler.clone();

                let dot = div()
                    .size(px(16.0))
                    .rounded_full()
                    .border_2()
                    .border_color(if is_selected {
                        DeskColors::accent()
                    } else {
                        DeskColors::input_border()
                    })
                    .flex()
                    .items_center()
                    .justify_center()
                    .when(is_selected, |el| {
                        el.child(
                            div()
                                .size(px(8.0))
                                .rounded_full()
                                .bg(DeskColors::accent()),
                        )
                    });

                div()
                    .id(i)
                    .flex()
                    .items_center()
                    .gap_2()
                    .cursor_pointer()
                    .child(dot)
                    .child(
                        div()
                            .text_sm()
                            .text_color(DeskColors::text_primary())
                            .child(label),
                    )
                    .when(!disabled, |el| {
                        el.when_some(handler, |el, handler| {
                            el.on_click(move |_event, window, cx| {
                                handler(&value, window, cx);
                            })
                        })
                    })
            }))
    }
}
