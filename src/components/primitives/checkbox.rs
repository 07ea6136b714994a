//! Checkbox Component
//!
//! Tri-state: besides checked/unchecked, an indeterminate state marks a
//! mixed selection (some rows done, some not). Clicking an indeterminate
//! box resolves toward checked, so "toggle all" finishes the remainder
//! instead of undoing what is already done.

use gpui::{
    div, prelude::*, px, App, ElementId, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::DeskColors;

/// Visual state of a checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckState {
    #[default]
    Unchecked,
    Checked,
    /// Mixed selection marker, used by aggregate checkboxes
    Indeterminate,
}

impl CheckState {
    pub fn from_bool(checked: bool) -> Self {
        if checked {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        }
    }

    /// Aggregate state over a set of booleans
    pub fn from_iter(values: impl IntoIterator<Item = bool>) -> Self {
        let mut any_true = false;
        let mut any_false = false;
        for value in values {
            if value {
                any_true = true;
            } else {
                any_false = true;
            }
        }
        match (any_true, any_false) {
            (true, true) => CheckState::Indeterminate,
            (true, false) => CheckState::Checked,
            _ => CheckState::Unchecked,
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            CheckState::Unchecked => "",
            CheckState::Checked => "✓",
            CheckState::Indeterminate => "—",
        }
    }

    fn filled(self) -> bool {
        self != CheckState::Unchecked
    }

    /// The boolean a click reports; indeterminate resolves to checked
    fn toggled(self) -> bool {
        self != CheckState::Checked
    }
}

/// A checkbox component
#[derive(IntoElement)]
pub struct Checkbox {
    id: ElementId,
    state: CheckState,
    label: Option<SharedString>,
    disabled: bool,
    on_change: Option<Box<dyn Fn(bool, &mut Window, &mut App) + 'static>>,
}

impl Checkbox {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            state: CheckState::Unchecked,
            label: None,
            disabled: false,
            on_change: None,
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.state = CheckState::from_bool(checked);
        self
    }

    pub fn state(mut self, state: CheckState) -> Self {
        self.state = state;
        self
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Handler receiving the toggled value
    pub fn on_change(mut self, handler: impl Fn(bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Checkbox {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let filled = self.state.filled();
        let toggled = self.state.toggled();
        let disabled = self.disabled;

        let fill = if filled {
            DeskColors::accent()
        } else {
            DeskColors::input_bg()
        };
        let rim = if filled {
            DeskColors::accent()
        } else {
            DeskColors::input_border()
        };

        div()
            .id(self.id)
            .flex()
            .items_center()
            .gap_2()
            .when(disabled, |el| el.opacity(0.5))
            .when(!disabled, |el| el.cursor_pointer())
            .child(
                div()
                    .size(px(18.0))
                    .rounded_sm()
                    .border_1()
                    .border_color(rim)
                    .bg(fill)
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_color(DeskColors::text_light())
                    .text_size(px(12.0))
                    .child(self.state.glyph()),
            )
            .when_some(self.label, |el, label| {
                el.child(
                    div()
                        .text_sm()
                        .text_color(DeskColors::text_primary())
                        .child(label),
                )
            })
            .when_some(
                self.on_change.filter(|_| !disabled),
                |el, handler| {
                    el.on_click(move |_event, window, cx| handler(toggled, window, cx))
                },
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_state() {
        assert_eq!(CheckState::from_iter([]), CheckState::Unchecked);
        assert_eq!(CheckState::from_iter([false, false]), CheckState::Unchecked);
        assert_eq!(CheckState::from_iter([true, true]), CheckState::Checked);
        assert_eq!(
            CheckState::from_iter([true, false]),
            CheckState::Indeterminate
        );
    }

    #[test]
    fn test_indeterminate_resolves_to_checked() {
        assert!(CheckState::Unchecked.toggled());
        assert!(CheckState::Indeterminate.toggled());
        assert!(!CheckState::Checked.toggled());
    }
}
