//! Profile Page
//!
//! Read-only profile card with an explicit edit mode. Edits live in a draft
//! buffer; Save is enabled only while the draft differs from the committed
//! profile, and Cancel reverts the buffer.

use std::time::Duration;

use gpui::{
    div, prelude::*, px, ClickEvent, Context, Entity, IntoElement, ParentElement, Render, Styled,
    Task, Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::banner::Banner;
use crate::components::primitives::avatar::{Avatar, AvatarShape, AvatarSize};
use crate::components::primitives::button::{Button, ButtonVariant};
use crate::components::primitives::form_field::FormField;
use crate::components::primitives::text_input::{text_input, TextInput};
use crate::features::profile::controller::ProfileController;
use crate::state::profile_state::ProfileState;
use crate::theme::colors::DeskColors;

const BANNER_SECS: u64 = 5;

/// Profile page component
pub struct ProfilePage {
    entities: AppEntities,
    controller: ProfileController,
    name_input: Entity<TextInput>,
    email_input: Entity<TextInput>,
    phone_input: Entity<TextInput>,
    address_input: Entity<TextInput>,
    banner_timer: Option<Task<()>>,
}

impl ProfilePage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = ProfileController::new(entities.clone());

        let name_input = Self::draft_input("profile-name", "Full name", &entities, cx, |p, v| {
            p.name = v;
        });
        let email_input = Self::draft_input("profile-email", "Email", &entities, cx, |p, v| {
            p.email = v;
        });
        let phone_input = Self::draft_input("profile-phone", "Phone", &entities, cx, |p, v| {
            p.phone = v;
        });
        let address_input =
            Self::draft_input("profile-address", "Address", &entities, cx, |p, v| {
                p.address = v;
            });

        cx.observe(&entities.profile, Self::on_profile_changed).detach();

        controller.load(cx);

        Self {
            entities,
            controller,
            name_input,
            email_input,
            phone_input,
            address_input,
            banner_timer: None,
        }
    }

    fn draft_input(
        id: &'static str,
        placeholder: &'static str,
        entities: &AppEntities,
        cx: &mut Context<Self>,
        apply: impl Fn(&mut crate::domain::user::UserProfile, String) + 'static,
    ) -> Entity<TextInput> {
        let input = text_input(id, "", placeholder, cx);
        let profile = entities.profile.clone();
        input.update(cx, |input, _| {
            input.on_change(move |value, cx| {
                let value = value.to_string();
                profile.update(cx, |state, cx| {
                    apply(state.profile.draft_mut(), value);
                    cx.notify();
                });
            });
        });
        input
    }

    /// Sync inputs from the draft buffer and manage the success banner timer
    fn on_profile_changed(&mut self, profile: Entity<ProfileState>, cx: &mut Context<Self>) {
        let (draft, success) = {
            let state = profile.read(cx);
            (state.profile.draft().clone(), state.success.is_some())
        };

        for (input, value) in [
            (&self.name_input, &draft.name),
            (&self.email_input, &draft.email),
            (&self.phone_input, &draft.phone),
            (&self.address_input, &draft.address),
        ] {
            if input.read(cx).value() != value {
                let value = value.clone();
                input.update(cx, |input, cx| {
                    input.set_value(value);
                    cx.notify();
                });
            }
        }

        if success {
            if self.banner_timer.is_none() {
                let profile = profile.clone();
                self.banner_timer = Some(cx.spawn(async move |handle, cx| {
                    cx.background_executor()
                        .timer(Duration::from_secs(BANNER_SECS))
                        .await;
                    let _ = handle.update(cx, |this, cx| {
                        profile.update(cx, |state, cx| {
                            state.clear_success();
                            cx.notify();
                        });
                        this.banner_timer = None;
                    });
                }));
            }
        } else {
            self.banner_timer = None;
        }

        cx.notify();
    }

    fn render_detail_row(&self, label: &'static str, value: String) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap_0p5()
            .child(
                div()
                    .text_xs()
                    .text_color(DeskColors::text_muted())
                    .child(label),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(DeskColors::text_primary())
                    .child(if value.is_empty() { "—".to_string() } else { value }),
            )
    }

    fn render_view(&self, cx: &Context<Self>) -> impl IntoElement {
        let state = self.entities.profile.read(cx);
        let profile = state.profile.committed().clone();

        div()
            .flex()
            .flex_col()
            .gap_4()
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_4()
                    .child(
                        Avatar::new(profile.name.clone())
                            .size(AvatarSize::XLarge)
                            .shape(AvatarShape::Circle),
                    )
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .child(
                                div()
                                    .text_size(px(18.0))
                                    .font_weight(gpui::FontWeight::SEMIBOLD)
                                    .text_color(DeskColors::text_primary())
                                    .child(profile.name.clone()),
                            )
                            .child(
                                div()
                                    .text_sm()
                                    .text_color(DeskColors::text_secondary())
                                    .child(profile.email.clone()),
                            ),
                    ),
            )
            .child(self.render_detail_row("Phone", profile.phone))
            .child(self.render_detail_row("Address", profile.address))
            .child(
                Button::secondary("profile-edit", "Edit profile").on_click(cx.listener(
                    |this, _event: &ClickEvent, _window, cx| {
                        this.entities.profile.update(cx, |state, cx| {
                            state.start_edit();
                            cx.notify();
                        });
                    },
                )),
            )
    }

    fn render_edit(&self, cx: &Context<Self>) -> impl IntoElement {
        let state = self.entities.profile.read(cx);
        let dirty = state.is_dirty();
        let saving = state.saving;

        div()
            .flex()
            .flex_col()
            .gap_4()
            .child(
                FormField::new()
                    .label("Full name")
                    .required()
                    .control(self.name_input.clone()),
            )
            .child(
                FormField::new()
                    .label("Email")
                    .required()
                    .control(self.email_input.clone()),
            )
            .child(FormField::new().label("Phone").control(self.phone_input.clone()))
            .child(FormField::new().label("Address").control(self.address_input.clone()))
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(
                        Button::primary("profile-save", "Save changes")
                            .disabled(!dirty)
                            .loading(saving)
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.controller.save(cx);
                            })),
                    )
                    .child(
                        Button::new("profile-cancel", "Cancel")
                            .variant(ButtonVariant::Ghost)
                            .disabled(saving)
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.entities.profile.update(cx, |state, cx| {
                                    state.cancel_edit();
                                    cx.notify();
                                });
                            })),
                    ),
            )
    }
}

impl Render for ProfilePage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let state = self.entities.profile.read(cx);
        let editing = state.editing;
        let loading = state.loading;
        let success = state.success.clone();
        let error = state.error.clone();

        let body = if loading {
            div()
                .py_8()
                .flex()
                .justify_center()
                .text_color(DeskColors::text_muted())
                .child("Loading...")
                .into_any_element()
        } else if editing {
            self.render_edit(cx).into_any_element()
        } else {
            self.render_view(cx).into_any_element()
        };

        div()
            .size_full()
            .flex()
            .flex_col()
            .p_4()
            .gap_4()
            .child(
                div()
                    .text_xl()
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(DeskColors::text_primary())
                    .child("Profile"),
            )
            .when_some(success, |el, message| el.child(Banner::success(message)))
            .when_some(error, |el, message| el.child(Banner::error(message)))
            .child(
                div()
                    .max_w(px(480.0))
                    .p_6()
                    .bg(DeskColors::content_bg())
                    .border_1()
                    .border_color(DeskColors::border())
                    .rounded_lg()
                    .child(body),
            )
    }
}
