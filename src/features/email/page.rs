//! Email Page
//!
//! Folder rail, searchable message list, reading pane and a compose modal.
//! Search refetches after a 300ms pause; retyping within the window drops
//! the pending fetch task. Escape closes the compose modal through the same
//! path as the backdrop and Cancel.

use std::time::Duration;

use gpui::{
    div, prelude::*, px, ClickEvent, Context, Entity, FocusHandle, Focusable,
    InteractiveElement, IntoElement, KeyDownEvent, ParentElement, Render, SharedString,
    StatefulInteractiveElement, Styled, Task, Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::banner::Banner;
use crate::components::composite::chat_header::ChatHeader;
use crate::components::composite::modal::Modal;
use crate::components::primitives::button::{Button, ButtonVariant};
use crate::components::primitives::form_field::FormField;
use crate::components::primitives::text_input::{text_input, TextInput};
use crate::data::sources::Sources;
use crate::domain::message::{Folder, Message, OutgoingMessage};
use crate::features::email::controller::EmailController;
use crate::theme::colors::DeskColors;
use crate::utils::format::{format_datetime, truncate};

const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Email page component
pub struct EmailPage {
    entities: AppEntities,
    controller: EmailController,
    search_input: Entity<TextInput>,
    last_search: String,
    search_debounce: Option<Task<()>>,
    compose_open: bool,
    sending: bool,
    to_input: Entity<TextInput>,
    subject_input: Entity<TextInput>,
    body_input: Entity<TextInput>,
    focus_handle: FocusHandle,
}

impl EmailPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = EmailController::new(entities.clone());

        let search_input = text_input("mail-search", "", "Search mail...", cx);
        {
            let mail = entities.mail.clone();
            search_input.update(cx, |input, _| {
                input.on_change(move |value, cx| {
                    let value = value.to_string();
                    mail.update(cx, |state, cx| {
                        state.set_search(value);
                        cx.notify();
                    });
                });
            });
        }

        let to_input = text_input("compose-to", "", "recipient@example.com", cx);
        let subject_input = text_input("compose-subject", "", "Subject", cx);
        let body_input = cx.new(|cx| {
            let mut input = TextInput::new("compose-body", cx);
            input.set_placeholder("Write your message...");
            input.set_multiline(true);
            input
        });

        cx.observe(&entities.mail, Self::on_mail_changed).detach();

        controller.refresh(cx);

        Self {
            entities,
            controller,
            search_input,
            last_search: String::new(),
            search_debounce: None,
            compose_open: false,
            sending: false,
            to_input,
            subject_input,
            body_input,
            focus_handle: cx.focus_handle(),
        }
    }

    /// Restart the debounce window whenever the search text moves
    fn on_mail_changed(
        &mut self,
        mail: Entity<crate::state::mailbox_state::MailboxState>,
        cx: &mut Context<Self>,
    ) {
        let search = mail.read(cx).search.clone();
        if search != self.last_search {
            self.last_search = search;
            // replacing the task drops the previous pending fetch
            self.search_debounce = Some(cx.spawn(async move |handle, cx| {
                cx.background_executor()
                    .timer(Duration::from_millis(SEARCH_DEBOUNCE_MS))
                    .await;
                let _ = handle.update(cx, |this, cx| {
                    this.search_debounce = None;
                    this.controller.refresh(cx);
                });
            }));
        }
        cx.notify();
    }

    fn open_compose(&mut self, cx: &mut Context<Self>) {
        self.compose_open = true;
        cx.notify();
    }

    fn close_compose(&mut self, cx: &mut Context<Self>) {
        self.compose_open = false;
        for input in [&self.to_input, &self.subject_input, &self.body_input] {
            input.update(cx, |input, cx| {
                input.set_value("");
                cx.notify();
            });
        }
        cx.notify();
    }

    fn send(&mut self, cx: &mut Context<Self>) {
        if self.sending {
            return;
        }
        let outgoing = OutgoingMessage {
            to: self.to_input.read(cx).value().trim().to_string(),
            subject: self.subject_input.read(cx).value().trim().to_string(),
            body: self.body_input.read(cx).value().to_string(),
        };
        if outgoing.to.is_empty() {
            return;
        }

        self.sending = true;
        cx.notify();

        let mail_source = cx.global::<Sources>().mail.clone();
        let entities = self.entities.clone();

        cx.spawn(async move |handle, cx| {
            let result = mail_source.send(outgoing).await;
            let _ = handle.update(cx, |this, cx| {
                this.sending = false;
                match result {
                    Ok(()) => {
                        this.close_compose(cx);
                        // the sent message should show up in its folder
                        if entities.mail.read(cx).folder == Folder::Sent {
                            this.controller.refresh(cx);
                        }
                    }
                    Err(e) => {
                        entities.mail.update(cx, |state, cx| {
                            state.set_error(e.to_string());
                            cx.notify();
                        });
                    }
                }
                cx.notify();
            });
        })
        .detach();
    }

    fn render_folder(&self, folder: Folder, active: Folder, cx: &Context<Self>) -> impl IntoElement {
        let is_active = folder == active;
        let text_color = if is_active {
            DeskColors::accent()
        } else {
            DeskColors::text_secondary()
        };

        div()
            .id(SharedString::from(format!("mail-folder-{:?}", folder)))
            .px_3()
            .py_1p5()
            .rounded_md()
            .text_sm()
            .text_color(text_color)
            .when(is_active, |el| el.bg(gpui::rgba(0x0d948816)))
            .cursor_pointer()
            .hover(|s| s.bg(DeskColors::table_row_hover()))
            .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                this.controller.set_folder(folder, cx);
            }))
            .child(folder.label())
    }

    fn render_row(&self, message: &Message, selected: bool, cx: &Context<Self>) -> impl IntoElement {
        let id = message.id.clone();
        let weight = if message.read {
            gpui::FontWeight::NORMAL
        } else {
            gpui::FontWeight::SEMIBOLD
        };

        div()
            .id(SharedString::from(format!("mail-{}", message.id)))
            .w_full()
            .px_3()
            .py_2()
            .flex()
            .flex_col()
            .gap_0p5()
            .when(selected, |el| el.bg(DeskColors::selection_bg()))
            .when(!selected, |el| el.hover(|s| s.bg(DeskColors::table_row_hover())))
            .border_b_1()
            .border_color(DeskColors::border())
            .cursor_pointer()
            .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                this.controller.open(id.clone(), cx);
            }))
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .text_sm()
                            .font_weight(weight)
                            .text_color(DeskColors::text_primary())
                            .child(message.sender.clone()),
                    )
                    .child(
                        div()
                            .text_xs()
                            .text_color(DeskColors::text_muted())
                            .child(format_datetime(&message.timestamp)),
                    ),
            )
            .child(
                div()
                    .text_sm()
                    .font_weight(weight)
                    .text_color(DeskColors::text_primary())
                    .child(message.subject.clone()),
            )
            .child(
                div()
                    .text_xs()
                    .text_color(DeskColors::text_secondary())
                    .child(truncate(&message.body, 80)),
            )
            .when(!message.attachments.is_empty(), |el| {
                el.child(
                    div()
                        .text_xs()
                        .text_color(DeskColors::text_muted())
                        .child(format!("📎 {}", message.attachments.len())),
                )
            })
    }

    fn render_reading_pane(&self, message: &Message) -> impl IntoElement {
        div()
            .flex_1()
            .flex()
            .flex_col()
            .overflow_hidden()
            .child(
                ChatHeader::new(message.sender.clone())
                    .subtitle(format_datetime(&message.timestamp)),
            )
            .child(
                div()
                    .id("mail-body")
                    .flex_1()
                    .p_4()
                    .overflow_y_scroll()
                    .flex()
                    .flex_col()
                    .gap_3()
                    .child(
                        div()
                            .text_size(px(16.0))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(DeskColors::text_primary())
                            .child(message.subject.clone()),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(DeskColors::text_primary())
                            .child(message.body.clone()),
                    )
                    .when(!message.attachments.is_empty(), |el| {
                        el.child(div().flex().flex_col().gap_1().children(
                            message.attachments.iter().map(|a| {
                                div()
                                    .px_2()
                                    .py_1()
                                    .rounded_md()
                                    .bg(DeskColors::table_header_bg())
                                    .text_xs()
                                    .text_color(DeskColors::text_secondary())
                                    .child(format!("📎 {} ({} KB)", a.name, a.size / 1024))
                            }),
                        ))
                    }),
            )
    }

    fn render_compose(&self, cx: &Context<Self>) -> impl IntoElement {
        let page = cx.entity();
        let close_page = page.clone();
        let send_page = page.clone();
        let cancel_page = page;

        Modal::new("New message")
            .open(self.compose_open)
            .on_close(move |cx| {
                close_page.update(cx, |this, cx| this.close_compose(cx));
            })
            .child(FormField::new().label("To").required().control(self.to_input.clone()))
            .child(FormField::new().label("Subject").control(self.subject_input.clone()))
            .child(FormField::new().label("Message").control(self.body_input.clone()))
            .footer(
                Button::new("compose-cancel", "Cancel")
                    .variant(ButtonVariant::Ghost)
                    .disabled(self.sending)
                    .on_click(move |_event, _window, cx| {
                        cancel_page.update(cx, |this, cx| this.close_compose(cx));
                    }),
            )
            .footer(
                Button::primary("compose-send", "Send")
                    .loading(self.sending)
                    .on_click(move |_event, _window, cx| {
                        send_page.update(cx, |this, cx| this.send(cx));
                    }),
            )
    }
}

impl Focusable for EmailPage {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for EmailPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let state = self.entities.mail.read(cx);
        let active = state.folder;
        let loading = state.loading;
        let error = state.error.clone();
        let messages = state.messages.clone();
        let selected_id = state.selected_id.clone();
        let selected = state.selected().cloned();

        div()
            .id("email-page")
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(|this, event: &KeyDownEvent, _window, cx| {
                if event.keystroke.key == "escape" && this.compose_open {
                    this.close_compose(cx);
                }
            }))
            .size_full()
            .flex()
            .flex_col()
            .p_4()
            .gap_3()
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .text_xl()
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(DeskColors::text_primary())
                            .child("Email"),
                    )
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(self.search_input.clone())
                            .child(Button::primary("compose-open", "Compose").on_click(
                                cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                    this.open_compose(cx);
                                }),
                            )),
                    ),
            )
            .when_some(error, |el, message| el.child(Banner::error(message)))
            .child(
                div()
                    .flex_1()
                    .flex()
                    .overflow_hidden()
                    .bg(DeskColors::content_bg())
                    .border_1()
                    .border_color(DeskColors::border())
                    .rounded_lg()
                    .child(
                        div()
                            .w(px(140.0))
                            .h_full()
                            .p_2()
                            .flex()
                            .flex_col()
                            .gap_1()
                            .border_r_1()
                            .border_color(DeskColors::border())
                            .children(
                                Folder::mail_folders()
                                    .iter()
                                    .map(|folder| self.render_folder(*folder, active, cx)),
                            ),
                    )
                    .child(
                        div()
                            .id("mail-list")
                            .w(px(340.0))
                            .h_full()
                            .overflow_y_scroll()
                            .border_r_1()
                            .border_color(DeskColors::border())
                            .when(loading, |el| {
                                el.child(
                                    div()
                                        .py_8()
                                        .flex()
                                        .justify_center()
                                        .text_color(DeskColors::text_muted())
                                        .child("Loading..."),
                                )
                            })
                            .when(!loading && messages.is_empty(), |el| {
                                el.child(
                                    div()
                                        .py_8()
                                        .flex()
                                        .justify_center()
                                        .text_color(DeskColors::text_muted())
                                        .child("No messages"),
                                )
                            })
                            .children(messages.iter().map(|message| {
                                let is_selected =
                                    selected_id.as_deref() == Some(message.id.as_str());
                                self.render_row(message, is_selected, cx)
                            })),
                    )
                    .child(match selected {
                        Some(message) => self.render_reading_pane(&message).into_any_element(),
                        None => div()
                            .flex_1()
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_color(DeskColors::text_muted())
                            .child("Select a message to read it")
                            .into_any_element(),
                    }),
            )
            .child(self.render_compose(cx))
    }
}
