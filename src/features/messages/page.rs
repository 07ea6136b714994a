//! Messages Page
//!
//! Banking notices split into fixed categories: a category rail, the notice
//! list, and a reading pane. Opening a notice marks it read.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, IntoElement, ParentElement, Render, SharedString,
    StatefulInteractiveElement, InteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::banner::Banner;
use crate::domain::message::{Folder, Message};
use crate::features::messages::controller::MessagesController;
use crate::theme::colors::DeskColors;
use crate::utils::format::{format_datetime, truncate};

/// Messages page component
pub struct MessagesPage {
    entities: AppEntities,
    controller: MessagesController,
}

impl MessagesPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = MessagesController::new(entities.clone());

        cx.observe(&entities.notices, |_this, _, cx| cx.notify())
            .detach();

        controller.refresh(cx);

        Self {
            entities,
            controller,
        }
    }

    fn render_category(
        &self,
        folder: Folder,
        active: Folder,
        cx: &Context<Self>,
    ) -> impl IntoElement {
        let is_active = folder == active;
        let text_color = if is_active {
            DeskColors::accent()
        } else {
            DeskColors::text_secondary()
        };

        div()
            .id(SharedString::from(format!("notice-folder-{:?}", folder)))
            .px_3()
            .py_2()
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
            .id(SharedString::from(format!("notice-{}", message.id)))
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
                            .flex()
                            .items_center()
                            .gap_2()
                            .when(!message.read, |el| {
                                el.child(
                                    div()
                                        .size(px(8.0))
                                        .rounded_full()
                                        .bg(DeskColors::accent()),
                                )
                            })
                            .child(
                                div()
                                    .text_sm()
                                    .font_weight(weight)
                                    .text_color(DeskColors::text_primary())
                                    .child(message.subject.clone()),
                            ),
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
                    .text_xs()
                    .text_color(DeskColors::text_secondary())
                    .child(truncate(&message.body, 90)),
            )
    }

    fn render_reading_pane(&self, message: &Message) -> impl IntoElement {
        div()
            .flex_1()
            .p_4()
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
                    .text_xs()
                    .text_color(DeskColors::text_muted())
                    .child(format!(
                        "{} · {}",
                        message.sender,
                        format_datetime(&message.timestamp)
                    )),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(DeskColors::text_primary())
                    .child(message.body.clone()),
            )
            .when(!message.attachments.is_empty(), |el| {
                el.child(
                    div()
                        .flex()
                        .flex_col()
                        .gap_1()
                        .children(message.attachments.iter().map(|a| {
                            div()
                                .px_2()
                                .py_1()
                                .rounded_md()
                                .bg(DeskColors::table_header_bg())
                                .text_xs()
                                .text_color(DeskColors::text_secondary())
                                .child(format!("📎 {} ({} KB)", a.name, a.size / 1024))
                        })),
                )
            })
    }
}

impl Render for MessagesPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let state = self.entities.notices.read(cx);
        let active = state.folder;
        let loading = state.loading;
        let error = state.error.clone();
        let messages = state.messages.clone();
        let selected_id = state.selected_id.clone();
        let selected = state.selected().cloned();
        let unread = state.unread_count();

        div()
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
                            .child("Messages"),
                    )
                    .when(unread > 0, |el| {
                        el.child(
                            div()
                                .text_sm()
                                .text_color(DeskColors::text_secondary())
                                .child(format!("{unread} unread")),
                        )
                    }),
            )
            .when_some(error, |el, message| el.child(Banner::error(message)))
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_1()
                    .children(
                        Folder::notice_folders()
                            .iter()
                            .map(|folder| self.render_category(*folder, active, cx)),
                    ),
            )
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
                            .id("notice-list")
                            .w(px(380.0))
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
                                        .child("No messages in this category"),
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
    }
}
