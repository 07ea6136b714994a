//! Transfer Page
//!
//! Kind switch, source/destination selects, amount and description fields.
//! Field errors render under their control; the success banner clears itself
//! after five seconds via a timer task the page owns, so leaving the page
//! cancels it.

use std::time::Duration;

use gpui::{
    div, prelude::*, px, ClickEvent, Context, Entity, IntoElement, ParentElement, Render, Styled,
    Task, Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::banner::Banner;
use crate::components::primitives::button::Button;
use crate::components::primitives::form_field::{FormField, RadioGroup};
use crate::components::primitives::select::{Select, SelectOption};
use crate::components::primitives::text_input::{text_input, TextInput};
use crate::features::transfer::controller::TransferController;
use crate::state::transfer_state::{TransferField, TransferKind, TransferPhase};
use crate::theme::colors::DeskColors;
use crate::utils::format::format_money;

const BANNER_SECS: u64 = 5;

/// Transfer page component
pub struct TransferPage {
    entities: AppEntities,
    controller: TransferController,
    amount_input: Entity<TextInput>,
    description_input: Entity<TextInput>,
    banner_timer: Option<Task<()>>,
}

impl TransferPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = TransferController::new(entities.clone());

        let amount_input = text_input("transfer-amount", "", "0.00", cx);
        {
            let transfer = entities.transfer.clone();
            amount_input.update(cx, |input, _| {
                input.on_change(move |value, cx| {
                    let value = value.to_string();
                    transfer.update(cx, |state, cx| {
                        state.set_amount(value);
                        cx.notify();
                    });
                });
            });
        }

        let description_input =
            text_input("transfer-description", "", "What is this transfer for?", cx);
        {
            let transfer = entities.transfer.clone();
            description_input.update(cx, |input, _| {
                input.on_change(move |value, cx| {
                    let value = value.to_string();
                    transfer.update(cx, |state, cx| {
                        state.set_description(value);
                        cx.notify();
                    });
                });
            });
        }

        cx.observe(&entities.transfer, Self::on_transfer_changed).detach();

        controller.load_reference(cx);

        Self {
            entities,
            controller,
            amount_input,
            description_input,
            banner_timer: None,
        }
    }

    /// Keep the input entities in step with the state machine (kind switch
    /// and success both reset the form) and manage the success banner timer.
    fn on_transfer_changed(
        &mut self,
        transfer: Entity<crate::state::transfer_state::TransferState>,
        cx: &mut Context<Self>,
    ) {
        let (amount, description, phase, amount_error, description_error, submitting) = {
            let state = transfer.read(cx);
            (
                state.amount.clone(),
                state.description.clone(),
                state.phase.clone(),
                state.errors.contains_key(&TransferField::Amount),
                state.errors.contains_key(&TransferField::Description),
                state.is_submitting(),
            )
        };

        self.amount_input.update(cx, |input, cx| {
            if amount != input.value() {
                input.set_value(amount);
            }
            input.set_error(amount_error);
            input.set_disabled(submitting);
            cx.notify();
        });
        self.description_input.update(cx, |input, cx| {
            if description != input.value() {
                input.set_value(description);
            }
            input.set_error(description_error);
            input.set_disabled(submitting);
            cx.notify();
        });

        match phase {
            TransferPhase::Succeeded => {
                if self.banner_timer.is_none() {
                    let transfer = transfer.clone();
                    self.banner_timer = Some(cx.spawn(async move |handle, cx| {
                        cx.background_executor()
                            .timer(Duration::from_secs(BANNER_SECS))
                            .await;
                        let _ = handle.update(cx, |this, cx| {
                            transfer.update(cx, |state, cx| {
                                state.clear_outcome();
                                cx.notify();
                            });
                            this.banner_timer = None;
                        });
                    }));
                }
            }
            _ => {
                // dropping the task cancels a pending clear
                self.banner_timer = None;
            }
        }

        cx.notify();
    }

    fn account_options(&self, cx: &Context<Self>, exclude: Option<&str>) -> Vec<SelectOption> {
        self.entities
            .transfer
            .read(cx)
            .accounts
            .iter()
            .filter(|a| Some(a.id.as_str()) != exclude)
            .map(|a| {
                SelectOption::new(
                    a.id.clone(),
                    format!("{} ({})", a.name, format_money(a.spendable())),
                )
            })
            .collect()
    }

    fn contact_options(&self, cx: &Context<Self>) -> Vec<SelectOption> {
        self.entities
            .transfer
            .read(cx)
            .contacts
            .iter()
            .map(|c| SelectOption::new(c.id.clone(), c.name.clone()))
            .collect()
    }
}

impl Render for TransferPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let state = self.entities.transfer.read(cx);
        let kind = state.kind;
        let phase = state.phase.clone();
        let errors = state.errors.clone();
        let from_id = state.from_account_id.clone();
        let to_id = state.to_account_id.clone();
        let contact_id = state.contact_id.clone();
        let submitting = state.is_submitting();
        let spendable = state.from_account().map(|a| a.spendable());

        let transfer = self.entities.transfer.clone();

        let kind_group = RadioGroup::new("transfer-kind")
            .option("between", TransferKind::BetweenAccounts.label())
            .option("external", TransferKind::External.label())
            .selected(Some(
                match kind {
                    TransferKind::BetweenAccounts => "between",
                    TransferKind::External => "external",
                }
                .to_string(),
            ))
            .disabled(submitting)
            .on_change({
                let transfer = transfer.clone();
                move |value, _window, cx| {
                    let kind = if value == "external" {
                        TransferKind::External
                    } else {
                        TransferKind::BetweenAccounts
                    };
                    transfer.update(cx, |state, cx| {
                        state.set_kind(kind);
                        cx.notify();
                    });
                }
            });

        let from_select = Select::new("transfer-from")
            .options(self.account_options(cx, None))
            .selected(from_id.clone())
            .placeholder("Select account")
            .disabled(submitting)
            .error(errors.contains_key(&TransferField::FromAccount))
            .on_change({
                let transfer = transfer.clone();
                move |value, _window, cx| {
                    let value = value.to_string();
                    transfer.update(cx, |state, cx| {
                        state.set_from_account(Some(value));
                        cx.notify();
                    });
                }
            });

        let destination_field = match kind {
            TransferKind::BetweenAccounts => FormField::new()
                .label("To account")
                .required()
                .control(
                    Select::new("transfer-to")
                        .options(self.account_options(cx, from_id.as_deref()))
                        .selected(to_id)
                        .placeholder("Select account")
                        .disabled(submitting)
                        .error(errors.contains_key(&TransferField::ToAccount))
                        .on_change({
                            let transfer = transfer.clone();
                            move |value, _window, cx| {
                                let value = value.to_string();
                                transfer.update(cx, |state, cx| {
                                    state.set_to_account(Some(value));
                                    cx.notify();
                                });
                            }
                        }),
                )
                .error(errors.get(&TransferField::ToAccount).cloned()),
            TransferKind::External => FormField::new()
                .label("Recipient")
                .required()
                .control(
                    Select::new("transfer-contact")
                        .options(self.contact_options(cx))
                        .selected(contact_id)
                        .placeholder("Select recipient")
                        .disabled(submitting)
                        .error(errors.contains_key(&TransferField::Contact))
                        .on_change({
                            let transfer = transfer.clone();
                            move |value, _window, cx| {
                                let value = value.to_string();
                                transfer.update(cx, |state, cx| {
                                    state.set_contact(Some(value));
                                    cx.notify();
                                });
                            }
                        }),
                )
                .error(errors.get(&TransferField::Contact).cloned()),
        };

        let mut amount_field = FormField::new()
            .label("Amount")
            .required()
            .control(self.amount_input.clone())
            .error(errors.get(&TransferField::Amount).cloned());
        if let Some(spendable) = spendable {
            amount_field = amount_field.help(format!("{} available", format_money(spendable)));
        }

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
                    .child("Transfer money"),
            )
            .when(phase == TransferPhase::Succeeded, |el| {
                el.child(Banner::success("Transfer complete"))
            })
            .when_some(
                match &phase {
                    TransferPhase::Failed(message) => Some(message.clone()),
                    _ => None,
                },
                |el, message| el.child(Banner::error(message)),
            )
            .child(
                div()
                    .max_w(px(480.0))
                    .p_6()
                    .bg(DeskColors::content_bg())
                    .border_1()
                    .border_color(DeskColors::border())
                    .rounded_lg()
                    .flex()
                    .flex_col()
                    .gap_4()
                    .child(FormField::new().label("Transfer type").control(kind_group))
                    .child(
                        FormField::new()
                            .label("From account")
                            .required()
                            .control(from_select)
                            .error(errors.get(&TransferField::FromAccount).cloned()),
                    )
                    .child(destination_field)
                    .child(amount_field)
                    .child(
                        FormField::new()
                            .label("Description")
                            .required()
                            .control(self.description_input.clone())
                            .error(errors.get(&TransferField::Description).cloned()),
                    )
                    .child(
                        Button::primary("transfer-submit", "Send transfer")
                            .loading(submitting)
                            .full_width()
                            .on_click(cx.listener(
                                |this, _event: &ClickEvent, _window, cx| {
                                    this.controller.submit(cx);
                                },
                            )),
                    ),
            )
    }
}
