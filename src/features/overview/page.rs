//! Overview Page
//!
//! Account summary cards over a filterable, cursor-paged transaction table.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, Entity, InteractiveElement, IntoElement,
    ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::banner::Banner;
use crate::components::composite::data_table::{DataTable, LoadMore};
use crate::components::composite::transaction_list::transaction_columns;
use crate::components::primitives::select::{Select, SelectOption};
use crate::components::primitives::text_input::{text_input, TextInput};
use crate::domain::account::Account;
use crate::domain::transaction::{Direction, Transaction, TransactionStatus};
use crate::features::overview::controller::OverviewController;
use crate::state::transactions_state::TransactionSort;
use crate::theme::colors::DeskColors;
use crate::utils::format::format_money;

const ALL: &str = "all";

/// Overview page component
pub struct OverviewPage {
    entities: AppEntities,
    controller: OverviewController,
    table: Entity<DataTable<Transaction>>,
    search_input: Entity<TextInput>,
}

impl OverviewPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = OverviewController::new(entities.clone());

        let table = cx.new(|cx| {
            let mut table = DataTable::<Transaction>::new(cx);
            table.set_columns(transaction_columns());
            table.set_empty_message("No transactions match the current filters");
            table
        });

        let search_input = text_input("tx-search", "", "Search transactions...", cx);
        {
            let transactions = entities.transactions.clone();
            search_input.update(cx, |input, _| {
                input.on_change(move |value, cx| {
                    let value = value.to_string();
                    transactions.update(cx, |state, cx| {
                        state.filter.search = value;
                        cx.notify();
                    });
                });
            });
        }

        // Feed filtered rows into the table whenever the list state changes
        let table_clone = table.clone();
        cx.observe(&entities.transactions, move |_this, transactions, cx| {
            let (rows, loading) = {
                let state = transactions.read(cx);
                let rows: Vec<Transaction> =
                    state.filtered().into_iter().cloned().collect();
                (rows, state.loading)
            };
            table_clone.update(cx, |table, cx| {
                table.set_rows(rows);
                table.set_loading(loading);
                cx.notify();
            });
        })
        .detach();

        cx.observe(&entities.overview, |_this, _, cx| cx.notify())
            .detach();

        controller.refresh(cx);

        Self {
            entities,
            controller,
            table,
            search_input,
        }
    }

    fn render_account_card(
        &self,
        account: &Account,
        selected: bool,
        cx: &Context<Self>,
    ) -> impl IntoElement {
        let id = account.id.clone();
        let border_color = if selected {
            DeskColors::accent()
        } else {
            DeskColors::border()
        };

        div()
            .id(SharedString::from(format!("account-{}", account.id)))
            .flex_1()
            .p_4()
            .bg(DeskColors::content_bg())
            .border_1()
            .border_color(border_color)
            .rounded_lg()
            .cursor_pointer()
            .hover(|s| s.bg(DeskColors::table_row_hover()))
            .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                let already = this.entities.overview.read(cx).selected_account_id.as_deref()
                    == Some(id.as_str());
                let next = if already { None } else { Some(id.clone()) };
                this.controller.select_account(next, cx);
            }))
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .text_sm()
                            .font_weight(gpui::FontWeight::MEDIUM)
                            .text_color(DeskColors::text_primary())
                            .child(account.name.clone()),
                    )
                    .child(
                        div()
                            .text_xs()
                            .text_color(DeskColors::text_muted())
                            .child(account.kind.label()),
                    ),
            )
            .child(
                div()
                    .text_xs()
                    .text_color(DeskColors::text_muted())
                    .child(account.number.clone()),
            )
            .child(
                div()
                    .mt_2()
                    .text_size(px(20.0))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(DeskColors::text_primary())
                    .child(format_money(account.balance)),
            )
            .when_some(account.available, |el, available| {
                el.child(
                    div()
                        .text_xs()
                        .text_color(DeskColors::text_secondary())
                        .child(format!("{} available", format_money(available))),
                )
            })
    }

    fn render_toolbar(&self, cx: &Context<Self>) -> impl IntoElement {
        let state = self.entities.transactions.read(cx);
        let status = state.filter.status;
        let direction = state.filter.direction;
        let sort = state.sort;

        let mut status_options = vec![SelectOption::new(ALL, "All statuses")];
        status_options.extend(
            TransactionStatus::all()
                .iter()
                .map(|s| SelectOption::new(s.label(), s.label())),
        );

        let direction_options = vec![
            SelectOption::new(ALL, "All directions"),
            SelectOption::new("credit", "Money in"),
            SelectOption::new("debit", "Money out"),
        ];

        let sort_options: Vec<SelectOption> = TransactionSort::all()
            .iter()
            .map(|s| SelectOption::new(s.label(), s.label()))
            .collect();

        let transactions = self.entities.transactions.clone();
        let status_select = Select::new("tx-status-filter")
            .options(status_options)
            .selected(Some(
                status.map(|s| s.label().to_string()).unwrap_or(ALL.into()),
            ))
            .on_change({
                let transactions = transactions.clone();
                move |value, _window, cx| {
                    let status = TransactionStatus::all()
                        .iter()
                        .copied()
                        .find(|s| s.label() == value);
                    transactions.update(cx, |state, cx| {
                        state.filter.status = status;
                        cx.notify();
                    });
                }
            });

        let direction_select = Select::new("tx-direction-filter")
            .options(direction_options)
            .selected(Some(
                match direction {
                    Some(Direction::Credit) => "credit",
                    Some(Direction::Debit) => "debit",
                    None => ALL,
                }
                .to_string(),
            ))
            .on_change({
                let transactions = transactions.clone();
                move |value, _window, cx| {
                    let direction = match value {
                        "credit" => Some(Direction::Credit),
                        "debit" => Some(Direction::Debit),
                        _ => None,
                    };
                    transactions.update(cx, |state, cx| {
                        state.filter.direction = direction;
                        cx.notify();
                    });
                }
            });

        let sort_select = Select::new("tx-sort")
            .options(sort_options)
            .selected(Some(sort.label().to_string()))
            .on_change({
                let transactions = transactions.clone();
                move |value, _window, cx| {
                    let sort = TransactionSort::all()
                        .iter()
                        .copied()
                        .find(|s| s.label() == value)
                        .unwrap_or_default();
                    transactions.update(cx, |state, cx| {
                        state.sort = sort;
                        cx.notify();
                    });
                }
            });

        div()
            .w_full()
            .flex()
            .items_center()
            .gap_2()
            .child(self.search_input.clone())
            .child(status_select)
            .child(direction_select)
            .child(sort_select)
    }
}

impl Render for OverviewPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let overview = self.entities.overview.read(cx);
        let accounts = overview.accounts.clone();
        let selected_id = overview.selected_account_id.clone();
        let total = overview.total_balance();
        let overview_error = overview.error.clone();

        let tx_state = self.entities.transactions.read(cx);
        let loaded = tx_state.filtered().len();
        let loading_more = tx_state.loading_more;
        let exhausted = tx_state.exhausted;
        let tx_error = tx_state.error.clone();

        div()
            .size_full()
            .flex()
            .flex_col()
            .p_4()
            .gap_4()
            .child(
                div()
                    .w_full()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .text_xl()
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(DeskColors::text_primary())
                            .child("Accounts"),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(DeskColors::text_secondary())
                            .child(format!("Total balance {}", format_money(total))),
                    ),
            )
            .when_some(overview_error, |el, error| el.child(Banner::error(error)))
            .child(div().w_full().flex().gap_3().children(
                accounts.iter().map(|account| {
                    let selected = selected_id.as_deref() == Some(account.id.as_str());
                    self.render_account_card(account, selected, cx)
                }),
            ))
            .child(self.render_toolbar(cx))
            .when_some(tx_error, |el, error| el.child(Banner::error(error)))
            .child(div().flex_1().overflow_hidden().child(self.table.clone()))
            .child(
                LoadMore::new(loaded)
                    .items_label("transactions")
                    .loading(loading_more)
                    .exhausted(exhausted)
                    .on_load_more(cx.listener(|this, _event, _window, cx| {
                        this.controller.load_more(cx);
                    })),
            )
    }
}
