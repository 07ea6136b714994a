//! TransactionList - Column Set for Account Transactions
//!
//! Builds the DataTable columns used by the overview screen: posting date,
//! description with category, status badge and the signed amount.

use gpui::{div, prelude::*, IntoElement, ParentElement, Styled};

use crate::components::composite::data_table::Column;
use crate::components::primitives::badge::Badge;
use crate::domain::transaction::{Direction, Transaction};
use crate::theme::colors::DeskColors;
use crate::theme::status::transaction_status_color;
use crate::utils::format::{format_date, format_signed_money};

/// Columns for the transaction history table
pub fn transaction_columns() -> Vec<Column<Transaction>> {
    vec![
        Column::new("date", "Date", |tx: &Transaction| {
            div()
                .text_color(DeskColors::text_secondary())
                .child(format_date(&tx.date))
                .into_any_element()
        })
        .fixed_width(110.0),
        Column::new("description", "Description", |tx: &Transaction| {
            div()
                .flex()
                .flex_col()
                .child(
                    div()
                        .text_color(DeskColors::text_primary())
                        .child(tx.description.clone()),
                )
                .when_some(tx.category.clone(), |el, category| {
                    el.child(
                        div()
                            .text_xs()
                            .text_color(DeskColors::text_muted())
                            .child(category),
                    )
                })
                .into_any_element()
        })
        .flex_width(Some(240.0)),
        Column::new("status", "Status", |tx: &Transaction| {
            Badge::new(tx.status.label(), transaction_status_color(tx.status))
                .into_any_element()
        })
        .fixed_width(110.0),
        Column::new("amount", "Amount", |tx: &Transaction| {
            let credit = tx.direction == Direction::Credit;
            let color = if credit {
                DeskColors::amount_credit()
            } else {
                DeskColors::amount_debit()
            };
            div()
                .text_color(color)
                .font_weight(gpui::FontWeight::MEDIUM)
                .child(format_signed_money(tx.amount, credit))
                .into_any_element()
        })
        .fixed_width(120.0),
    ]
}
