//! DataTable Component

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, App, Context, Entity, InteractiveElement, IntoElement, ParentElement,
    Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use super::column::{Column, ColumnWidth};
use crate::theme::colors::DeskColors;

/// DataTable component
pub struct DataTable<R: Clone + 'static> {
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    row_height: f32,
    header_height: f32,
    loading: bool,
    empty_message: SharedString,
    on_row_click: Option<Rc<dyn Fn(&R, &mut Window, &mut App) + 'static>>,
}

impl<R: Clone + 'static> DataTable<R> {
    /// Create a new data table
    pub fn new(_cx: &mut Context<Self>) -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            row_height: 36.0,
            header_height: 40.0,
            loading: false,
            empty_message: "No data".into(),
            on_row_click: None,
        }
    }

    pub fn set_columns(&mut self, columns: Vec<Column<R>>) {
        self.columns = columns;
    }

    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_empty_message(&mut self, message: impl Into<SharedString>) {
        self.empty_message = message.into();
    }

    /// Set the row click handler
    pub fn on_row_click(&mut self, handler: impl Fn(&R, &mut Window, &mut App) + 'static) {
        self.on_row_click = Some(Rc::new(handler));
    }

    fn column_width(&self, width: &ColumnWidth) -> f32 {
        match width {
            ColumnWidth::Fixed(w) => *w,
            ColumnWidth::Flex { min } => min.unwrap_or(100.0),
        }
    }

    fn render_header(&self) -> impl IntoElement {
        div()
            .h(px(self.header_height))
            .w_full()
            .flex()
            .items_center()
            .bg(DeskColors::table_header_bg())
            .border_b_1()
            .border_color(DeskColors::border())
            .children(self.columns.iter().map(|col| {
                let width = self.column_width(&col.width);
                div()
                    .w(px(width))
                    .px_3()
                    .text_sm()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .text_color(DeskColors::text_primary())
                    .child(col.label.clone())
            }))
    }

    fn render_row(&self, row: &R, index: usize) -> impl IntoElement {
        let bg = if index % 2 == 0 {
            DeskColors::content_bg()
        } else {
            DeskColors::table_row_alt()
        };

        let handler = self.on_row_click.clone();
        let row_data = row.clone();

        div()
            .id(index)
            .h(px(self.row_height))
            .w_full()
            .flex()
            .items_center()
            .bg(bg)
            .hover(|s| s.bg(DeskColors::table_row_hover()))
            .border_b_1()
            .border_color(DeskColors::border())
            .when_some(handler, |el, handler| {
                el.cursor_pointer().on_click(move |_event, window, cx| {
                    handler(&row_data, window, cx);
                })
            })
            .children(self.columns.iter().map(|col| {
                let width = self.column_width(&col.width);
                let cell_content = col.render_cell(row);
                div()
                    .w(px(width))
                    .px_3()
                    .text_sm()
                    .text_color(DeskColors::text_primary())
                    .overflow_hidden()
                    .child(cell_content)
            }))
    }

    fn render_empty(&self) -> impl IntoElement {
        div()
            .flex_1()
            .py_8()
            .flex()
            .items_center()
            .justify_center()
            .text_color(DeskColors::text_muted())
            .child(self.empty_message.clone())
    }

    fn render_loading(&self) -> impl IntoElement {
        div()
            .flex_1()
            .py_8()
            .flex()
            .items_center()
            .justify_center()
            .text_color(DeskColors::text_muted())
            .child("Loading...")
    }
}

impl<R: Clone + 'static> Render for DataTable<R> {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let mut table = div()
            .size_full()
            .flex()
            .flex_col()
            .bg(DeskColors::content_bg())
            .border_1()
            .border_color(DeskColors::border())
            .rounded_md()
            .overflow_hidden();

        table = table.child(self.render_header());

        if self.loading {
            table = table.child(self.render_loading());
        } else if self.rows.is_empty() {
            table = table.child(self.render_empty());
        } else {
            let rows_content = div()
                .id("data-table-rows")
                .flex_1()
                .overflow_y_scroll()
                .children(
                    self.rows
                        .iter()
                        .enumerate()
                        .map(|(i, row)| self.render_row(row, i)),
                );
            table = table.child(rows_content);
        }

        table
    }
}

/// Helper to create a DataTable entity
pub fn data_table<R: Clone + 'static, V: 'static>(
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    cx: &mut Context<V>,
) -> Entity<DataTable<R>> {
    cx.new(|cx| {
        let mut table = DataTable::new(cx);
        table.set_columns(columns);
        table.set_rows(rows);
        table
    })
}
