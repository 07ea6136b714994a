//! Sidebar Component
//!
//! Navigation sidebar with page links.

use gpui::{
    div, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement,
    Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::ActivePage;
use crate::theme::colors::DeskColors;

/// Sidebar component
pub struct Sidebar {
    entities: AppEntities,
}

impl Sidebar {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.nav, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_nav_item(&self, page: ActivePage, active_page: ActivePage) -> impl IntoElement {
        let is_active = page == active_page;
        let entities = self.entities.clone();

        let bg_color = if is_active {
            gpui::rgba(0x0d948822)
        } else {
            gpui::rgba(0x00000000)
        };

        let text_color = if is_active {
            DeskColors::accent()
        } else {
            DeskColors::text_secondary()
        };

        let border_color = if is_active {
            DeskColors::accent()
        } else {
            gpui::rgba(0x00000000)
        };

        div()
            .id(SharedString::from(format!("nav-{:?}", page)))
            .w_full()
            .px_4()
            .py_2()
            .bg(bg_color)
            .border_l_2()
            .border_color(border_color)
            .text_color(text_color)
            .text_size(px(14.0))
            .cursor_pointer()
            .hover(|s| s.bg(gpui::rgba(0x0d948811)))
            .on_click(move |_event: &ClickEvent, _window, cx| {
                entities.nav.update(cx, |nav, cx| {
                    nav.set_active_page(page);
                    cx.notify();
                });
            })
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(div().text_size(px(13.0)).child(page.icon()))
                    .child(page.title()),
            )
    }
}

impl Render for Sidebar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let active_page = self.entities.nav.read(cx).active_page;

        div()
            .w(px(180.0))
            .h_full()
            .bg(DeskColors::sidebar_bg())
            .border_r_1()
            .border_color(DeskColors::border())
            .flex()
            .flex_col()
            .pt_4()
            .children(
                ActivePage::all()
                    .iter()
                    .map(|page| self.render_nav_item(*page, active_page)),
            )
    }
}
