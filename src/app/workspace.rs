//! Workspace - Main Shell with Layout and Page Switching
//!
//! The workspace holds the header, sidebar and content area. Pages are
//! created lazily on first visit and cached afterwards so their fetch state
//! survives navigation.

use gpui::{
    div, prelude::*, AnyElement, Context, Entity, IntoElement, ParentElement, Render, Styled,
    Window,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::{ActivePage, UiPrefs};
use crate::components::layout::header::Header;
use crate::components::layout::sidebar::Sidebar;
use crate::features::email::page::EmailPage;
use crate::features::messages::page::MessagesPage;
use crate::features::overview::page::OverviewPage;
use crate::features::profile::page::ProfilePage;
use crate::features::tasks::page::TasksPage;
use crate::features::transfer::page::TransferPage;
use crate::theme::colors::DeskColors;
use crate::utils::config_store;

const PREFS_FILE: &str = "ui.json";

/// Main workspace containing the application layout
pub struct Workspace {
    entities: AppEntities,
    header: Entity<Header>,
    sidebar: Entity<Sidebar>,
    overview_page: Option<Entity<OverviewPage>>,
    transfer_page: Option<Entity<TransferPage>>,
    messages_page: Option<Entity<MessagesPage>>,
    email_page: Option<Entity<EmailPage>>,
    tasks_page: Option<Entity<TasksPage>>,
    profile_page: Option<Entity<ProfilePage>>,
}

impl Workspace {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let sidebar = cx.new(|cx| Sidebar::new(entities.clone(), cx));

        // Re-render on navigation and persist the last visited page
        cx.observe(&entities.nav, |_this, nav, cx| {
            let active_page = nav.read(cx).active_page;
            let prefs = UiPrefs { active_page };
            if let Err(e) = config_store::save_prefs(PREFS_FILE, &prefs) {
                tracing::warn!(error = %e, "Failed to save UI preferences");
            }
            cx.notify();
        })
        .detach();

        Self {
            entities,
            header,
            sidebar,
            overview_page: None,
            transfer_page: None,
            messages_page: None,
            email_page: None,
            tasks_page: None,
            profile_page: None,
        }
    }

    /// Get or create a page view for the given page
    fn get_or_create_page(&mut self, page: ActivePage, cx: &mut Context<Self>) -> AnyElement {
        match page {
            ActivePage::Overview => self
                .overview_page
                .get_or_insert_with(|| cx.new(|cx| OverviewPage::new(self.entities.clone(), cx)))
                .clone()
                .into_any_element(),
            ActivePage::Transfer => self
                .transfer_page
                .get_or_insert_with(|| cx.new(|cx| TransferPage::new(self.entities.clone(), cx)))
                .clone()
                .into_any_element(),
            ActivePage::Messages => self
                .messages_page
                .get_or_insert_with(|| cx.new(|cx| MessagesPage::new(self.entities.clone(), cx)))
                .clone()
                .into_any_element(),
            ActivePage::Email => self
                .email_page
                .get_or_insert_with(|| cx.new(|cx| EmailPage::new(self.entities.clone(), cx)))
                .clone()
                .into_any_element(),
            ActivePage::Tasks => self
                .tasks_page
                .get_or_insert_with(|| cx.new(|cx| TasksPage::new(self.entities.clone(), cx)))
                .clone()
                .into_any_element(),
            ActivePage::Profile => self
                .profile_page
                .get_or_insert_with(|| cx.new(|cx| ProfilePage::new(self.entities.clone(), cx)))
                .clone()
                .into_any_element(),
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let active_page = self.entities.nav.read(cx).active_page;
        let content = self.get_or_create_page(active_page, cx);

        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(DeskColors::background())
            .child(self.header.clone())
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_row()
                    .overflow_hidden()
                    .child(self.sidebar.clone())
                    .child(
                        div()
                            .flex_1()
                            .flex()
                            .flex_col()
                            .overflow_hidden()
                            .bg(DeskColors::background())
                            .child(content),
                    ),
            )
    }
}
