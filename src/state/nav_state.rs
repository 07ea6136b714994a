//! NavState - Active View State

use crate::app::navigation::ActivePage;

/// State for workspace navigation; one view is active at a time
#[derive(Debug, Clone, Copy, Default)]
pub struct NavState {
    pub active_page: ActivePage,
}

impl NavState {
    pub fn set_active_page(&mut self, page: ActivePage) {
        self.active_page = page;
    }
}
