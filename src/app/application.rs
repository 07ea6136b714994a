//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use std::rc::Rc;

use gpui::{
    actions, px, App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::UiPrefs;
use crate::app::workspace::Workspace;
use crate::data::memory::{MemoryBank, MemoryMail, MemoryTasks};
use crate::data::sources::Sources;
use crate::utils::config_store;

actions!(ledgerdesk, [Quit]);

/// Run the LedgerDesk application
pub fn run_app() {
    Application::new().run(|cx: &mut App| {
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        // Wire the demo in-memory sources; a real host swaps these out
        let sources = Sources {
            bank: Rc::new(MemoryBank::sample()),
            mail: Rc::new(MemoryMail::sample()),
            tasks: Rc::new(MemoryTasks::sample()),
        };
        cx.set_global(sources);

        // Initialize global entities
        let entities = AppEntities::init(cx);
        cx.set_global(entities.clone());

        // Restore the last visited page
        match config_store::load_prefs::<UiPrefs>("ui.json") {
            Ok(prefs) => {
                entities.nav.update(cx, |nav, _| {
                    nav.set_active_page(prefs.active_page);
                });
            }
            Err(e) => tracing::warn!(error = %e, "Failed to load UI preferences"),
        }

        // Create main window
        let bounds = Bounds::centered(None, gpui::size(px(1280.0), px(840.0)), cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("LedgerDesk")),
                appears_transparent: true,
                traffic_light_position: Some(gpui::point(px(9.0), px(9.0))),
            }),
            ..Default::default()
        };

        if let Err(e) = cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| Workspace::new(entities.clone(), cx))
        }) {
            tracing::error!(error = %e, "Failed to open main window");
            cx.quit();
        }

        cx.activate(true);
    });
}
