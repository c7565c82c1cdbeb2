//! Shell service — the side panel and its navigation links.

use wifibutton_domain::nav::{NAV_ENTRIES, NavEntry};

use crate::ports::SidePanel;
use crate::router::Router;

/// Controller for the navigation drawer present on every view.
pub struct ShellService<P> {
    panel: P,
}

impl<P: SidePanel> ShellService<P> {
    /// Create a new shell around a side panel.
    pub fn new(panel: P) -> Self {
        Self { panel }
    }

    /// Show or hide the panel.
    pub fn toggle(&self) {
        self.panel.toggle();
    }

    pub fn open(&self) {
        self.panel.open();
    }

    pub fn close(&self) {
        self.panel.close();
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.panel.is_open()
    }

    /// The fixed navigation list.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn nav_entries(&self) -> &'static [NavEntry] {
        &NAV_ENTRIES
    }

    /// Whether `path` is the route `router` currently shows.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn is_active(&self, router: &Router, path: &str) -> bool {
        router.is_active(path)
    }

    /// Called when the user follows a navigation entry; hides the panel.
    pub fn select(&self, entry: &NavEntry) {
        tracing::debug!(link = entry.link, "navigation entry selected");
        self.panel.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct FakePanel {
        open: Cell<bool>,
    }

    impl SidePanel for FakePanel {
        fn open(&self) {
            self.open.set(true);
        }
        fn close(&self) {
            self.open.set(false);
        }
        fn toggle(&self) {
            self.open.set(!self.open.get());
        }
        fn is_open(&self) -> bool {
            self.open.get()
        }
    }

    #[test]
    fn should_toggle_panel_open_and_closed() {
        let shell = ShellService::new(FakePanel::default());
        shell.toggle();
        assert!(shell.is_open());
        shell.toggle();
        assert!(!shell.is_open());
    }

    #[test]
    fn should_close_open_panel() {
        let shell = ShellService::new(FakePanel::default());
        shell.open();
        shell.close();
        assert!(!shell.is_open());
    }

    #[test]
    fn should_close_panel_when_entry_selected() {
        let shell = ShellService::new(FakePanel::default());
        shell.open();
        shell.select(&shell.nav_entries()[0]);
        assert!(!shell.is_open());
    }

    #[test]
    fn should_expose_two_navigation_entries() {
        let shell = ShellService::new(FakePanel::default());
        let links: Vec<_> = shell.nav_entries().iter().map(|e| e.link).collect();
        assert_eq!(links, ["/sample", "/settings"]);
    }

    #[test]
    fn should_report_no_active_link_before_navigation() {
        let shell = ShellService::new(FakePanel::default());
        let router = Router::new();
        assert!(shell.nav_entries().iter().all(|e| !shell.is_active(&router, e.link)));
    }

    #[test]
    fn should_highlight_link_of_current_route() {
        let shell = ShellService::new(FakePanel::default());
        let mut router = Router::new();
        router.navigate("/settings");
        assert!(shell.is_active(&router, "/settings"));
        assert!(!shell.is_active(&router, "/sample"));
    }
}
