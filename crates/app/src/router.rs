//! Client-side router state.
//!
//! Wraps the static route table with the notion of a *current* route, which
//! drives the page title and active-link highlighting.

use wifibutton_domain::route::{self, Navigation};

/// Tracks the route selected by the last navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Router {
    current: Option<Navigation>,
}

impl Router {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `path` and make the result current.
    pub fn navigate(&mut self, path: &str) -> Navigation {
        let nav = route::resolve(path);
        if nav.redirected {
            tracing::debug!(path, to = nav.route.pattern, "unknown route, redirecting");
        } else {
            tracing::debug!(path, view = %nav.route.view, "route changed");
        }
        self.current = Some(nav);
        nav
    }

    /// The current navigation, `None` before the first one.
    #[must_use]
    pub fn current(&self) -> Option<&Navigation> {
        self.current.as_ref()
    }

    /// Title of the current page, if the current route declares one.
    #[must_use]
    pub fn page_title(&self) -> Option<&'static str> {
        self.current.and_then(|nav| nav.title)
    }

    /// Whether the current route's pattern matches `path`.
    ///
    /// Always `false` before the first navigation.
    #[must_use]
    pub fn is_active(&self, path: &str) -> bool {
        self.current.is_some_and(|nav| nav.route.matches(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wifibutton_domain::route::View;

    #[test]
    fn should_have_no_current_route_before_navigation() {
        let router = Router::new();
        assert!(router.current().is_none());
        assert_eq!(router.page_title(), None);
    }

    #[test]
    fn should_report_inactive_before_navigation() {
        let router = Router::new();
        assert!(!router.is_active("/"));
        assert!(!router.is_active("/sample"));
    }

    #[test]
    fn should_set_title_from_matched_route() {
        let mut router = Router::new();
        router.navigate("/sample");
        assert_eq!(router.page_title(), Some("Sample API Call"));
    }

    #[test]
    fn should_clear_title_when_redirected() {
        let mut router = Router::new();
        router.navigate("/settings");
        let nav = router.navigate("/unknown");
        assert!(nav.redirected);
        assert_eq!(nav.route.view, View::Welcome);
        assert_eq!(router.page_title(), None);
    }

    #[test]
    fn should_mark_only_current_route_active() {
        let mut router = Router::new();
        router.navigate("/sample");
        assert!(router.is_active("/sample"));
        assert!(!router.is_active("/settings"));
        assert!(!router.is_active("/"));
    }

    #[test]
    fn should_mark_default_route_active_after_redirect() {
        let mut router = Router::new();
        router.navigate("/nope");
        assert!(router.is_active("/"));
        assert!(!router.is_active("/nope"));
    }
}
