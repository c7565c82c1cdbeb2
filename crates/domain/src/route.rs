//! Route table — which view a client-side path renders and what title it shows.
//!
//! The table is static data consumed by [`resolve`]. Paths that match no
//! entry fall back to the default route (`/`) without a page title.

use std::fmt;

/// Path every unmatched location redirects to.
pub const DEFAULT_PATH: &str = "/";

/// The views the client can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Welcome,
    Sample,
    Settings,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Welcome => f.write_str("welcome"),
            Self::Sample => f.write_str("sample"),
            Self::Settings => f.write_str("settings"),
        }
    }
}

/// A registered client-side route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    /// Exact path this route answers to.
    pub pattern: &'static str,
    /// View rendered for this route.
    pub view: View,
    /// Page title declared by the route, if any.
    pub title: Option<&'static str>,
}

impl Route {
    /// Whether `path` (after normalisation) is exactly this route's pattern.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        normalize(path) == self.pattern
    }
}

/// All registered routes. The first entry is the default route.
pub static ROUTES: [Route; 3] = [
    Route {
        pattern: DEFAULT_PATH,
        view: View::Welcome,
        title: Some("Welcome"),
    },
    Route {
        pattern: "/sample",
        view: View::Sample,
        title: Some("Sample API Call"),
    },
    Route {
        pattern: "/settings",
        view: View::Settings,
        title: Some("Settings"),
    },
];

/// Outcome of resolving a location against the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    /// The route whose view is rendered.
    pub route: &'static Route,
    /// Title to display; `None` clears any previous title.
    pub title: Option<&'static str>,
    /// `true` when the location matched nothing and was sent to [`DEFAULT_PATH`].
    pub redirected: bool,
}

/// Resolve a location to a [`Navigation`].
///
/// Query strings, fragments and a trailing slash are ignored. Unknown paths
/// render the default route and carry no title, because the fallback entry
/// declares none.
#[must_use]
pub fn resolve(path: &str) -> Navigation {
    match ROUTES.iter().find(|route| route.matches(path)) {
        Some(route) => Navigation {
            route,
            title: route.title,
            redirected: false,
        },
        None => Navigation {
            route: default_route(),
            title: None,
            redirected: true,
        },
    }
}

/// The route unmatched paths redirect to.
#[must_use]
pub fn default_route() -> &'static Route {
    &ROUTES[0]
}

/// Reduce a location to the bare path used for matching.
///
/// Accepts hash-style links (`#/sample`) as well as plain paths.
#[must_use]
pub fn normalize(path: &str) -> &str {
    let path = path.strip_prefix('#').unwrap_or(path);
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    if path.is_empty() {
        return DEFAULT_PATH;
    }
    match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => path,
    }
}
