//! Side-panel navigation entries.

use serde::Serialize;

/// A link shown in the side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    /// Client-side path the entry points to.
    pub link: &'static str,
    /// Label shown to the user.
    pub title: &'static str,
}

/// Fixed navigation list, immutable for the session.
pub static NAV_ENTRIES: [NavEntry; 2] = [
    NavEntry {
        link: "/sample",
        title: "Sample",
    },
    NavEntry {
        link: "/settings",
        title: "Settings",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::resolve;

    #[test]
    fn should_point_every_entry_at_a_registered_route() {
        for entry in &NAV_ENTRIES {
            assert!(!resolve(entry.link).redirected, "{} is not routed", entry.link);
        }
    }

    #[test]
    fn should_list_sample_before_settings() {
        let titles: Vec<_> = NAV_ENTRIES.iter().map(|e| e.title).collect();
        assert_eq!(titles, ["Sample", "Settings"]);
    }
}
