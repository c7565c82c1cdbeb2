//! Side panel port — the collapsible navigation drawer.

/// Platform service managing the navigation drawer.
pub trait SidePanel {
    /// Show the panel.
    fn open(&self);

    /// Hide the panel.
    fn close(&self);

    /// Flip between shown and hidden.
    fn toggle(&self);

    /// Whether the panel is currently shown.
    fn is_open(&self) -> bool;
}
