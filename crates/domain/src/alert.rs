//! Alert dialog — a modal message anchored to the event that triggered it.

/// Confirm-button label used when none is given.
pub const DEFAULT_OK_LABEL: &str = "OK";

/// Screen position of the UI event that opened a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Origin {
    pub x: i32,
    pub y: i32,
}

/// A modal alert.
///
/// Built with [`AlertDialog::new`] and refined with the builder methods.
/// When no accessibility label is set, the content doubles as the label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertDialog {
    title: String,
    content: String,
    aria_label: Option<String>,
    ok_label: Option<String>,
    origin: Option<Origin>,
}

impl AlertDialog {
    /// Create an alert with a title and body text.
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            aria_label: None,
            ok_label: None,
            origin: None,
        }
    }

    /// Set the accessibility label. `None` keeps the default (the content).
    #[must_use]
    pub fn aria_label(mut self, label: Option<String>) -> Self {
        self.aria_label = label;
        self
    }

    /// Set the confirm-button label.
    #[must_use]
    pub fn ok_label(mut self, label: impl Into<String>) -> Self {
        self.ok_label = Some(label.into());
        self
    }

    /// Anchor the dialog to the triggering event.
    #[must_use]
    pub fn origin(mut self, origin: Option<Origin>) -> Self {
        self.origin = origin;
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Accessibility label, falling back to the content.
    #[must_use]
    pub fn label(&self) -> &str {
        self.aria_label.as_deref().unwrap_or(&self.content)
    }

    /// Confirm-button text, falling back to [`DEFAULT_OK_LABEL`].
    #[must_use]
    pub fn confirm(&self) -> &str {
        self.ok_label.as_deref().unwrap_or(DEFAULT_OK_LABEL)
    }

    #[must_use]
    pub fn anchor(&self) -> Option<Origin> {
        self.origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_content_as_label_when_aria_label_omitted() {
        let alert = AlertDialog::new("Title", "Body text");
        assert_eq!(alert.label(), "Body text");
    }

    #[test]
    fn should_use_ok_when_confirm_label_omitted() {
        let alert = AlertDialog::new("Title", "Body text");
        assert_eq!(alert.confirm(), "OK");
    }

    #[test]
    fn should_keep_explicit_labels() {
        let alert = AlertDialog::new("Title", "Body")
            .aria_label(Some("Accessible".to_string()))
            .ok_label("Got It!");
        assert_eq!(alert.label(), "Accessible");
        assert_eq!(alert.confirm(), "Got It!");
    }

    #[test]
    fn should_fall_back_to_content_when_aria_label_reset_to_none() {
        let alert = AlertDialog::new("Title", "Body")
            .aria_label(Some("x".to_string()))
            .aria_label(None);
        assert_eq!(alert.label(), "Body");
    }

    #[test]
    fn should_carry_origin_when_anchored() {
        let alert = AlertDialog::new("T", "C").origin(Some(Origin { x: 10, y: 20 }));
        assert_eq!(alert.anchor(), Some(Origin { x: 10, y: 20 }));
        assert_eq!(AlertDialog::new("T", "C").anchor(), None);
    }
}
