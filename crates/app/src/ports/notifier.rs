//! Notifier port — how use-cases report results to the user.

use wifibutton_domain::alert::AlertDialog;

/// Shows alert dialogs.
///
/// The browser adapter renders a modal; tests record the alerts.
pub trait Notifier {
    /// Display `alert`. Fire-and-forget: callers never wait for dismissal.
    fn show_alert(&self, alert: AlertDialog);
}
