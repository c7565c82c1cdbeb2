mod alert_dialog;
mod nav;
mod shell;

pub use alert_dialog::{AlertHandle, AlertHost, origin_of, use_alerts};
pub use shell::Shell;
