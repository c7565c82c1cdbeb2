//! Button state — the device's push button as reported by the GPIO endpoint.

use serde::{Deserialize, Serialize};

/// Snapshot of the push button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ButtonState {
    /// Whether the button is held down right now.
    pub pressed: bool,
    /// Number of presses since the device started.
    pub presses: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_released_with_no_presses() {
        let state = ButtonState::default();
        assert!(!state.pressed);
        assert_eq!(state.presses, 0);
    }

    #[test]
    fn should_serialize_fields_by_name() {
        let json = serde_json::to_string(&ButtonState {
            pressed: true,
            presses: 3,
        })
        .unwrap();
        assert_eq!(json, r#"{"pressed":true,"presses":3}"#);
    }
}
