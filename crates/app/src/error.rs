//! Errors returned by client-side use-cases.

use wifibutton_domain::error::ValidationError;

use crate::ports::ApiError;

/// Why a user action did not complete.
///
/// The user has already been told through the notifier by the time a
/// service returns this; callers only need it for bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    /// Input rejected locally, nothing was sent.
    #[error("invalid input")]
    Validation(#[from] ValidationError),

    /// The request failed in transport.
    #[error("request failed")]
    Api(#[from] ApiError),
}

impl ActionError {
    /// Message suitable for an alert body.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(err) => err.to_string(),
            Self::Api(err) => err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_expose_inner_message_to_user() {
        let err = ActionError::from(ValidationError::EmptySsid);
        assert_eq!(err.user_message(), "SSID must not be empty");

        let err = ActionError::from(ApiError::Network("connection refused".to_string()));
        assert_eq!(err.user_message(), "network error: connection refused");
    }
}
