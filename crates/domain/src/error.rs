//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts via `#[from]`.
//! [`ValidationError`] is raised by domain constructors before anything
//! reaches the network; [`DeviceError`] is what device backends return.

/// A domain invariant was violated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Relay state other than `ON` / `OFF`.
    #[error("unknown relay state '{0}'")]
    InvalidRelayState(String),

    /// No file was selected, or the selected file is empty.
    #[error("no file content to upload")]
    EmptyUpload,

    /// Upload path is not an absolute, traversal-free path.
    #[error("invalid upload path '{0}'")]
    InvalidUploadPath(String),

    /// LED channel missing or outside `0..=255`.
    #[error("{channel} must be a number from 0 to 255, got '{value}'")]
    InvalidLedChannel {
        /// Name of the offending channel.
        channel: &'static str,
        /// The rejected value.
        value: String,
    },

    /// SSID is empty.
    #[error("SSID must not be empty")]
    EmptySsid,

    /// SSID longer than 32 bytes.
    #[error("SSID is {0} bytes long, the maximum is 32")]
    SsidTooLong(usize),

    /// Password longer than 64 bytes.
    #[error("password is {0} bytes long, the maximum is 64")]
    PasswordTooLong(usize),

    /// A character the device firmware refuses in form fields.
    #[error("{field} contains the forbidden character '{ch}'")]
    ForbiddenCharacter {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected character.
        ch: char,
    },

    /// UTC offset outside the device's supported set.
    #[error("unsupported UTC offset '{0}'")]
    InvalidUtcOffset(String),

    /// Daylight-saving mode other than `STD` / `SUM`.
    #[error("unknown daylight saving mode '{0}'")]
    InvalidDaylightSaving(String),
}

/// Error returned by device backends (virtual device, hardware bridges).
#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    /// Input rejected by domain validation.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The backend itself failed.
    #[error("device backend error")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}
