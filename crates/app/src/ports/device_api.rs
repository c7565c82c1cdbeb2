//! Device API port — the typed REST client the browser uses.
//!
//! One method per endpoint. Implementations perform exactly one HTTP
//! request per call: no retries, no timeouts, no caching. Futures are not
//! required to be `Send` because the browser client runs on a single thread.

use std::future::Future;

use wifibutton_domain::relay::RelayState;
use wifibutton_domain::response::DeviceResponse;
use wifibutton_domain::settings::{ClockSettings, LedColor, WifiCredentials};
use wifibutton_domain::upload::{UploadPath, UploadPayload, UploadTarget};

/// Transport-level failure of a device API call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Error text from the body, or the status line.
        message: String,
    },

    /// The body could not be decoded.
    #[error("invalid response: {0}")]
    Decode(String),
}

/// Typed client for the device REST API.
pub trait DeviceApi {
    /// `GET /api/gpio/relay?state=<ON|OFF>`
    fn set_relay(&self, state: RelayState)
    -> impl Future<Output = Result<DeviceResponse, ApiError>>;

    /// `GET /api/gpio/buttonState`
    fn button_state(&self) -> impl Future<Output = Result<DeviceResponse, ApiError>>;

    /// `POST` the raw payload bytes to the target endpoint, without a
    /// content type.
    fn upload(
        &self,
        target: UploadTarget,
        payload: &UploadPayload,
    ) -> impl Future<Output = Result<(), ApiError>>;

    /// `GET /api/upload/path?path=<path>`; the body is ignored.
    fn set_upload_path(&self, path: &UploadPath) -> impl Future<Output = Result<(), ApiError>>;

    /// `POST /api/gpio/leds`
    fn set_leds(&self, color: LedColor) -> impl Future<Output = Result<(), ApiError>>;

    /// `POST /api/config/ssid`
    fn set_wifi(&self, credentials: &WifiCredentials)
    -> impl Future<Output = Result<(), ApiError>>;

    /// `POST /api/time`
    fn set_clock(&self, clock: ClockSettings) -> impl Future<Output = Result<(), ApiError>>;

    /// `GET /api/config/reset`
    fn reset(&self) -> impl Future<Output = Result<(), ApiError>>;
}
