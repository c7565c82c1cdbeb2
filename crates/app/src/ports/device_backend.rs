//! Device backend port — the device the REST API controls.
//!
//! Implemented by the virtual device for development; a hardware bridge
//! would implement the same trait. Futures are `Send` because the HTTP
//! adapter runs handlers on a multi-threaded runtime.

use std::future::Future;

use wifibutton_domain::button::ButtonState;
use wifibutton_domain::error::DeviceError;
use wifibutton_domain::relay::RelayState;
use wifibutton_domain::settings::{ClockSettings, LedColor, WifiCredentials};
use wifibutton_domain::upload::{StoredUpload, UploadPath};

/// Operations a device exposes.
pub trait DeviceBackend: Send + Sync {
    /// Drive the relay, returning the position actually applied.
    fn set_relay(
        &self,
        state: RelayState,
    ) -> impl Future<Output = Result<RelayState, DeviceError>> + Send;

    /// Read the push button.
    fn button_state(&self) -> impl Future<Output = Result<ButtonState, DeviceError>> + Send;

    /// Replace the firmware image. Returns the number of bytes accepted.
    fn store_firmware(
        &self,
        image: Vec<u8>,
    ) -> impl Future<Output = Result<usize, DeviceError>> + Send;

    /// Write a file at the current upload path.
    fn store_file(
        &self,
        contents: Vec<u8>,
    ) -> impl Future<Output = Result<StoredUpload, DeviceError>> + Send;

    /// Change where uploaded files are written.
    fn set_upload_path(
        &self,
        path: UploadPath,
    ) -> impl Future<Output = Result<(), DeviceError>> + Send;

    /// Set the status LED colour.
    fn set_leds(&self, color: LedColor) -> impl Future<Output = Result<(), DeviceError>> + Send;

    /// Store the access point credentials.
    fn set_wifi(
        &self,
        credentials: WifiCredentials,
    ) -> impl Future<Output = Result<(), DeviceError>> + Send;

    /// Configure the clock.
    fn set_clock(
        &self,
        clock: ClockSettings,
    ) -> impl Future<Output = Result<(), DeviceError>> + Send;

    /// Restore factory settings.
    fn reset(&self) -> impl Future<Output = Result<(), DeviceError>> + Send;
}
