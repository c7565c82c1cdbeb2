//! Device service — answers device REST calls on behalf of a [`DeviceBackend`].
//!
//! Parses raw request values into domain types, drives the backend and
//! builds the JSON bodies the firmware would send. A relay request with an
//! unknown state is a *logical* failure: it yields a `FAIL` body rather
//! than an error, matching the device's own behaviour.

use wifibutton_domain::error::{DeviceError, ValidationError};
use wifibutton_domain::relay::RelayState;
use wifibutton_domain::response::DeviceResponse;
use wifibutton_domain::settings::{ClockSettings, LedColor, WifiCredentials};
use wifibutton_domain::upload::UploadPath;

use crate::ports::DeviceBackend;

/// Application service for the device side of the REST API.
pub struct DeviceService<B> {
    backend: B,
}

impl<B: DeviceBackend> DeviceService<B> {
    /// Create a new service backed by the given device.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Switch the relay to the raw `state` value (`ON` / `OFF`).
    ///
    /// # Errors
    ///
    /// Returns a backend error; an unknown state is reported in the body.
    #[tracing::instrument(skip(self))]
    pub async fn switch_relay(&self, state: &str) -> Result<DeviceResponse, DeviceError> {
        let state = match state.parse::<RelayState>() {
            Ok(state) => state,
            Err(err) => {
                tracing::warn!(error = %err, "relay request rejected");
                return Ok(DeviceResponse::fail(err.to_string()));
            }
        };
        let applied = self.backend.set_relay(state).await?;
        Ok(DeviceResponse::ok().with("relay", applied.as_str()))
    }

    /// Report the push button.
    ///
    /// # Errors
    ///
    /// Returns a backend error.
    pub async fn button_state(&self) -> Result<DeviceResponse, DeviceError> {
        let button = self.backend.button_state().await?;
        Ok(DeviceResponse::ok()
            .with("pressed", button.pressed)
            .with("presses", button.presses))
    }

    /// Accept a firmware image.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyUpload`] for an empty body, or a
    /// backend error.
    #[tracing::instrument(skip(self, image), fields(size = image.len()))]
    pub async fn upload_firmware(&self, image: Vec<u8>) -> Result<DeviceResponse, DeviceError> {
        if image.is_empty() {
            return Err(ValidationError::EmptyUpload.into());
        }
        let size = self.backend.store_firmware(image).await?;
        tracing::info!(size, "firmware image stored");
        Ok(DeviceResponse::ok().with("bytes", size))
    }

    /// Store a file at the current upload path.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyUpload`] for an empty body, or a
    /// backend error.
    #[tracing::instrument(skip(self, contents), fields(size = contents.len()))]
    pub async fn upload_file(&self, contents: Vec<u8>) -> Result<DeviceResponse, DeviceError> {
        if contents.is_empty() {
            return Err(ValidationError::EmptyUpload.into());
        }
        let stored = self.backend.store_file(contents).await?;
        tracing::info!(path = %stored.path, size = stored.size, "file stored");
        Ok(DeviceResponse::ok()
            .with("path", stored.path.as_str())
            .with("bytes", stored.size))
    }

    /// Change the upload directory.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidUploadPath`], or a backend error.
    #[tracing::instrument(skip(self))]
    pub async fn set_upload_path(&self, raw: &str) -> Result<DeviceResponse, DeviceError> {
        let path = UploadPath::parse(raw)?;
        let body = DeviceResponse::ok().with("path", path.as_str());
        self.backend.set_upload_path(path).await?;
        Ok(body)
    }

    /// Set the LED colour from raw form values.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidLedChannel`], or a backend error.
    #[tracing::instrument(skip(self))]
    pub async fn set_leds(
        &self,
        red: &str,
        green: &str,
        blue: &str,
    ) -> Result<DeviceResponse, DeviceError> {
        let color = LedColor::from_form(red, green, blue)?;
        self.backend.set_leds(color).await?;
        Ok(DeviceResponse::ok())
    }

    /// Store WiFi credentials.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for invalid credentials, or a backend error.
    #[tracing::instrument(skip(self, password))]
    pub async fn set_wifi(
        &self,
        ssid: &str,
        password: &str,
    ) -> Result<DeviceResponse, DeviceError> {
        let credentials = WifiCredentials::new(ssid, password)?;
        self.backend.set_wifi(credentials).await?;
        Ok(DeviceResponse::ok())
    }

    /// Configure the clock from raw form values.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for unknown values, or a backend error.
    #[tracing::instrument(skip(self))]
    pub async fn set_clock(
        &self,
        sum_time: &str,
        utc: &str,
    ) -> Result<DeviceResponse, DeviceError> {
        let clock = ClockSettings {
            daylight_saving: sum_time.parse()?,
            utc_offset: utc.parse()?,
        };
        self.backend.set_clock(clock).await?;
        Ok(DeviceResponse::ok())
    }

    /// Factory reset.
    ///
    /// # Errors
    ///
    /// Returns a backend error.
    #[tracing::instrument(skip(self))]
    pub async fn reset(&self) -> Result<DeviceResponse, DeviceError> {
        self.backend.reset().await?;
        tracing::info!("device reset to factory settings");
        Ok(DeviceResponse::ok())
    }
}
