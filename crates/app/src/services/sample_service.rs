//! Sample service — the relay, button and upload actions of the Sample view.
//!
//! Every action reports its result through the [`Notifier`]; the returned
//! value only tells the caller what happened.

use wifibutton_domain::alert::{AlertDialog, Origin};
use wifibutton_domain::error::ValidationError;
use wifibutton_domain::relay::RelayState;
use wifibutton_domain::response::DeviceResponse;
use wifibutton_domain::upload::{UploadPath, UploadPayload, UploadTarget};

use crate::error::ActionError;
use crate::ports::{ApiError, DeviceApi, Notifier};
use crate::services::GOT_IT;

/// Result of a relay toggle.
#[derive(Debug, Clone, PartialEq)]
pub enum RelayOutcome {
    /// The device accepted the new position.
    Applied(RelayState),
    /// The device answered with a status other than `OK`.
    Rejected(DeviceResponse),
    /// The request failed in transport.
    Failed(ApiError),
}

/// Use-cases behind the Sample view.
pub struct SampleService<A, N> {
    api: A,
    notifier: N,
}

impl<A: DeviceApi, N: Notifier> SampleService<A, N> {
    /// Create a new service from an API client and a notifier.
    pub fn new(api: A, notifier: N) -> Self {
        Self { api, notifier }
    }

    /// Send the relay position `relay` to the device.
    ///
    /// Exactly one request is issued. A rejection or a transport failure
    /// opens a "Relay Error" dialog; success is silent. The caller's
    /// boolean is never rolled back.
    #[tracing::instrument(skip(self))]
    pub async fn toggle_relay(&self, relay: bool, origin: Option<Origin>) -> RelayOutcome {
        let state = RelayState::from(relay);
        match self.api.set_relay(state).await {
            Ok(resp) if resp.is_ok() => RelayOutcome::Applied(state),
            Ok(resp) => {
                tracing::warn!(response = %resp, "relay rejected by device");
                self.alert(
                    "Relay Error",
                    format!("There was an error. The server's response is: {resp}"),
                    origin,
                );
                RelayOutcome::Rejected(resp)
            }
            Err(err) => {
                tracing::warn!(error = %err, "relay request failed");
                self.alert(
                    "Relay Error",
                    format!("The relay request failed: {err}"),
                    origin,
                );
                RelayOutcome::Failed(err)
            }
        }
    }

    /// Read the push button and show whatever the device answered.
    ///
    /// # Errors
    ///
    /// Returns the transport error after showing it.
    #[tracing::instrument(skip(self))]
    pub async fn get_button_state(
        &self,
        origin: Option<Origin>,
    ) -> Result<DeviceResponse, ApiError> {
        match self.api.button_state().await {
            Ok(resp) => {
                self.alert(
                    "Button State",
                    format!("The server's response is: {resp}"),
                    origin,
                );
                Ok(resp)
            }
            Err(err) => {
                tracing::warn!(error = %err, "button state request failed");
                self.alert(
                    "Button State Error",
                    format!("The button state request failed: {err}"),
                    origin,
                );
                Err(err)
            }
        }
    }

    /// Send the selected file to `target` as a raw body.
    ///
    /// `None` means no file was selected (or it was empty); nothing is sent.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError`] after showing it.
    #[tracing::instrument(skip(self, target, payload), fields(endpoint = target.endpoint()))]
    pub async fn upload(
        &self,
        target: UploadTarget,
        payload: Option<UploadPayload>,
        origin: Option<Origin>,
    ) -> Result<(), ActionError> {
        let result = match payload {
            Some(payload) => self
                .api
                .upload(target, &payload)
                .await
                .map(|()| payload)
                .map_err(ActionError::from),
            None => Err(ValidationError::EmptyUpload.into()),
        };
        match result {
            Ok(payload) => {
                tracing::debug!(size = payload.len(), "upload complete");
                self.alert(
                    "Upload Complete",
                    format!(
                        "{} ({} bytes) was uploaded as {target}.",
                        payload.file_name(),
                        payload.len()
                    ),
                    origin,
                );
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err.user_message(), "upload failed");
                self.alert(
                    "Upload Error",
                    format!("The {target} upload failed: {}", err.user_message()),
                    origin,
                );
                Err(err)
            }
        }
    }

    /// Flash a firmware image.
    ///
    /// # Errors
    ///
    /// See [`SampleService::upload`].
    pub async fn upload_firmware(
        &self,
        payload: Option<UploadPayload>,
        origin: Option<Origin>,
    ) -> Result<(), ActionError> {
        self.upload(UploadTarget::Firmware, payload, origin).await
    }

    /// Store a file at the device's current upload path.
    ///
    /// # Errors
    ///
    /// See [`SampleService::upload`].
    pub async fn upload_file(
        &self,
        payload: Option<UploadPayload>,
        origin: Option<Origin>,
    ) -> Result<(), ActionError> {
        self.upload(UploadTarget::File, payload, origin).await
    }

    /// Change the directory uploaded files are written to.
    ///
    /// The device's answer body is not inspected.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError`] after showing it.
    #[tracing::instrument(skip(self))]
    pub async fn set_upload_path(
        &self,
        raw: &str,
        origin: Option<Origin>,
    ) -> Result<UploadPath, ActionError> {
        let result = match UploadPath::parse(raw) {
            Ok(path) => self
                .api
                .set_upload_path(&path)
                .await
                .map(|()| path)
                .map_err(ActionError::from),
            Err(err) => Err(err.into()),
        };
        match result {
            Ok(path) => {
                self.alert(
                    "Upload Path",
                    format!("Files will be stored in {path}."),
                    origin,
                );
                Ok(path)
            }
            Err(err) => {
                self.alert("Upload Path Error", err.user_message(), origin);
                Err(err)
            }
        }
    }

    fn alert(&self, title: &str, content: String, origin: Option<Origin>) {
        self.notifier.show_alert(
            AlertDialog::new(title, content)
                .ok_label(GOT_IT)
                .origin(origin),
        );
    }
}
