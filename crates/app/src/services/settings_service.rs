//! Settings service — LED colour, WiFi credentials, clock and factory reset.

use wifibutton_domain::alert::{AlertDialog, Origin};
use wifibutton_domain::settings::{ClockSettings, LedColor, WifiCredentials};

use crate::error::ActionError;
use crate::ports::{DeviceApi, Notifier};

/// Use-cases behind the Settings view.
pub struct SettingsService<A, N> {
    api: A,
    notifier: N,
}

impl<A: DeviceApi, N: Notifier> SettingsService<A, N> {
    /// Create a new service from an API client and a notifier.
    pub fn new(api: A, notifier: N) -> Self {
        Self { api, notifier }
    }

    /// Set the status LED colour.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Api`] after showing it.
    #[tracing::instrument(skip(self))]
    pub async fn set_leds(
        &self,
        color: LedColor,
        origin: Option<Origin>,
    ) -> Result<(), ActionError> {
        let result = self.api.set_leds(color).await.map_err(ActionError::from);
        self.report(result, format!("LED colour set to {}.", color.to_hex()), origin)
    }

    /// Validate and store the WiFi credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Validation`] without sending anything when the
    /// credentials are invalid, or [`ActionError::Api`]; both are shown.
    #[tracing::instrument(skip(self, password))]
    pub async fn set_wifi(
        &self,
        ssid: &str,
        password: &str,
        origin: Option<Origin>,
    ) -> Result<(), ActionError> {
        let result = match WifiCredentials::new(ssid, password) {
            Ok(credentials) => self
                .api
                .set_wifi(&credentials)
                .await
                .map_err(ActionError::from),
            Err(err) => Err(err.into()),
        };
        self.report(
            result,
            format!("The device will join \"{ssid}\" on its next restart."),
            origin,
        )
    }

    /// Configure the device clock.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Api`] after showing it.
    #[tracing::instrument(skip(self))]
    pub async fn set_clock(
        &self,
        clock: ClockSettings,
        origin: Option<Origin>,
    ) -> Result<(), ActionError> {
        let result = self.api.set_clock(clock).await.map_err(ActionError::from);
        self.report(
            result,
            format!(
                "Clock set to {} ({}).",
                clock.utc_offset,
                clock.daylight_saving.as_str()
            ),
            origin,
        )
    }

    /// Disconnect the device from the WLAN and restore factory settings.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Api`] after showing it.
    #[tracing::instrument(skip(self))]
    pub async fn reset_device(&self, origin: Option<Origin>) -> Result<(), ActionError> {
        match self.api.reset().await {
            Ok(()) => {
                tracing::info!("device reset requested");
                self.notifier.show_alert(
                    AlertDialog::new("Device Reset", "The device was reset to factory settings.")
                        .origin(origin),
                );
                Ok(())
            }
            Err(err) => self.report(Err(err.into()), String::new(), origin),
        }
    }

    fn report(
        &self,
        result: Result<(), ActionError>,
        success: String,
        origin: Option<Origin>,
    ) -> Result<(), ActionError> {
        match result {
            Ok(()) => {
                self.notifier
                    .show_alert(AlertDialog::new("Settings Saved", success).origin(origin));
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err.user_message(), "settings update failed");
                self.notifier.show_alert(
                    AlertDialog::new("Settings Error", err.user_message()).origin(origin),
                );
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ApiError;
    use crate::services::testing::{Call, FakeDeviceApi, RecordingNotifier};
    use wifibutton_domain::error::ValidationError;
    use wifibutton_domain::settings::{DaylightSaving, UtcOffset};

    fn make_service(
        api: FakeDeviceApi,
    ) -> (
        SettingsService<FakeDeviceApi, RecordingNotifier>,
        RecordingNotifier,
    ) {
        let notifier = RecordingNotifier::default();
        (SettingsService::new(api, notifier.clone()), notifier)
    }

    #[tokio::test]
    async fn should_send_led_colour() {
        let api = FakeDeviceApi::ok();
        let (svc, notifier) = make_service(api.clone());
        let color = LedColor::new(255, 0, 128);

        svc.set_leds(color, None).await.unwrap();

        assert_eq!(api.calls(), vec![Call::SetLeds(color)]);
        let alerts = notifier.alerts();
        assert_eq!(alerts[0].title(), "Settings Saved");
        assert_eq!(alerts[0].content(), "LED colour set to #ff0080.");
        assert_eq!(alerts[0].confirm(), "OK");
    }

    #[tokio::test]
    async fn should_send_valid_wifi_credentials() {
        let api = FakeDeviceApi::ok();
        let (svc, _) = make_service(api.clone());

        svc.set_wifi("HomeNet", "secret", None).await.unwrap();

        let expected = WifiCredentials::new("HomeNet", "secret").unwrap();
        assert_eq!(api.calls(), vec![Call::SetWifi(expected)]);
    }

    #[tokio::test]
    async fn should_reject_wifi_credentials_with_forbidden_characters() {
        let api = FakeDeviceApi::ok();
        let (svc, notifier) = make_service(api.clone());

        let result = svc.set_wifi("<script>", "pw", None).await;

        assert_eq!(
            result,
            Err(ActionError::Validation(ValidationError::ForbiddenCharacter {
                field: "ssid",
                ch: '<'
            }))
        );
        assert!(api.calls().is_empty());
        assert_eq!(notifier.alerts()[0].title(), "Settings Error");
    }

    #[tokio::test]
    async fn should_send_clock_settings() {
        let api = FakeDeviceApi::ok();
        let (svc, notifier) = make_service(api.clone());
        let clock = ClockSettings {
            daylight_saving: DaylightSaving::Summer,
            utc_offset: UtcOffset::from_minutes(330).unwrap(),
        };

        svc.set_clock(clock, None).await.unwrap();

        assert_eq!(api.calls(), vec![Call::SetClock(clock)]);
        assert_eq!(notifier.alerts()[0].content(), "Clock set to UTC+5:30 (SUM).");
    }

    #[tokio::test]
    async fn should_request_reset() {
        let api = FakeDeviceApi::ok();
        let (svc, notifier) = make_service(api.clone());

        svc.reset_device(None).await.unwrap();

        assert_eq!(api.calls(), vec![Call::Reset]);
        assert_eq!(notifier.alerts()[0].title(), "Device Reset");
    }

    #[tokio::test]
    async fn should_report_transport_failure_for_every_setting() {
        let err = ApiError::Network("unreachable".to_string());
        let api = FakeDeviceApi::failing(err.clone());
        let (svc, notifier) = make_service(api);

        assert!(svc.set_leds(LedColor::default(), None).await.is_err());
        assert!(svc.set_wifi("net", "pw", None).await.is_err());
        assert!(svc.set_clock(ClockSettings::default(), None).await.is_err());
        assert_eq!(
            svc.reset_device(None).await,
            Err(ActionError::Api(err))
        );

        let alerts = notifier.alerts();
        assert_eq!(alerts.len(), 4);
        assert!(alerts.iter().all(|a| a.title() == "Settings Error"));
        assert!(alerts.iter().all(|a| a.content() == "network error: unreachable"));
    }
}
