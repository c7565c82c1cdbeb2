//! Application services — use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod device_service;
pub mod sample_service;
pub mod settings_service;
pub mod shell_service;

/// Confirm label used on result dialogs.
pub const GOT_IT: &str = "Got It!";

#[cfg(test)]
pub(crate) mod testing {
    //! Recording fakes for the client-side ports.

    use std::cell::RefCell;
    use std::future::Future;
    use std::rc::Rc;

    use wifibutton_domain::alert::AlertDialog;
    use wifibutton_domain::relay::RelayState;
    use wifibutton_domain::response::DeviceResponse;
    use wifibutton_domain::settings::{ClockSettings, LedColor, WifiCredentials};
    use wifibutton_domain::upload::{UploadPath, UploadPayload, UploadTarget};

    use crate::ports::{ApiError, DeviceApi, Notifier};

    /// A request the fake API received.
    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        SetRelay(RelayState),
        ButtonState,
        Upload(UploadTarget, Vec<u8>),
        SetUploadPath(String),
        SetLeds(LedColor),
        SetWifi(WifiCredentials),
        SetClock(ClockSettings),
        Reset,
    }

    /// Answers every call with the same reply and records the call.
    #[derive(Clone)]
    pub struct FakeDeviceApi {
        calls: Rc<RefCell<Vec<Call>>>,
        reply: Result<DeviceResponse, ApiError>,
    }

    impl FakeDeviceApi {
        pub fn replying(json: serde_json::Value) -> Self {
            Self {
                calls: Rc::default(),
                reply: Ok(DeviceResponse::from(json)),
            }
        }

        pub fn ok() -> Self {
            Self::replying(serde_json::json!({"status": "OK"}))
        }

        pub fn failing(err: ApiError) -> Self {
            Self {
                calls: Rc::default(),
                reply: Err(err),
            }
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn record(&self, call: Call) -> Result<DeviceResponse, ApiError> {
            self.calls.borrow_mut().push(call);
            self.reply.clone()
        }

        fn record_unit(&self, call: Call) -> Result<(), ApiError> {
            self.record(call).map(|_| ())
        }
    }

    impl DeviceApi for FakeDeviceApi {
        fn set_relay(
            &self,
            state: RelayState,
        ) -> impl Future<Output = Result<DeviceResponse, ApiError>> {
            let reply = self.record(Call::SetRelay(state));
            async move { reply }
        }

        fn button_state(&self) -> impl Future<Output = Result<DeviceResponse, ApiError>> {
            let reply = self.record(Call::ButtonState);
            async move { reply }
        }

        fn upload(
            &self,
            target: UploadTarget,
            payload: &UploadPayload,
        ) -> impl Future<Output = Result<(), ApiError>> {
            let reply = self.record_unit(Call::Upload(target, payload.bytes().to_vec()));
            async move { reply }
        }

        fn set_upload_path(&self, path: &UploadPath) -> impl Future<Output = Result<(), ApiError>> {
            let reply = self.record_unit(Call::SetUploadPath(path.as_str().to_string()));
            async move { reply }
        }

        fn set_leds(&self, color: LedColor) -> impl Future<Output = Result<(), ApiError>> {
            let reply = self.record_unit(Call::SetLeds(color));
            async move { reply }
        }

        fn set_wifi(
            &self,
            credentials: &WifiCredentials,
        ) -> impl Future<Output = Result<(), ApiError>> {
            let reply = self.record_unit(Call::SetWifi(credentials.clone()));
            async move { reply }
        }

        fn set_clock(&self, clock: ClockSettings) -> impl Future<Output = Result<(), ApiError>> {
            let reply = self.record_unit(Call::SetClock(clock));
            async move { reply }
        }

        fn reset(&self) -> impl Future<Output = Result<(), ApiError>> {
            let reply = self.record_unit(Call::Reset);
            async move { reply }
        }
    }

    /// Keeps every alert it is asked to show.
    #[derive(Clone, Default)]
    pub struct RecordingNotifier {
        alerts: Rc<RefCell<Vec<AlertDialog>>>,
    }

    impl RecordingNotifier {
        pub fn alerts(&self) -> Vec<AlertDialog> {
            self.alerts.borrow().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn show_alert(&self, alert: AlertDialog) {
            self.alerts.borrow_mut().push(alert);
        }
    }
}
