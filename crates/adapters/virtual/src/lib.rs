//! # wifibutton-adapter-virtual
//!
//! An in-memory relay/button board that implements
//! [`DeviceBackend`] so the daemon and the dashboard can run without
//! hardware.
//!
//! | Part | Behaviour |
//! |------|-----------|
//! | Relay | `ON` / `OFF` |
//! | Button | pressed flag plus a press counter, driven by [`VirtualDevice::press`] / [`VirtualDevice::release`] or the [`simulator`] |
//! | Storage | one firmware slot, one file per upload path (default `/srv`) |
//! | Settings | LED colour, WiFi credentials, clock; [`DeviceBackend::reset`] restores all of it |
//!
//! ## Dependency rule
//!
//! Depends on `wifibutton-app` (port traits) and `wifibutton-domain` only.

mod board;
pub mod simulator;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use wifibutton_app::ports::DeviceBackend;
use wifibutton_domain::button::ButtonState;
use wifibutton_domain::error::DeviceError;
use wifibutton_domain::relay::RelayState;
use wifibutton_domain::settings::{ClockSettings, LedColor, WifiCredentials};
use wifibutton_domain::time::now;
use wifibutton_domain::upload::{StoredUpload, UploadPath};

pub use board::{Board, StoredFile};

/// Simulated device shared between request handlers.
///
/// Clones share the same board, so the button simulator and the HTTP state
/// observe each other's changes.
#[derive(Clone, Default)]
pub struct VirtualDevice {
    board: Arc<Mutex<Board>>,
}

impl VirtualDevice {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current board state.
    #[must_use]
    pub fn snapshot(&self) -> Board {
        self.lock().clone()
    }

    /// Hold the button down.
    pub fn press(&self) {
        self.lock().press();
        tracing::debug!("virtual button pressed");
    }

    /// Let go of the button.
    pub fn release(&self) {
        self.lock().release();
    }

    fn lock(&self) -> MutexGuard<'_, Board> {
        self.board.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DeviceBackend for VirtualDevice {
    async fn set_relay(&self, state: RelayState) -> Result<RelayState, DeviceError> {
        let mut board = self.lock();
        board.relay = state;
        tracing::info!(relay = %board.relay, "virtual relay switched");
        Ok(board.relay)
    }

    async fn button_state(&self) -> Result<ButtonState, DeviceError> {
        Ok(self.lock().button)
    }

    async fn store_firmware(&self, image: Vec<u8>) -> Result<usize, DeviceError> {
        let size = image.len();
        self.lock().firmware = Some(image);
        Ok(size)
    }

    async fn store_file(&self, contents: Vec<u8>) -> Result<StoredUpload, DeviceError> {
        let mut board = self.lock();
        let upload = StoredUpload {
            path: board.upload_path.clone(),
            size: contents.len(),
            uploaded_at: now(),
        };
        if let Some(previous) = board.store_file(upload.clone(), contents) {
            tracing::debug!(
                path = %upload.path,
                previous_size = previous.upload.size,
                previous_uploaded_at = %previous.upload.uploaded_at,
                "virtual file replaced"
            );
        }
        Ok(upload)
    }

    async fn set_upload_path(&self, path: UploadPath) -> Result<(), DeviceError> {
        self.lock().upload_path = path;
        Ok(())
    }

    async fn set_leds(&self, color: LedColor) -> Result<(), DeviceError> {
        self.lock().leds = color;
        Ok(())
    }

    async fn set_wifi(&self, credentials: WifiCredentials) -> Result<(), DeviceError> {
        tracing::info!(ssid = credentials.ssid(), "virtual wifi credentials stored");
        self.lock().wifi = Some(credentials);
        Ok(())
    }

    async fn set_clock(&self, clock: ClockSettings) -> Result<(), DeviceError> {
        self.lock().clock = clock;
        Ok(())
    }

    async fn reset(&self) -> Result<(), DeviceError> {
        *self.lock() = Board::default();
        tracing::info!("virtual device restored to factory state");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wifibutton_domain::settings::{DaylightSaving, UtcOffset};

    #[tokio::test]
    async fn should_apply_relay_state() {
        let device = VirtualDevice::new();
        let applied = device.set_relay(RelayState::On).await.unwrap();
        assert_eq!(applied, RelayState::On);

        let board = device.snapshot();
        assert_eq!(board.relay, RelayState::On);
    }

    #[tokio::test]
    async fn should_report_button_presses() {
        let device = VirtualDevice::new();
        device.press();
        let held = device.button_state().await.unwrap();
        assert!(held.pressed);
        assert_eq!(held.presses, 1);

        device.release();
        let released = device.button_state().await.unwrap();
        assert!(!released.pressed);
        assert_eq!(released.presses, 1);
    }

    #[tokio::test]
    async fn should_keep_latest_firmware_image() {
        let device = VirtualDevice::new();
        device.store_firmware(vec![1, 2]).await.unwrap();
        let size = device.store_firmware(vec![3, 4, 5]).await.unwrap();
        assert_eq!(size, 3);
        assert_eq!(device.snapshot().firmware, Some(vec![3, 4, 5]));
    }

    #[tokio::test]
    async fn should_store_files_under_current_upload_path() {
        let device = VirtualDevice::new();
        let first = device.store_file(b"one".to_vec()).await.unwrap();
        device
            .set_upload_path(UploadPath::parse("/data").unwrap())
            .await
            .unwrap();
        let second = device.store_file(b"two!".to_vec()).await.unwrap();

        assert_eq!(first.path.as_str(), "/srv");
        assert_eq!(second.path.as_str(), "/data");
        assert_eq!(second.size, 4);

        let files = device.snapshot().files;
        assert_eq!(files.len(), 2);
        assert_eq!(files[&second.path].contents, b"two!");
    }

    #[tokio::test]
    async fn should_keep_single_file_when_uploading_twice_to_same_path() {
        let device = VirtualDevice::new();
        device.store_file(b"first".to_vec()).await.unwrap();
        let latest = device.store_file(b"second".to_vec()).await.unwrap();

        let files = device.snapshot().files;
        assert_eq!(files.len(), 1);
        assert_eq!(files[&latest.path].contents, b"second");
        assert_eq!(files[&latest.path].upload.size, 6);
    }

    #[tokio::test]
    async fn should_remember_settings() {
        let device = VirtualDevice::new();
        let clock = ClockSettings {
            daylight_saving: DaylightSaving::Summer,
            utc_offset: UtcOffset::from_minutes(-300).unwrap(),
        };
        device.set_leds(LedColor::new(1, 2, 3)).await.unwrap();
        device
            .set_wifi(WifiCredentials::new("HomeNet", "secret").unwrap())
            .await
            .unwrap();
        device.set_clock(clock).await.unwrap();

        let board = device.snapshot();
        assert_eq!(board.leds, LedColor::new(1, 2, 3));
        assert_eq!(board.wifi.as_ref().map(WifiCredentials::ssid), Some("HomeNet"));
        assert_eq!(board.clock, clock);
    }

    #[tokio::test]
    async fn should_share_board_between_clones() {
        let device = VirtualDevice::new();
        let handle = device.clone();
        handle.press();
        assert_eq!(device.button_state().await.unwrap().presses, 1);
    }

    #[tokio::test]
    async fn should_restore_factory_state_on_reset() {
        let device = VirtualDevice::new();
        device.set_relay(RelayState::On).await.unwrap();
        device.press();
        device.store_firmware(vec![9]).await.unwrap();
        device
            .set_wifi(WifiCredentials::new("HomeNet", "").unwrap())
            .await
            .unwrap();

        device.reset().await.unwrap();

        assert_eq!(device.snapshot(), Board::default());
    }
}
