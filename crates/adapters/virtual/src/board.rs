//! State of the simulated board.

use std::collections::BTreeMap;

use wifibutton_domain::button::ButtonState;
use wifibutton_domain::relay::RelayState;
use wifibutton_domain::settings::{ClockSettings, LedColor, WifiCredentials};
use wifibutton_domain::upload::{StoredUpload, UploadPath};

/// The file last written through the upload endpoint at one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub upload: StoredUpload,
    pub contents: Vec<u8>,
}

/// Everything the board remembers. [`Board::default`] is the factory state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    pub relay: RelayState,
    pub button: ButtonState,
    pub firmware: Option<Vec<u8>>,
    pub upload_path: UploadPath,
    /// One file per upload path; a new upload replaces the previous one.
    pub files: BTreeMap<UploadPath, StoredFile>,
    pub leds: LedColor,
    pub wifi: Option<WifiCredentials>,
    pub clock: ClockSettings,
}

impl Board {
    /// Push the button down. A press is counted on the released → pressed edge.
    pub fn press(&mut self) {
        if !self.button.pressed {
            self.button.pressed = true;
            self.button.presses = self.button.presses.saturating_add(1);
        }
    }

    pub fn release(&mut self) {
        self.button.pressed = false;
    }

    /// Write `contents` at `upload.path`, returning the file it replaced.
    pub fn store_file(&mut self, upload: StoredUpload, contents: Vec<u8>) -> Option<StoredFile> {
        self.files.insert(upload.path.clone(), StoredFile { upload, contents })
    }
}
