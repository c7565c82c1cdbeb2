//! Device settings — LED colour, WiFi credentials and clock configuration.
//!
//! The device accepts these as urlencoded forms; [`LedColor::form_fields`]
//! and friends produce the exact field names it expects.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Characters the firmware refuses in text fields.
pub const FORBIDDEN_CHARS: [char; 5] = ['>', '<', '"', '\'', '&'];

/// Maximum SSID length in bytes (IEEE 802.11).
pub const MAX_SSID_LEN: usize = 32;

/// Maximum WPA passphrase length in bytes.
pub const MAX_PASSWORD_LEN: usize = 64;

/// RGB colour of the status LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LedColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl LedColor {
    #[must_use]
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parse the three channel values of the LED form.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidLedChannel`] for the first value that
    /// is missing or not in `0..=255`.
    pub fn from_form(red: &str, green: &str, blue: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            red: parse_channel("red", red)?,
            green: parse_channel("green", green)?,
            blue: parse_channel("blue", blue)?,
        })
    }

    /// Form fields for `POST /api/gpio/leds`.
    #[must_use]
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("red", self.red.to_string()),
            ("green", self.green.to_string()),
            ("blue", self.blue.to_string()),
        ]
    }

    /// CSS hex notation, e.g. `#ff8000`.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

fn parse_channel(channel: &'static str, value: &str) -> Result<u8, ValidationError> {
    value
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidLedChannel {
            channel,
            value: value.to_string(),
        })
}

/// Credentials of the access point the device joins.
///
/// Only built through [`WifiCredentials::new`], so a value always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WifiCredentials {
    ssid: String,
    password: String,
}

impl WifiCredentials {
    /// Validate and wrap credentials.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the SSID is empty, either field is
    /// too long, or contains one of [`FORBIDDEN_CHARS`].
    pub fn new(
        ssid: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let credentials = Self {
            ssid: ssid.into(),
            password: password.into(),
        };
        credentials.validate()?;
        Ok(credentials)
    }

    /// Check all invariants.
    ///
    /// # Errors
    ///
    /// See [`WifiCredentials::new`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.ssid.is_empty() {
            return Err(ValidationError::EmptySsid);
        }
        if self.ssid.len() > MAX_SSID_LEN {
            return Err(ValidationError::SsidTooLong(self.ssid.len()));
        }
        if self.password.len() > MAX_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooLong(self.password.len()));
        }
        check_forbidden("ssid", &self.ssid)?;
        check_forbidden("password", &self.password)
    }

    #[must_use]
    pub fn ssid(&self) -> &str {
        &self.ssid
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Form fields for `POST /api/config/ssid`.
    #[must_use]
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![("ssid", self.ssid.clone()), ("ssid_pw", self.password.clone())]
    }
}

fn check_forbidden(field: &'static str, value: &str) -> Result<(), ValidationError> {
    match value.chars().find(|c| FORBIDDEN_CHARS.contains(c)) {
        Some(ch) => Err(ValidationError::ForbiddenCharacter { field, ch }),
        None => Ok(()),
    }
}

/// Whether the device clock applies summer time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DaylightSaving {
    #[default]
    #[serde(rename = "STD")]
    Standard,
    #[serde(rename = "SUM")]
    Summer,
}

impl DaylightSaving {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "STD",
            Self::Summer => "SUM",
        }
    }
}

impl FromStr for DaylightSaving {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "STD" => Ok(Self::Standard),
            "SUM" => Ok(Self::Summer),
            other => Err(ValidationError::InvalidDaylightSaving(other.to_string())),
        }
    }
}

/// Offsets, in minutes, offered by the device's time form.
static SUPPORTED_OFFSETS: [i16; 42] = [
    840, 780, 765, 720, 690, 660, 630, 600, 570, 540, 525, 510, 480, 420, 390, 360, 345, 330, 300,
    270, 240, 210, 180, 120, 60, 0, -60, -120, -150, -180, -210, -240, -270, -300, -360, -420,
    -480, -540, -570, -600, -660, -720,
];

/// Offset of the device clock from UTC.
///
/// Only the offsets the firmware knows are representable. The wire form is
/// `hours[.minutes]`, e.g. `"5"`, `"5.30"`, `"-9.30"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UtcOffset {
    minutes: i16,
}

impl UtcOffset {
    /// Build an offset from a signed number of minutes.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidUtcOffset`] for unsupported offsets.
    pub fn from_minutes(minutes: i16) -> Result<Self, ValidationError> {
        if SUPPORTED_OFFSETS.contains(&minutes) {
            Ok(Self { minutes })
        } else {
            Err(ValidationError::InvalidUtcOffset(minutes.to_string()))
        }
    }

    /// Every supported offset, east to west.
    pub fn all() -> impl Iterator<Item = Self> {
        SUPPORTED_OFFSETS.iter().map(|&minutes| Self { minutes })
    }

    #[must_use]
    pub fn minutes(self) -> i16 {
        self.minutes
    }

    /// Value submitted in the `utc` form field.
    #[must_use]
    pub fn form_value(self) -> String {
        let sign = if self.minutes < 0 { "-" } else { "" };
        let hours = self.minutes.unsigned_abs() / 60;
        let mins = self.minutes.unsigned_abs() % 60;
        if mins == 0 {
            format!("{sign}{hours}")
        } else {
            format!("{sign}{hours}.{mins:02}")
        }
    }
}

impl Default for UtcOffset {
    fn default() -> Self {
        Self { minutes: 60 }
    }
}

impl FromStr for UtcOffset {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidUtcOffset(s.to_string());
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (hours, mins) = match body.split_once('.') {
            Some((h, m)) if m.len() == 2 => (h, m),
            Some(_) => return Err(invalid()),
            None => (body, "0"),
        };
        let hours: i16 = hours.parse().map_err(|_| invalid())?;
        let mins: i16 = mins.parse().map_err(|_| invalid())?;
        if hours < 0 || !(0..60).contains(&mins) {
            return Err(invalid());
        }
        let total = hours
            .checked_mul(60)
            .and_then(|h| h.checked_add(mins))
            .ok_or_else(invalid)?;
        Self::from_minutes(if negative { -total } else { total }).map_err(|_| invalid())
    }
}

/// Human-readable label, e.g. `UTC+5:30`.
impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.minutes < 0 { '-' } else { '+' };
        let hours = self.minutes.unsigned_abs() / 60;
        let mins = self.minutes.unsigned_abs() % 60;
        if mins == 0 {
            write!(f, "UTC{sign}{hours}")
        } else {
            write!(f, "UTC{sign}{hours}:{mins:02}")
        }
    }
}

/// Clock configuration submitted to `POST /api/time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockSettings {
    pub daylight_saving: DaylightSaving,
    pub utc_offset: UtcOffset,
}

impl ClockSettings {
    /// Form fields for `POST /api/time`.
    #[must_use]
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("sumTime", self.daylight_saving.as_str().to_string()),
            ("utc", self.utc_offset.form_value()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_encode_led_form_fields() {
        let fields = LedColor::new(255, 0, 5).form_fields();
        assert_eq!(
            fields,
            vec![
                ("red", "255".to_string()),
                ("green", "0".to_string()),
                ("blue", "5".to_string())
            ]
        );
    }

    #[test]
    fn should_parse_led_form_values() {
        assert_eq!(
            LedColor::from_form("255", "0", " 7 "),
            Ok(LedColor::new(255, 0, 7))
        );
    }

    #[test]
    fn should_reject_led_channel_out_of_range_or_missing() {
        assert_eq!(
            LedColor::from_form("300", "0", "0"),
            Err(ValidationError::InvalidLedChannel {
                channel: "red",
                value: "300".to_string()
            })
        );
        assert_eq!(
            LedColor::from_form("1", "", "0"),
            Err(ValidationError::InvalidLedChannel {
                channel: "green",
                value: String::new()
            })
        );
        assert!(LedColor::from_form("1", "2", "-3").is_err());
    }

    #[test]
    fn should_format_led_color_as_hex() {
        assert_eq!(LedColor::new(255, 128, 0).to_hex(), "#ff8000");
    }

    #[test]
    fn should_accept_valid_credentials() {
        let creds = WifiCredentials::new("HomeNet", "s3cret-pass").unwrap();
        assert_eq!(creds.ssid(), "HomeNet");
        assert_eq!(
            creds.form_fields(),
            vec![
                ("ssid", "HomeNet".to_string()),
                ("ssid_pw", "s3cret-pass".to_string())
            ]
        );
    }

    #[test]
    fn should_accept_open_network_without_password() {
        assert!(WifiCredentials::new("Cafe", "").is_ok());
    }

    #[test]
    fn should_reject_empty_ssid() {
        assert_eq!(
            WifiCredentials::new("", "pw"),
            Err(ValidationError::EmptySsid)
        );
    }

    #[test]
    fn should_reject_ssid_longer_than_32_bytes() {
        let ssid = "a".repeat(33);
        assert_eq!(
            WifiCredentials::new(ssid, "pw"),
            Err(ValidationError::SsidTooLong(33))
        );
    }

    #[test]
    fn should_reject_password_longer_than_64_bytes() {
        let pw = "p".repeat(65);
        assert_eq!(
            WifiCredentials::new("net", pw),
            Err(ValidationError::PasswordTooLong(65))
        );
    }

    #[test]
    fn should_reject_forbidden_characters() {
        for ch in FORBIDDEN_CHARS {
            let ssid = format!("net{ch}");
            assert_eq!(
                WifiCredentials::new(ssid, "pw"),
                Err(ValidationError::ForbiddenCharacter { field: "ssid", ch })
            );
        }
        assert_eq!(
            WifiCredentials::new("net", "a&b"),
            Err(ValidationError::ForbiddenCharacter {
                field: "password",
                ch: '&'
            })
        );
    }

    #[test]
    fn should_parse_daylight_saving_wire_form() {
        assert_eq!("STD".parse::<DaylightSaving>().unwrap(), DaylightSaving::Standard);
        assert_eq!("SUM".parse::<DaylightSaving>().unwrap(), DaylightSaving::Summer);
        assert!("DST".parse::<DaylightSaving>().is_err());
    }

    #[test]
    fn should_format_offsets_like_the_device_form() {
        let cases = [
            (840, "14"),
            (765, "12.45"),
            (330, "5.30"),
            (0, "0"),
            (-150, "-2.30"),
            (-570, "-9.30"),
            (-720, "-12"),
        ];
        for (minutes, expected) in cases {
            let offset = UtcOffset::from_minutes(minutes).unwrap();
            assert_eq!(offset.form_value(), expected);
            assert_eq!(expected.parse::<UtcOffset>().unwrap(), offset);
        }
    }

    #[test]
    fn should_reject_unsupported_offsets() {
        assert!(UtcOffset::from_minutes(15).is_err());
        assert!("15".parse::<UtcOffset>().is_err());
        assert!("5.3".parse::<UtcOffset>().is_err());
        assert!("5.75".parse::<UtcOffset>().is_err());
        assert!("abc".parse::<UtcOffset>().is_err());
        assert!("--1".parse::<UtcOffset>().is_err());
        assert!("9999".parse::<UtcOffset>().is_err());
    }

    #[test]
    fn should_offer_every_supported_offset_once() {
        let all: Vec<_> = UtcOffset::all().collect();
        assert_eq!(all.len(), 42);
        assert_eq!(all.first().map(|o| o.minutes()), Some(840));
        assert_eq!(all.last().map(|o| o.minutes()), Some(-720));
    }

    #[test]
    fn should_default_to_utc_plus_one_standard_time() {
        let clock = ClockSettings::default();
        assert_eq!(
            clock.form_fields(),
            vec![("sumTime", "STD".to_string()), ("utc", "1".to_string())]
        );
    }

    #[test]
    fn should_display_offset_label() {
        assert_eq!(UtcOffset::from_minutes(345).unwrap().to_string(), "UTC+5:45");
        assert_eq!(UtcOffset::from_minutes(-60).unwrap().to_string(), "UTC-1");
        assert_eq!(UtcOffset::default().to_string(), "UTC+1");
    }
}
