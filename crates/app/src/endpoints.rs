//! Device REST endpoints and their request encodings.
//!
//! Shared by every `DeviceApi` implementation so the URL and body formats
//! live in one place.

use wifibutton_domain::relay::RelayState;
use wifibutton_domain::upload::UploadPath;

/// `GET` — switch the relay; takes a `state` query parameter.
pub const RELAY: &str = "/api/gpio/relay";
/// `GET` — read the push button.
pub const BUTTON_STATE: &str = "/api/gpio/buttonState";
/// `POST` form — set the LED colour.
pub const LEDS: &str = "/api/gpio/leds";
/// `POST` raw body — flash firmware.
pub const UPLOAD_FIRMWARE: &str = "/api/upload/firmware";
/// `POST` raw body — store a file.
pub const UPLOAD_FILE: &str = "/api/upload/file";
/// `GET` — set the upload directory; takes a `path` query parameter.
pub const UPLOAD_PATH: &str = "/api/upload/path";
/// `POST` form — set WiFi credentials.
pub const SSID: &str = "/api/config/ssid";
/// `POST` form — set the clock.
pub const TIME: &str = "/api/time";
/// `GET` — factory reset.
pub const RESET: &str = "/api/config/reset";

/// Content type of the settings forms.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// URL switching the relay to `state`.
#[must_use]
pub fn relay_url(state: RelayState) -> String {
    format!("{RELAY}?state={}", state.as_str())
}

/// URL setting the upload directory to `path`.
#[must_use]
pub fn upload_path_url(path: &UploadPath) -> String {
    format!("{UPLOAD_PATH}?path={}", encode_query_value(path.as_str()))
}

/// Encode `(name, value)` pairs as an urlencoded form body.
#[must_use]
pub fn encode_form(fields: &[(&str, String)]) -> String {
    fields
        .iter()
        .map(|(name, value)| format!("{name}={}", encode_query_value(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Percent-encode a query or form value.
///
/// Unreserved characters and `/` pass through; everything else, including
/// multi-byte UTF-8 sequences, is escaped byte by byte.
#[must_use]
pub fn encode_query_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' | b'/' => {
                out.push(char::from(byte));
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_relay_url_with_state() {
        assert_eq!(relay_url(RelayState::On), "/api/gpio/relay?state=ON");
        assert_eq!(relay_url(RelayState::Off), "/api/gpio/relay?state=OFF");
    }

    #[test]
    fn should_build_upload_path_url() {
        let path = UploadPath::parse("/srv/www").unwrap();
        assert_eq!(upload_path_url(&path), "/api/upload/path?path=/srv/www");
    }

    #[test]
    fn should_escape_reserved_characters_in_upload_path() {
        let path = UploadPath::parse("/my files/a&b=c").unwrap();
        assert_eq!(
            upload_path_url(&path),
            "/api/upload/path?path=/my%20files/a%26b%3Dc"
        );
    }

    #[test]
    fn should_encode_form_fields_in_order() {
        let body = encode_form(&[
            ("ssid", "Home Net".to_string()),
            ("ssid_pw", "p+w%".to_string()),
        ]);
        assert_eq!(body, "ssid=Home%20Net&ssid_pw=p%2Bw%25");
    }

    #[test]
    fn should_escape_multibyte_utf8() {
        assert_eq!(encode_query_value("é"), "%C3%A9");
    }

    #[test]
    fn should_encode_empty_form_as_empty_string() {
        assert_eq!(encode_form(&[]), "");
    }
}
