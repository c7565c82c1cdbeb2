//! Uploads — firmware images and files pushed to the device as raw bytes.

use std::fmt;

use crate::error::ValidationError;
use crate::time::Timestamp;

/// Upload path the device uses until told otherwise.
pub const DEFAULT_UPLOAD_PATH: &str = "/srv";

/// Where an upload is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadTarget {
    /// Replaces the device firmware.
    Firmware,
    /// Stored in the device filesystem at the current upload path.
    File,
}

impl UploadTarget {
    /// API endpoint receiving the raw body.
    #[must_use]
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Firmware => "/api/upload/firmware",
            Self::File => "/api/upload/file",
        }
    }
}

impl fmt::Display for UploadTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Firmware => f.write_str("firmware"),
            Self::File => f.write_str("file"),
        }
    }
}

/// The full contents of a user-selected file, held for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPayload {
    file_name: String,
    bytes: Vec<u8>,
}

impl UploadPayload {
    /// Wrap file contents.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyUpload`] when `bytes` is empty.
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Result<Self, ValidationError> {
        if bytes.is_empty() {
            return Err(ValidationError::EmptyUpload);
        }
        Ok(Self {
            file_name: file_name.into(),
            bytes,
        })
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always `false`: empty payloads are rejected on construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Consume the payload, returning the raw bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Absolute directory on the device where uploaded files are stored.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UploadPath(String);

impl UploadPath {
    /// Validate a user-entered path.
    ///
    /// Surrounding whitespace is trimmed. The path must be absolute and must
    /// not contain a `..` segment.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidUploadPath`] otherwise.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let path = raw.trim();
        let valid = path.starts_with('/')
            && !path.split('/').any(|segment| segment == "..")
            && !path.chars().any(char::is_control);
        if !valid {
            return Err(ValidationError::InvalidUploadPath(raw.to_string()));
        }
        Ok(Self(path.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for UploadPath {
    fn default() -> Self {
        Self(DEFAULT_UPLOAD_PATH.to_string())
    }
}

impl fmt::Display for UploadPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Record of a file stored on the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUpload {
    /// Upload path the file was written to.
    pub path: UploadPath,
    /// Number of bytes written.
    pub size: usize,
    /// When the upload completed.
    pub uploaded_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_targets_to_fixed_endpoints() {
        assert_eq!(UploadTarget::Firmware.endpoint(), "/api/upload/firmware");
        assert_eq!(UploadTarget::File.endpoint(), "/api/upload/file");
    }

    #[test]
    fn should_reject_empty_payload() {
        assert_eq!(
            UploadPayload::new("empty.bin", Vec::new()),
            Err(ValidationError::EmptyUpload)
        );
    }

    #[test]
    fn should_keep_exact_bytes() {
        let bytes = vec![0x00, 0xFF, 0x10, 0x80];
        let payload = UploadPayload::new("fw.bin", bytes.clone()).unwrap();
        assert_eq!(payload.bytes(), bytes.as_slice());
        assert_eq!(payload.len(), 4);
        assert_eq!(payload.file_name(), "fw.bin");
        assert_eq!(payload.into_bytes(), bytes);
    }

    #[test]
    fn should_accept_absolute_path_and_trim_whitespace() {
        let path = UploadPath::parse("  /srv/www ").unwrap();
        assert_eq!(path.as_str(), "/srv/www");
    }

    #[test]
    fn should_reject_relative_path() {
        assert!(UploadPath::parse("srv").is_err());
        assert!(UploadPath::parse("").is_err());
        assert!(UploadPath::parse("   ").is_err());
    }

    #[test]
    fn should_reject_parent_segments() {
        assert_eq!(
            UploadPath::parse("/srv/../etc"),
            Err(ValidationError::InvalidUploadPath("/srv/../etc".to_string()))
        );
    }

    #[test]
    fn should_default_to_srv() {
        assert_eq!(UploadPath::default().as_str(), "/srv");
    }
}
