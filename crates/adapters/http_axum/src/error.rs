//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::{FormRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use wifibutton_domain::error::DeviceError;
use wifibutton_domain::response::STATUS_FAIL;

/// JSON error body, shaped like the device's own `FAIL` answers.
#[derive(Serialize)]
struct ErrorBody {
    status: &'static str,
    error: String,
}

/// Maps [`DeviceError`] and undecodable requests to an HTTP response.
///
/// Every variant answers with the `FAIL` body, so clients only need one
/// error shape.
#[derive(Debug)]
pub enum ApiError {
    Device(DeviceError),
    /// The form body or query string could not be decoded.
    Malformed(String),
}

impl From<DeviceError> for ApiError {
    fn from(err: DeviceError) -> Self {
        Self::Device(err)
    }
}

impl From<FormRejection> for ApiError {
    fn from(rejection: FormRejection) -> Self {
        Self::Malformed(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Malformed(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Malformed(message) => {
                tracing::debug!(%message, "malformed request");
                (StatusCode::BAD_REQUEST, message)
            }
            Self::Device(DeviceError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Device(DeviceError::Backend(err)) => {
                tracing::error!(error = %err, "device backend error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (
            status,
            Json(ErrorBody {
                status: STATUS_FAIL,
                error: message,
            }),
        )
            .into_response()
    }
}
