//! Firmware and file upload handlers.
//!
//! Bodies are taken raw: the dashboard posts the file bytes as-is with no
//! content type, so no multipart or form decoding happens here.

use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use serde::Deserialize;

use wifibutton_app::ports::DeviceBackend;
use wifibutton_domain::response::DeviceResponse;

use crate::error::ApiError;
use crate::state::AppState;

/// Query string of the upload path endpoint.
#[derive(Deserialize)]
pub struct PathQuery {
    #[serde(default)]
    pub path: String,
}

/// `POST /api/upload/firmware`
pub async fn firmware<B>(
    State(state): State<AppState<B>>,
    body: Bytes,
) -> Result<Json<DeviceResponse>, ApiError>
where
    B: DeviceBackend + 'static,
{
    let resp = state.device_service.upload_firmware(body.to_vec()).await?;
    Ok(Json(resp))
}

/// `POST /api/upload/file`
pub async fn file<B>(
    State(state): State<AppState<B>>,
    body: Bytes,
) -> Result<Json<DeviceResponse>, ApiError>
where
    B: DeviceBackend + 'static,
{
    let resp = state.device_service.upload_file(body.to_vec()).await?;
    Ok(Json(resp))
}

/// `GET /api/upload/path?path=..`
pub async fn path<B>(
    State(state): State<AppState<B>>,
    query: Result<Query<PathQuery>, QueryRejection>,
) -> Result<Json<DeviceResponse>, ApiError>
where
    B: DeviceBackend + 'static,
{
    let Query(query) = query?;
    let resp = state.device_service.set_upload_path(&query.path).await?;
    Ok(Json(resp))
}
