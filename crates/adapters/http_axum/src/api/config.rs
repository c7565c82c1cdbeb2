//! WiFi, clock and factory reset handlers.

use axum::Json;
use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};
use serde::Deserialize;

use wifibutton_app::ports::DeviceBackend;
use wifibutton_domain::response::DeviceResponse;

use crate::error::ApiError;
use crate::state::AppState;

/// Form body of the SSID endpoint.
#[derive(Deserialize)]
pub struct SsidForm {
    #[serde(default)]
    pub ssid: String,
    #[serde(default)]
    pub ssid_pw: String,
}

/// Form body of the time endpoint.
#[derive(Deserialize)]
pub struct TimeForm {
    /// `STD` or `SUM`.
    #[serde(rename = "sumTime", default)]
    pub sum_time: String,
    /// Offset in hours, `5.30` style for half hours.
    #[serde(default)]
    pub utc: String,
}

/// `POST /api/config/ssid`
pub async fn ssid<B>(
    State(state): State<AppState<B>>,
    form: Result<Form<SsidForm>, FormRejection>,
) -> Result<Json<DeviceResponse>, ApiError>
where
    B: DeviceBackend + 'static,
{
    let Form(form) = form?;
    let resp = state
        .device_service
        .set_wifi(&form.ssid, &form.ssid_pw)
        .await?;
    Ok(Json(resp))
}

/// `POST /api/time`
pub async fn time<B>(
    State(state): State<AppState<B>>,
    form: Result<Form<TimeForm>, FormRejection>,
) -> Result<Json<DeviceResponse>, ApiError>
where
    B: DeviceBackend + 'static,
{
    let Form(form) = form?;
    let resp = state
        .device_service
        .set_clock(&form.sum_time, &form.utc)
        .await?;
    Ok(Json(resp))
}

/// `GET /api/config/reset`
pub async fn reset<B>(State(state): State<AppState<B>>) -> Result<Json<DeviceResponse>, ApiError>
where
    B: DeviceBackend + 'static,
{
    let resp = state.device_service.reset().await?;
    Ok(Json(resp))
}
