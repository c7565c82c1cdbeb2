//! Relay, push button and status LED handlers.

use axum::Json;
use axum::extract::rejection::{FormRejection, QueryRejection};
use axum::extract::{Form, Query, State};
use serde::Deserialize;

use wifibutton_app::ports::DeviceBackend;
use wifibutton_domain::response::DeviceResponse;

use crate::error::ApiError;
use crate::state::AppState;

/// Query string of the relay endpoint.
#[derive(Deserialize)]
pub struct RelayQuery {
    /// `ON` or `OFF`; anything else, including nothing, gets a `FAIL` body.
    #[serde(default)]
    pub state: String,
}

/// Form body of the LED endpoint, one decimal value per channel.
///
/// Channels are kept as text so out-of-range values reach validation.
#[derive(Deserialize)]
pub struct LedForm {
    #[serde(default)]
    pub red: String,
    #[serde(default)]
    pub green: String,
    #[serde(default)]
    pub blue: String,
}

/// `GET /api/gpio/relay?state=ON|OFF`
pub async fn relay<B>(
    State(state): State<AppState<B>>,
    query: Result<Query<RelayQuery>, QueryRejection>,
) -> Result<Json<DeviceResponse>, ApiError>
where
    B: DeviceBackend + 'static,
{
    let Query(query) = query?;
    let resp = state.device_service.switch_relay(&query.state).await?;
    Ok(Json(resp))
}

/// `GET /api/gpio/buttonState`
pub async fn button_state<B>(
    State(state): State<AppState<B>>,
) -> Result<Json<DeviceResponse>, ApiError>
where
    B: DeviceBackend + 'static,
{
    let resp = state.device_service.button_state().await?;
    Ok(Json(resp))
}

/// `POST /api/gpio/leds` with form fields `red`, `green`, `blue`.
pub async fn leds<B>(
    State(state): State<AppState<B>>,
    form: Result<Form<LedForm>, FormRejection>,
) -> Result<Json<DeviceResponse>, ApiError>
where
    B: DeviceBackend + 'static,
{
    let Form(form) = form?;
    let resp = state
        .device_service
        .set_leds(&form.red, &form.green, &form.blue)
        .await?;
    Ok(Json(resp))
}
