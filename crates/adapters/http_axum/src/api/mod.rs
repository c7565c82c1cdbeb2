//! Device REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod config;
#[allow(clippy::missing_errors_doc)]
pub mod gpio;
#[allow(clippy::missing_errors_doc)]
pub mod upload;

use axum::Router;
use axum::routing::{get, post};

use wifibutton_app::ports::DeviceBackend;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<B>() -> Router<AppState<B>>
where
    B: DeviceBackend + 'static,
{
    Router::new()
        // GPIO
        .route("/gpio/relay", get(gpio::relay::<B>))
        .route("/gpio/buttonState", get(gpio::button_state::<B>))
        .route("/gpio/leds", post(gpio::leds::<B>))
        // Uploads
        .route("/upload/firmware", post(upload::firmware::<B>))
        .route("/upload/file", post(upload::file::<B>))
        .route("/upload/path", get(upload::path::<B>))
        // Device configuration
        .route("/config/ssid", post(config::ssid::<B>))
        .route("/config/reset", get(config::reset::<B>))
        .route("/time", post(config::time::<B>))
}
