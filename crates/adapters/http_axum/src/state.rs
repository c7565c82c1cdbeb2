//! Shared application state for axum handlers.

use std::sync::Arc;

use wifibutton_app::ports::DeviceBackend;
use wifibutton_app::services::device_service::DeviceService;

/// Application state shared across all axum handlers.
///
/// Generic over the device backend to avoid dynamic dispatch. `Clone` is
/// implemented manually so the backend itself does not need to be `Clone`.
pub struct AppState<B> {
    /// Device use-cases.
    pub device_service: Arc<DeviceService<B>>,
}

impl<B> Clone for AppState<B> {
    fn clone(&self) -> Self {
        Self {
            device_service: Arc::clone(&self.device_service),
        }
    }
}

impl<B> AppState<B>
where
    B: DeviceBackend + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(device_service: DeviceService<B>) -> Self {
        Self {
            device_service: Arc::new(device_service),
        }
    }
}
