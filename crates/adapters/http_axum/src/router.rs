//! Axum router assembly.

use std::path::PathBuf;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use wifibutton_app::ports::DeviceBackend;

use crate::state::AppState;

/// Default cap on request bodies, large enough for a firmware image.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Options that shape the router beyond the API itself.
#[derive(Debug, Clone)]
pub struct RouterOptions {
    /// Directory holding the built dashboard. `None` serves the API only.
    pub dashboard_dir: Option<PathBuf>,
    /// Largest accepted request body, in bytes.
    pub max_upload_bytes: usize,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            dashboard_dir: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api` and, when a dashboard directory is given,
/// serves it for every other path with `index.html` as fallback so the
/// client-side router can resolve the path. Includes a [`TraceLayer`] that
/// logs each HTTP request/response at the `DEBUG` level.
pub fn build<B>(state: AppState<B>, options: RouterOptions) -> Router
where
    B: DeviceBackend + 'static,
{
    let api = crate::api::routes::<B>().layer(DefaultBodyLimit::max(options.max_upload_bytes));

    let mut router = Router::new()
        .route("/health", get(health_check))
        .nest("/api", api);

    if let Some(dir) = options.dashboard_dir {
        let index = ServeFile::new(dir.join("index.html"));
        router = router.fallback_service(ServeDir::new(dir).fallback(index));
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
