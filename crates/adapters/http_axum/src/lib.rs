//! # wifibutton-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the device REST API under `/api` (relay, button, LEDs, uploads,
//!   WiFi, clock, reset) with the JSON bodies the firmware answers
//! - Serve the compiled dashboard from a directory, falling back to
//!   `index.html` so client-side routes survive a reload
//! - Map HTTP requests into [`DeviceService`](wifibutton_app::services::device_service::DeviceService)
//!   calls and errors into status codes
//!
//! ## Dependency rule
//! Depends on `wifibutton-app` (port traits and services) and
//! `wifibutton-domain` (request/response types). Never leaks axum types into
//! the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
