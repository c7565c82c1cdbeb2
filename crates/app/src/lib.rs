//! # wifibutton-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `DeviceApi` — typed client for the device REST API (browser side)
//!   - `Notifier` — shows alert dialogs to the user
//!   - `SidePanel` — the collapsible navigation drawer
//!   - `DeviceBackend` — the device itself (simulator side)
//! - Define **use-case services**:
//!   - `SampleService` — relay toggle, button read, uploads, upload path
//!   - `SettingsService` — LED colour, WiFi credentials, clock, reset
//!   - `ShellService` — side panel and active-link state
//!   - `DeviceService` — answers REST calls on behalf of a `DeviceBackend`
//! - Track the current client-side route (`Router`)
//!
//! ## Dependency rule
//! Depends on `wifibutton-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod endpoints;
pub mod error;
pub mod ports;
pub mod router;
pub mod services;
