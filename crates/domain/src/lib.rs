//! # wifibutton-domain
//!
//! Pure domain model for the WiFi-Button client and its device simulator.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps
//! - Define the **route table** and its matcher (which view a path renders)
//! - Define the **navigation entries** shown in the side panel
//! - Define **alert dialogs** (the only user-facing reporting channel)
//! - Define device values: **relay state**, decoded **device responses**,
//!   **uploads** and **settings** (LED colour, WiFi credentials, clock)
//! - Contain all invariant enforcement (validation) for those values
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod alert;
pub mod button;
pub mod nav;
pub mod relay;
pub mod response;
pub mod route;
pub mod settings;
pub mod upload;
