//! # wifibutton-dashboard
//!
//! Browser client for the WiFi relay/button device. Compiled to WebAssembly
//! with trunk and served by `wifibuttond` next to the REST API.

use leptos::prelude::*;
use leptos_router::components::Router;

pub mod api;
mod components;
mod pages;

use components::{AlertHost, Shell};

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <AlertHost>
            <Router>
                <Shell/>
            </Router>
        </AlertHost>
    }
}
