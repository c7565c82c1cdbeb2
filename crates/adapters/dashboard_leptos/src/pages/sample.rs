//! Sample API calls: relay, push button, firmware and file uploads.

use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::MouseEvent;
use wifibutton_app::ports::Notifier;
use wifibutton_app::services::GOT_IT;
use wifibutton_app::services::sample_service::{RelayOutcome, SampleService};
use wifibutton_domain::alert::{AlertDialog, Origin};
use wifibutton_domain::upload::{DEFAULT_UPLOAD_PATH, UploadPayload, UploadTarget};

use crate::api::{self, GlooDeviceApi};
use crate::components::{AlertHandle, origin_of, use_alerts};

type Service = SampleService<GlooDeviceApi, AlertHandle>;

/// Read the file picked in `input` and upload it to `target`.
async fn upload_selected(
    service: Service,
    alerts: AlertHandle,
    input: Option<web_sys::HtmlInputElement>,
    target: UploadTarget,
    origin: Origin,
) {
    let selected = match input {
        Some(input) => api::read_selected_file(&input).await,
        None => Ok(None),
    };
    match selected {
        Ok(file) => {
            let payload = file.and_then(|(name, bytes)| UploadPayload::new(name, bytes).ok());
            if let Err(err) = service.upload(target, payload, Some(origin)).await {
                tracing::debug!(error = %err.user_message(), "upload not completed");
            }
        }
        Err(message) => alerts.show_alert(
            AlertDialog::new("Upload Error", format!("The file could not be read: {message}"))
                .ok_label(GOT_IT)
                .origin(Some(origin)),
        ),
    }
}

#[component]
pub fn Sample() -> impl IntoView {
    let alerts = use_alerts();
    let service = move || Service::new(GlooDeviceApi, alerts);

    let relay = RwSignal::new(false);
    let upload_path = RwSignal::new(DEFAULT_UPLOAD_PATH.to_string());
    let firmware_input = NodeRef::<Input>::new();
    let file_input = NodeRef::<Input>::new();

    let toggle_relay = move |ev: MouseEvent| {
        let on = event_target_checked(&ev);
        relay.set(on);
        let origin = origin_of(&ev);
        spawn_local(async move {
            match service().toggle_relay(on, Some(origin)).await {
                RelayOutcome::Applied(state) => tracing::debug!(%state, "relay applied"),
                RelayOutcome::Rejected(_) | RelayOutcome::Failed(_) => {
                    tracing::debug!("relay request not applied");
                }
            }
        });
    };

    let button_state = move |ev: MouseEvent| {
        let origin = origin_of(&ev);
        spawn_local(async move {
            match service().get_button_state(Some(origin)).await {
                Ok(body) => tracing::debug!(%body, "button state read"),
                Err(err) => tracing::debug!(error = %err, "button state unavailable"),
            }
        });
    };

    let upload = move |input: NodeRef<Input>, target: UploadTarget| {
        move |ev: MouseEvent| {
            let origin = origin_of(&ev);
            let element = input.get();
            spawn_local(upload_selected(service(), alerts, element, target, origin));
        }
    };

    let set_upload_path = move |ev: MouseEvent| {
        let origin = origin_of(&ev);
        let raw = upload_path.get_untracked();
        spawn_local(async move {
            if let Ok(path) = service().set_upload_path(&raw, Some(origin)).await {
                upload_path.set(path.to_string());
            }
        });
    };

    view! {
        <section class="card">
            <h2>"Relay"</h2>
            <label class="switch">
                <input type="checkbox" prop:checked=move || relay.get() on:click=toggle_relay/>
                <span>{move || if relay.get() { "On" } else { "Off" }}</span>
            </label>
        </section>

        <section class="card">
            <h2>"Push button"</h2>
            <button class="button-primary" on:click=button_state>"Get button state"</button>
        </section>

        <section class="card">
            <h2>"Firmware"</h2>
            <p>"Reprogram the device over the air."</p>
            <input type="file" id="firmware" node_ref=firmware_input/>
            <button class="button-primary" on:click=upload(firmware_input, UploadTarget::Firmware)>
                "Upload firmware"
            </button>
        </section>

        <section class="card">
            <h2>"Files"</h2>
            <p>"Save a file into the file system of the device."</p>
            <div class="field">
                <label for="upload-path">"Upload path"</label>
                <input type="text" id="upload-path" bind:value=upload_path/>
                <button on:click=set_upload_path>"Set path"</button>
            </div>
            <input type="file" id="file" node_ref=file_input/>
            <button class="button-primary" on:click=upload(file_input, UploadTarget::File)>
                "Upload file"
            </button>
        </section>
    }
}
