//! Device settings: LEDs, WiFi credentials, clock and factory reset.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::MouseEvent;
use wifibutton_app::services::settings_service::SettingsService;
use wifibutton_domain::settings::{ClockSettings, DaylightSaving, LedColor, UtcOffset};

use crate::api::GlooDeviceApi;
use crate::components::{AlertHandle, origin_of, use_alerts};

type Service = SettingsService<GlooDeviceApi, AlertHandle>;

/// One colour channel slider.
#[component]
fn ChannelSlider(label: &'static str, value: RwSignal<u8>) -> impl IntoView {
    view! {
        <div class="field">
            <label>{label}</label>
            <input
                type="range"
                min="0"
                max="255"
                step="5"
                prop:value=move || value.get().to_string()
                on:input=move |ev| {
                    if let Ok(v) = event_target_value(&ev).parse() {
                        value.set(v);
                    }
                }
            />
            <output>{move || value.get()}</output>
        </div>
    }
}

#[component]
pub fn Settings() -> impl IntoView {
    let alerts = use_alerts();
    let service = move || Service::new(GlooDeviceApi, alerts);

    let defaults = LedColor::default();
    let red = RwSignal::new(defaults.red);
    let green = RwSignal::new(defaults.green);
    let blue = RwSignal::new(defaults.blue);
    let color = move || LedColor::new(red.get(), green.get(), blue.get());

    let ssid = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let clock = RwSignal::new(ClockSettings::default());

    let save_leds = move |ev: MouseEvent| {
        let origin = origin_of(&ev);
        let color = LedColor::new(
            red.get_untracked(),
            green.get_untracked(),
            blue.get_untracked(),
        );
        spawn_local(async move {
            if let Err(err) = service().set_leds(color, Some(origin)).await {
                tracing::debug!(error = %err.user_message(), "LED colour not applied");
            }
        });
    };

    let save_wifi = move |ev: MouseEvent| {
        let origin = origin_of(&ev);
        let (ssid, password) = (ssid.get_untracked(), password.get_untracked());
        spawn_local(async move {
            if let Err(err) = service().set_wifi(&ssid, &password, Some(origin)).await {
                tracing::debug!(error = %err.user_message(), "WiFi credentials not applied");
            }
        });
    };

    let save_clock = move |ev: MouseEvent| {
        let origin = origin_of(&ev);
        let clock = clock.get_untracked();
        spawn_local(async move {
            if let Err(err) = service().set_clock(clock, Some(origin)).await {
                tracing::debug!(error = %err.user_message(), "clock not applied");
            }
        });
    };

    let reset = move |ev: MouseEvent| {
        let origin = origin_of(&ev);
        spawn_local(async move {
            if let Err(err) = service().reset_device(Some(origin)).await {
                tracing::debug!(error = %err.user_message(), "reset not applied");
            }
        });
    };

    let set_daylight = move |mode: DaylightSaving| {
        move |_: web_sys::Event| clock.update(|c| c.daylight_saving = mode)
    };

    view! {
        <section class="card">
            <h2>"LEDs"</h2>
            <ChannelSlider label="Red" value=red/>
            <ChannelSlider label="Green" value=green/>
            <ChannelSlider label="Blue" value=blue/>
            <div class="swatch" style:background-color=move || color().to_hex()></div>
            <button class="button-primary" on:click=save_leds>"Save"</button>
        </section>

        <section class="card">
            <h2>"WiFi"</h2>
            <div class="field">
                <label for="ssid">"SSID"</label>
                <input type="text" id="ssid" bind:value=ssid/>
            </div>
            <div class="field">
                <label for="ssid-pw">"Password"</label>
                <input type="password" id="ssid-pw" bind:value=password/>
            </div>
            <button class="button-primary" on:click=save_wifi>"Save"</button>
        </section>

        <section class="card">
            <h2>"Clock"</h2>
            <div class="field">
                <label>
                    <input
                        type="radio"
                        name="sumTime"
                        prop:checked=move || clock.get().daylight_saving == DaylightSaving::Standard
                        on:change=set_daylight(DaylightSaving::Standard)
                    />
                    "Standard time"
                </label>
                <label>
                    <input
                        type="radio"
                        name="sumTime"
                        prop:checked=move || clock.get().daylight_saving == DaylightSaving::Summer
                        on:change=set_daylight(DaylightSaving::Summer)
                    />
                    "Summer time"
                </label>
            </div>
            <div class="field">
                <label for="utc">"UTC offset"</label>
                <select
                    id="utc"
                    prop:value=move || clock.get().utc_offset.form_value()
                    on:change=move |ev| {
                        match event_target_value(&ev).parse::<UtcOffset>() {
                            Ok(offset) => clock.update(|c| c.utc_offset = offset),
                            Err(err) => tracing::warn!(error = %err, "offset rejected"),
                        }
                    }
                >
                    {UtcOffset::all()
                        .map(|offset| {
                            view! { <option value=offset.form_value()>{offset.to_string()}</option> }
                        })
                        .collect_view()}
                </select>
            </div>
            <button class="button-primary" on:click=save_clock>"Save"</button>
        </section>

        <section class="card">
            <h2>"Reset device"</h2>
            <p>"Disconnect from the WLAN and restore factory settings."</p>
            <button class="button-danger" on:click=reset>"Reset"</button>
        </section>
    }
}
