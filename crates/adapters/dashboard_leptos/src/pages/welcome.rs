use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Welcome() -> impl IntoView {
    view! {
        <section class="card">
            <h2>"WiFi-Button"</h2>
            <p>
                "Control the relay, read the push button and manage uploads from the "
                <A href="/sample">"Sample"</A>
                " page. Device LEDs, WiFi credentials and the clock live under "
                <A href="/settings">"Settings"</A>
                "."
            </p>
        </section>
    }
}
