//! Application shell: toolbar, side navigation and the current view.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};
use wifibutton_app::router::Router as RouteState;
use wifibutton_app::services::shell_service::ShellService;
use wifibutton_domain::route::{DEFAULT_PATH, View};

use super::nav::{PanelHandle, SideNav};
use crate::pages::{Sample, Settings, Welcome};

/// Resolves the browser location against the route table and renders the
/// matching view. Unknown paths are replaced with the default route.
#[component]
pub fn Shell() -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();
    let router = RwSignal::new(RouteState::new());

    Effect::new(move |_| {
        let path = location.pathname.get();
        let mut next = router.get_untracked();
        let nav = next.navigate(&path);
        router.set(next);
        if nav.redirected {
            navigate(
                DEFAULT_PATH,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });

    let panel = PanelHandle::new();
    let shell = StoredValue::new(ShellService::new(panel));
    let view_kind = Memo::new(move |_| router.with(|r| r.current().map(|nav| nav.route.view)));

    view! {
        <header class="toolbar">
            <button
                class="icon-button"
                title="Menu"
                on:click=move |_| shell.with_value(ShellService::toggle)
            >
                "\u{2630}"
            </button>
            <h1 class="toolbar-title">{move || router.with(RouteState::page_title)}</h1>
        </header>
        <SideNav shell=shell panel=panel router=router/>
        <main>
            {move || match view_kind.get() {
                Some(View::Sample) => view! { <Sample/> }.into_any(),
                Some(View::Settings) => view! { <Settings/> }.into_any(),
                Some(View::Welcome) | None => view! { <Welcome/> }.into_any(),
            }}
        </main>
    }
}
