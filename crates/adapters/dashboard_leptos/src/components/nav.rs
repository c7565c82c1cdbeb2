//! Side navigation drawer.

use leptos::prelude::*;
use leptos_router::components::A;
use wifibutton_app::ports::SidePanel;
use wifibutton_app::router::Router as RouteState;
use wifibutton_app::services::shell_service::ShellService;

/// Open/closed state of the drawer, implementing the [`SidePanel`] port.
#[derive(Clone, Copy)]
pub struct PanelHandle {
    open: RwSignal<bool>,
}

impl PanelHandle {
    pub fn new() -> Self {
        Self {
            open: RwSignal::new(false),
        }
    }

    /// Tracked read, for use inside views.
    pub fn shown(&self) -> bool {
        self.open.get()
    }
}

impl SidePanel for PanelHandle {
    fn open(&self) {
        self.open.set(true);
    }

    fn close(&self) {
        self.open.set(false);
    }

    fn toggle(&self) {
        self.open.update(|open| *open = !*open);
    }

    fn is_open(&self) -> bool {
        self.open.get_untracked()
    }
}

/// The drawer listing the navigation entries, with the current one highlighted.
#[component]
pub fn SideNav(
    shell: StoredValue<ShellService<PanelHandle>>,
    panel: PanelHandle,
    router: RwSignal<RouteState>,
) -> impl IntoView {
    let entries = shell.with_value(ShellService::nav_entries);

    view! {
        <aside class="sidenav" class:open=move || panel.shown()>
            <nav>
                <ul>
                    {entries
                        .iter()
                        .map(|&entry| {
                            let active = move || {
                                router.with(|r| shell.with_value(|s| s.is_active(r, entry.link)))
                            };
                            view! {
                                <li
                                    class:active=active
                                    on:click=move |_| shell.with_value(|s| s.select(&entry))
                                >
                                    <A href=entry.link>{entry.title}</A>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
        </aside>
        <div
            class="sidenav-scrim"
            class:open=move || panel.shown()
            on:click=move |_| shell.with_value(ShellService::close)
        ></div>
    }
}
