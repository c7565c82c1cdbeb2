//! Modal alert dialogs, the browser side of the [`Notifier`] port.

use leptos::prelude::*;
use wifibutton_app::ports::Notifier;
use wifibutton_domain::alert::{AlertDialog, Origin};

/// Reactive handle queueing alerts for the [`AlertHost`] to display.
///
/// Alerts are shown one at a time in the order they were raised.
#[derive(Clone, Copy)]
pub struct AlertHandle {
    queue: RwSignal<Vec<AlertDialog>>,
}

impl AlertHandle {
    /// Close the dialog on screen, revealing the next one if any.
    pub fn dismiss(&self) {
        self.queue.update(|queue| {
            if !queue.is_empty() {
                queue.remove(0);
            }
        });
    }
}

impl Notifier for AlertHandle {
    fn show_alert(&self, alert: AlertDialog) {
        tracing::debug!(title = alert.title(), "alert raised");
        self.queue.update(|queue| queue.push(alert));
    }
}

/// Access the alert handle from Leptos context.
///
/// Must be called within a component tree that has an [`AlertHost`] ancestor.
pub fn use_alerts() -> AlertHandle {
    use_context::<AlertHandle>().expect("AlertHandle not found in context")
}

/// Screen position of a mouse event, used to anchor dialogs.
pub fn origin_of(ev: &web_sys::MouseEvent) -> Origin {
    Origin {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn anchor_style(alert: &AlertDialog) -> String {
    alert.anchor().map_or_else(String::new, |Origin { x, y }| {
        format!("transform-origin: {x}px {y}px;")
    })
}

/// Provides the alert context and renders the front of the queue.
///
/// Place this once near the root of the component tree.
#[component]
pub fn AlertHost(children: Children) -> impl IntoView {
    let handle = AlertHandle {
        queue: RwSignal::new(Vec::new()),
    };
    provide_context(handle);

    let current = move || handle.queue.with(|queue| queue.first().cloned());

    view! {
        {children()}
        {move || {
            current()
                .map(|alert| {
                    view! {
                        <div class="dialog-backdrop">
                            <div
                                class="dialog"
                                role="alertdialog"
                                aria-modal="true"
                                aria-label=alert.label().to_string()
                                style=anchor_style(&alert)
                            >
                                <h2 class="dialog-title">{alert.title().to_string()}</h2>
                                <p class="dialog-content">{alert.content().to_string()}</p>
                                <div class="dialog-actions">
                                    <button class="button-primary" on:click=move |_| handle.dismiss()>
                                        {alert.confirm().to_string()}
                                    </button>
                                </div>
                            </div>
                        </div>
                    }
                })
        }}
    }
}
