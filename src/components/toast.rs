//! Toast stack rendering queued notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders `NotificationsState` as a fixed-position stack. Click a toast to
//! dismiss it early; the browser build also auto-dismisses after a delay.

use leptos::prelude::*;

use crate::state::notifications::{Notification, NotificationsState};

/// How long a toast stays up before auto-dismissing.
#[cfg(feature = "hydrate")]
const AUTO_DISMISS_MS: u64 = 4_000;

/// Fixed-position toast stack.
#[component]
pub fn ToastStack() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationsState>>();

    view! {
        <div class="toasts">
            <For
                each=move || notifications.get().items
                key=|notification| notification.id.clone()
                children=move |notification: Notification| {
                    let Notification { id, severity, summary, detail } = notification;
                    #[cfg(feature = "hydrate")]
                    {
                        let id = id.clone();
                        leptos::task::spawn_local(async move {
                            gloo_timers::future::sleep(std::time::Duration::from_millis(
                                AUTO_DISMISS_MS,
                            ))
                            .await;
                            notifications.update(|state| state.dismiss(&id));
                        });
                    }
                    let class = format!("toast {}", severity.css_class());
                    view! {
                        <div
                            class=class
                            on:click=move |_| notifications.update(|state| state.dismiss(&id))
                        >
                            <strong class="toast__summary">{summary}</strong>
                            <span class="toast__detail">{detail}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
