use std::time::Duration;

use leptos::*;
use web_sys::File;

use crate::state::{JobFinder, Notification};

const DISPLAY_TIME: Duration = Duration::from_secs(5);

#[component]
pub fn Toast(
    cx: Scope,
    state: RwSignal<JobFinder<File>>,
    notification: Notification,
) -> impl IntoView {
    let Notification { id, kind, message } = notification;
    set_timeout(move || state.update(|s| s.dismiss(id)), DISPLAY_TIME);
    let class = format!("toast fade show align-items-center {}", kind.css_class());
    view! { cx,
        <div class=class role="alert" aria-live="assertive" aria-atomic="true">
            <div class="d-flex">
                <div class="toast-body">{message}</div>
                <button
                    type="button"
                    class="btn-close me-2 m-auto"
                    aria-label="Close"
                    on:click=move |_| state.update(|s| s.dismiss(id))
                ></button>
            </div>
        </div>
    }
}

#[component]
pub fn Toasts(cx: Scope, state: RwSignal<JobFinder<File>>) -> impl IntoView {
    view! { cx,
        <div class="toast-container position-fixed top-0 end-0 p-3">
            <For
                each=move || state.with(|s| s.notifications().to_vec())
                key=|notification: &Notification| notification.id
                view=move |cx, notification: Notification| {
                    view! { cx, <Toast state=state notification=notification/> }
                }
            />
        </div>
    }
}
