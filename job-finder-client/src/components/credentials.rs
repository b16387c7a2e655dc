use leptos::*;
use web_sys::File;

use crate::{selectors, state::JobFinder};

#[component]
pub fn CredentialsForm<F>(
    cx: Scope,
    state: RwSignal<JobFinder<File>>,
    register: Action<(), ()>,
    login: Action<(), ()>,
    on_logout: F,
) -> impl IntoView
where
    F: Fn() + 'static + Clone + Copy,
{
    let email = selectors::email(cx, state);
    let password = selectors::password(cx, state);
    let logged_in = selectors::logged_in(cx, state);
    let disabled = move || register.pending().get() || login.pending().get();

    view! { cx,
        <div class="mb-3">
            {move || if logged_in.get() {
                view! { cx,
                    <div class="d-flex justify-content-between align-items-center">
                        <span>"Logged in as " {move || email.get()}</span>
                        <button class="btn btn-outline-secondary" on:click=move |_| on_logout()>
                            "Logout"
                        </button>
                    </div>
                }
                    .into_view(cx)
            } else {
                view! { cx,
                    <form on:submit=|ev| ev.prevent_default()>
                        <div class="form-group mb-2">
                            <label for="email">"Email"</label>
                            <input
                                class="form-control"
                                type="email"
                                id="email"
                                name="email"
                                prop:value=move || email.get()
                                on:input=move |ev| {
                                    let val = event_target_value(&ev);
                                    state.update(|s| s.set_email(val));
                                }
                            />
                        </div>
                        <div class="form-group mb-2">
                            <label for="password">"Password"</label>
                            <input
                                class="form-control"
                                type="password"
                                id="password"
                                name="password"
                                prop:value=move || password.get()
                                on:input=move |ev| {
                                    let val = event_target_value(&ev);
                                    state.update(|s| s.set_password(val));
                                }
                            />
                        </div>
                        <div class="d-flex gap-2">
                            <button
                                class="btn btn-secondary"
                                type="button"
                                prop:disabled=disabled
                                on:click=move |_| register.dispatch(())
                            >
                                "Register"
                            </button>
                            <button
                                class="btn btn-success"
                                type="button"
                                prop:disabled=disabled
                                on:click=move |_| login.dispatch(())
                            >
                                "Login"
                            </button>
                        </div>
                    </form>
                }
                    .into_view(cx)
            }}
        </div>
    }
}
