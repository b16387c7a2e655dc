use leptos::{html::Input, *};
use web_sys::File;

use crate::{selectors, state::JobFinder};

#[component]
pub fn ResumeUpload(
    cx: Scope,
    state: RwSignal<JobFinder<File>>,
    upload: Action<(), ()>,
) -> impl IntoView {
    let input_ref = create_node_ref::<Input>(cx);
    let loading = selectors::loading(cx, state);
    let error = selectors::error(cx, state);

    let on_change = move |_: ev::Event| {
        let resume = input_ref
            .get()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        state.update(|s| s.select_resume(resume));
    };

    view! { cx,
        <input
            type="file"
            class="form-control mb-3"
            node_ref=input_ref
            on:change=on_change
        />
        <button
            class="btn btn-primary w-100"
            prop:disabled=move || loading.get()
            on:click=move |_| upload.dispatch(())
        >
            {move || if loading.get() { "Processing..." } else { "Upload & Get Jobs" }}
        </button>
        {move || {
            error.get().map(|err| view! { cx, <div class="alert alert-danger mt-3">{err}</div> })
        }}
    }
}
