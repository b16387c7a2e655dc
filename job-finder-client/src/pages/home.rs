use leptos::*;
use web_sys::File;

use crate::{
    actions,
    api::HttpApi,
    components::{
        CredentialsForm, CredentialsFormProps, RecommendationsTable, RecommendationsTableProps,
        ResumeUpload, ResumeUploadProps, Toasts, ToastsProps,
    },
    config::AuthMode,
    selectors,
    state::JobFinder,
};

#[component]
pub fn Home(cx: Scope, api: HttpApi, auth_mode: AuthMode) -> impl IntoView {
    let state = create_rw_signal(cx, JobFinder::<File>::new(auth_mode));

    let register = create_action(cx, move |_: &()| async move {
        actions::register(&api, &state).await;
    });
    let login = create_action(cx, move |_: &()| async move {
        actions::login(&api, &state).await;
    });
    let upload = create_action(cx, move |_: &()| async move {
        actions::upload_resume(&api, &state).await;
    });
    let on_logout = move || actions::logout(&state);

    let recommendations = selectors::recommendations(cx, state);

    view! { cx,
        <div class="container mt-5">
            <div class="card p-4 shadow">
                <h1>"AI Job Finder"</h1>
                {auth_mode.requires_login().then(|| view! { cx,
                    <CredentialsForm state register login on_logout/>
                })}
                <ResumeUpload state upload/>
            </div>
            <RecommendationsTable recommendations/>
            <Toasts state/>
        </div>
    }
}
