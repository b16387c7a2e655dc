//! Memos over slices of the page state. Views read these instead of the whole signal so they
//! only rerun when their slice changes, not on every keystroke or toast.

use job_finder_common::JobRecommendation;
use leptos::{create_memo, Memo, RwSignal, Scope, SignalWith};

use crate::state::JobFinder;

pub fn logged_in<F: 'static>(cx: Scope, state: RwSignal<JobFinder<F>>) -> Memo<bool> {
    create_memo(cx, move |_| state.with(JobFinder::is_logged_in))
}

pub fn email<F: 'static>(cx: Scope, state: RwSignal<JobFinder<F>>) -> Memo<String> {
    create_memo(cx, move |_| state.with(|s| s.credentials().email.clone()))
}

pub fn password<F: 'static>(cx: Scope, state: RwSignal<JobFinder<F>>) -> Memo<String> {
    create_memo(cx, move |_| state.with(|s| s.credentials().password.clone()))
}

pub fn loading<F: 'static>(cx: Scope, state: RwSignal<JobFinder<F>>) -> Memo<bool> {
    create_memo(cx, move |_| state.with(JobFinder::is_loading))
}

pub fn error<F: 'static>(cx: Scope, state: RwSignal<JobFinder<F>>) -> Memo<Option<String>> {
    create_memo(cx, move |_| state.with(|s| s.error().map(str::to_owned)))
}

pub fn recommendations<F: 'static>(
    cx: Scope,
    state: RwSignal<JobFinder<F>>,
) -> Memo<Vec<JobRecommendation>> {
    create_memo(cx, move |_| state.with(|s| s.recommendations().to_vec()))
}
