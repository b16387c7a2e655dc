use std::cell::RefCell;

use leptos::{RwSignal, SignalUpdate};

use crate::{api::JobFinderApi, state::JobFinder};

/// Shared owner of the page state. The async flows only touch the state through short
/// synchronous updates so the UI stays interactive while a request is in flight.
pub trait Store<F> {
    /// Run `f` against the state. Returns `None` when the state no longer exists.
    fn modify<O>(&self, f: impl FnOnce(&mut JobFinder<F>) -> O) -> Option<O>;
}

impl<F: 'static> Store<F> for RwSignal<JobFinder<F>> {
    fn modify<O>(&self, f: impl FnOnce(&mut JobFinder<F>) -> O) -> Option<O> {
        let mut output = None;
        self.update(|state| output = Some(f(state)));
        output
    }
}

impl<F> Store<F> for RefCell<JobFinder<F>> {
    fn modify<O>(&self, f: impl FnOnce(&mut JobFinder<F>) -> O) -> Option<O> {
        Some(f(&mut self.borrow_mut()))
    }
}

pub async fn register<A, S>(api: &A, store: &S)
where
    A: JobFinderApi,
    S: Store<A::File>,
{
    let Some(credentials) = store.modify(JobFinder::begin_register).flatten() else {
        return;
    };
    let result = api.register(&credentials).await;
    match &result {
        Ok(_) => log::info!("Registered {}", credentials.email),
        Err(error) => log::error!("Unable to register {}: {error}", credentials.email),
    }
    store.modify(|state| state.finish_register(result));
}

pub async fn login<A, S>(api: &A, store: &S)
where
    A: JobFinderApi,
    S: Store<A::File>,
{
    let Some(credentials) = store.modify(JobFinder::begin_login).flatten() else {
        return;
    };
    let result = api.login(&credentials).await;
    match &result {
        Ok(_) => log::info!("Logged in as {}", credentials.email),
        Err(error) => log::error!("Unable to login with {}: {error}", credentials.email),
    }
    store.modify(|state| state.finish_login(result));
}

pub fn logout<F, S>(store: &S)
where
    S: Store<F>,
{
    store.modify(JobFinder::logout);
}

pub async fn upload_resume<A, S>(api: &A, store: &S)
where
    A: JobFinderApi,
    S: Store<A::File>,
{
    let Some(request) = store.modify(JobFinder::begin_upload).flatten() else {
        return;
    };
    let result = api.upload_resume(request).await;
    match &result {
        Ok(response) => log::info!(
            "Received {} job recommendations",
            response.job_recommendations.len()
        ),
        Err(error) => log::error!("Unable to upload resume: {error}"),
    }
    store.modify(|state| state.finish_upload(result));
}
