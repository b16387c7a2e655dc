pub mod actions;
pub mod api;
mod components;
pub mod config;
mod pages;
pub mod selectors;
pub mod state;

use leptos::*;

use crate::{
    api::HttpApi,
    config::ClientConfig,
    pages::home::{Home, HomeProps},
};

#[component]
pub fn App(cx: Scope, config: ClientConfig) -> impl IntoView {
    let api = HttpApi::new(config.api_url);
    view! { cx,
        <Home api=api auth_mode=config.auth_mode/>
    }
}
