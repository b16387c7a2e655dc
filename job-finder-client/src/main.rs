use job_finder_client::{config::ClientConfig, App, AppProps};
use leptos::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = match ClientConfig::from_build_env() {
        Ok(inner) => inner,
        Err(error) => {
            web_sys::console::error_1(&format!("Invalid build configuration. {error}").into());
            ClientConfig::default()
        }
    };
    if let Err(error) = console_log::init_with_level(config.log_level) {
        web_sys::console::error_1(&format!("Could not start logging. {error}").into());
    }
    log::info!(
        "Starting job finder against {} ({:?})",
        config.api_url,
        config.auth_mode
    );

    mount_to_body(move |cx| view! { cx, <App config=config/> })
}
