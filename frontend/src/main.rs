//! Entry point for the WASM application

use leptos::*;
use portfolio::{validate_footer, App, SOCIAL_ACCOUNTS, SOURCE_CODE_URL};

pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Starting portfolio");

    match validate_footer(SOCIAL_ACCOUNTS, SOURCE_CODE_URL) {
        Ok(()) => log::info!("Footer links checked: {} social accounts", SOCIAL_ACCOUNTS.len()),
        Err(e) => log::error!("Footer link check failed: {}", e),
    }

    mount_to_body(|| view! { <App/> })
}
