//! Landing section component

use leptos::*;

use crate::config::{SITE_DESCRIPTION, SITE_TITLE};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>{SITE_TITLE}</h1>
            <p class="subtitle">{SITE_DESCRIPTION}</p>
        </div>
    }
}
