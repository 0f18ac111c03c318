//! Links that leave the site.

use leptos::*;

use crate::config::{EXTERNAL_LINK_REL, EXTERNAL_LINK_TARGET};

/// Anchor opening `href` in a new browsing context, without handing the
/// destination a reference back to this window.
#[component]
pub fn ExternalLink(
    #[prop(into)] href: String,
    /// Accessible label, for links whose content isn't text.
    #[prop(optional, into)]
    label: Option<String>,
    #[prop(optional)] class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <a
            href=href
            aria-label=label
            class=class
            target=EXTERNAL_LINK_TARGET
            rel=EXTERNAL_LINK_REL
        >
            {children()}
        </a>
    }
}
