//! Footer component
//!
//! Three stacked blocks: the social icon row, the attribution sentence and
//! the source code button.

use leptos::*;

use crate::components::{ExternalLink, IconButton};
use crate::config::{ATTRIBUTION_LINKS, SOCIAL_ACCOUNTS, SOURCE_CODE_LABEL, SOURCE_CODE_URL};
use crate::types::{Glyph, SocialAccount};

#[component]
pub fn Footer(
    /// CSS length bounding the footer content, usually [`crate::MAX_WIDTH`].
    #[prop(into)]
    max_width: String,
    #[prop(default = SOCIAL_ACCOUNTS)] accounts: &'static [SocialAccount],
    #[prop(default = SOURCE_CODE_URL)] source_url: &'static str,
) -> impl IntoView {
    log::debug!("Building footer with {} social accounts", accounts.len());

    view! {
        <footer class="footer">
            <div class="footer-inner" style=format!("max-width: {max_width}")>
                <SocialRow accounts=accounts/>
                <Attribution/>
                <SourceCodeLink href=source_url/>
            </div>
        </footer>
    }
}

/// One icon button per account, in declaration order.
#[component]
pub fn SocialRow(accounts: &'static [SocialAccount]) -> impl IntoView {
    view! {
        <div class="footer-block social-row">
            {accounts
                .iter()
                .map(|account| {
                    view! {
                        <ExternalLink href=account.path label=account.title>
                            <IconButton glyph=account.icon label=account.title/>
                        </ExternalLink>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn Attribution() -> impl IntoView {
    let [framework, ui_library, host] = ATTRIBUTION_LINKS;

    view! {
        <div class="footer-block">
            <p>
                "Built with "
                <span role="img" aria-label="red heart">"❤️"</span>
                ", "
                <ExternalLink href=framework.href class="attribution-link">
                    {framework.label}
                </ExternalLink>
                ", "
                <ExternalLink href=ui_library.href class="attribution-link">
                    {ui_library.label}
                </ExternalLink>
                ", Hosted in "
                <ExternalLink href=host.href class="attribution-link">
                    {host.label}
                </ExternalLink>
            </p>
        </div>
    }
}

#[component]
pub fn SourceCodeLink(href: &'static str) -> impl IntoView {
    view! {
        <div class="footer-block">
            <ExternalLink href=href label=SOURCE_CODE_LABEL class="source-code-link">
                <IconButton glyph=Glyph::Code label=SOURCE_CODE_LABEL/>
            </ExternalLink>
        </div>
    }
}
