//! Square button holding a single glyph.

use leptos::*;
use leptos_icons::Icon;

use crate::config::GLYPH_SIZE;
use crate::types::Glyph;

#[component]
pub fn IconButton(glyph: Glyph, #[prop(into)] label: String) -> impl IntoView {
    view! {
        <button
            type="button"
            class=format!("icon-button icon-{}", glyph.name())
            aria-label=label
        >
            <Icon icon=glyph.icon() width=GLYPH_SIZE height=GLYPH_SIZE/>
        </button>
    }
}
