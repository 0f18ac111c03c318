//! Portfolio - Frontend Rust/Leptos Application
//!
//! A WebAssembly portfolio page whose footer links out to social
//! profiles, credits the tools the site is built with, and points at
//! its own source code.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Hero (title, description)                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! │  ├── SocialRow (one IconButton per SocialAccount)           │
//! │  ├── Attribution (inline external links)                    │
//! │  └── SourceCodeLink                                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Site constants, social accounts and attribution links
//! - [`types`] - Common types (Glyph, SocialAccount, AppError)
//! - [`components`] - UI components (Hero, Footer, ExternalLink, ...)
//! - [`validation`] - Startup checks for the hardcoded links

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{AppError, AppResult, AttributionLink, Glyph, SocialAccount};

// Components
pub use components::*;

// Validation
pub use validation::{validate_account, validate_footer, validate_link};

// =============================================================================
// Application
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=SITE_TITLE/>
        <Meta name="description" content=SITE_DESCRIPTION/>

        <Router>
            <main class="container">
                <Routes>
                    <Route path="/" view=Hero/>
                </Routes>
            </main>

            <Footer max_width=MAX_WIDTH/>
        </Router>
    }
}
