//! Common types used across the portfolio frontend.
//!
//! # Categories
//!
//! - **Glyph Types** - Closed set of icons the footer can draw
//! - **Link Types** - Social accounts and attribution links
//! - **Error Types** - Link validation errors

use thiserror::Error;

// =============================================================================
// Glyph Types
// =============================================================================

/// Icon drawn inside a footer button.
///
/// Every variant maps onto a Font Awesome glyph from `icondata`, so an
/// unknown icon can't be referenced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// GitHub mark
    Github,
    /// LinkedIn mark
    Linkedin,
    /// Instagram mark
    Instagram,
    /// `</>` code brackets
    Code,
}

impl Glyph {
    /// Icon data handed to `leptos_icons`.
    pub fn icon(self) -> icondata_core::Icon {
        match self {
            Glyph::Github => icondata::FaGithubBrands,
            Glyph::Linkedin => icondata::FaLinkedinBrands,
            Glyph::Instagram => icondata::FaInstagramBrands,
            Glyph::Code => icondata::FaCodeSolid,
        }
    }

    /// Stable lowercase name, used as a CSS hook.
    pub fn name(self) -> &'static str {
        match self {
            Glyph::Github => "github",
            Glyph::Linkedin => "linkedin",
            Glyph::Instagram => "instagram",
            Glyph::Code => "code",
        }
    }
}

// =============================================================================
// Link Types
// =============================================================================

/// A social profile shown as an icon button in the footer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialAccount {
    /// Glyph drawn in the button
    pub icon: Glyph,
    /// Absolute URL of the profile
    pub path: &'static str,
    /// Accessible label of the link and button
    pub title: &'static str,
}

/// An inline link in the attribution sentence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttributionLink {
    /// Visible link text
    pub label: &'static str,
    /// Absolute URL
    pub href: &'static str,
}

// =============================================================================
// Error Types
// =============================================================================

/// Errors raised while checking the footer's hardcoded links.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    /// A link label is empty or whitespace.
    #[error("Missing title for link to {path}")]
    MissingTitle { path: String },

    /// The URL could not be parsed.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The URL parsed but isn't an absolute http(s) URL with a host.
    #[error("URL is not an absolute http(s) URL: {url}")]
    NotAbsolute { url: String },
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
