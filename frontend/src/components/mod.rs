//! UI Components for the portfolio.
//!
//! # Layout Components
//! - [`Hero`] - Landing title and description
//! - [`Footer`] - Page footer with social links and attribution
//!
//! # Building Blocks
//! - [`ExternalLink`] - Anchor that opens a new browsing context
//! - [`IconButton`] - Button rendering a single [`crate::Glyph`]

mod external_link;
mod footer;
mod hero;
mod icon_button;

pub use external_link::*;
pub use footer::*;
pub use hero::*;
pub use icon_button::*;
