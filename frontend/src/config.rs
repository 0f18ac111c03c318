//! Application configuration.
//!
//! Centralized, compile-time configuration for the portfolio frontend.
//! Feel free to add your own social media accounts to [`SOCIAL_ACCOUNTS`].

use crate::types::{AttributionLink, Glyph, SocialAccount};

/// Site title shown in the browser tab.
pub const SITE_TITLE: &str = "Portfolio";

/// Meta description of the site.
pub const SITE_DESCRIPTION: &str = "Personal portfolio";

/// Maximum width of the page content.
///
/// Applied as a CSS `max-width`, so any CSS length works.
pub const MAX_WIDTH: &str = "1280px";

/// Width and height of footer glyphs.
pub const GLYPH_SIZE: &str = "1.5rem";

/// Repository of this project.
pub const SOURCE_CODE_URL: &str = "https://github.com/imadatyatalah/portfolio-boilerplate-nextjs";

/// Accessible label of the source code link.
pub const SOURCE_CODE_LABEL: &str = "source code";

/// `target` of every external link.
pub const EXTERNAL_LINK_TARGET: &str = "_blank";

/// `rel` of every external link. Keeps the opened page from reaching
/// back into `window.opener`.
pub const EXTERNAL_LINK_REL: &str = "noopener noreferrer";

/// Social profiles, left to right.
pub const SOCIAL_ACCOUNTS: &[SocialAccount] = &[
    SocialAccount {
        icon: Glyph::Github,
        path: "https://github.com/",
        title: "Github",
    },
    SocialAccount {
        icon: Glyph::Linkedin,
        path: "https://www.linkedin.com/",
        title: "Linkedin",
    },
    SocialAccount {
        icon: Glyph::Instagram,
        path: "https://www.instagram.com/",
        title: "Instagram",
    },
];

/// Links embedded in the attribution sentence, in reading order.
pub const ATTRIBUTION_LINKS: [AttributionLink; 3] = [
    AttributionLink {
        label: "Next.js",
        href: "https://nextjs.org/",
    },
    AttributionLink {
        label: "Chakra UI",
        href: "https://chakra-ui.com/",
    },
    AttributionLink {
        label: "Vercel.",
        href: "http://vercel.com/",
    },
];
