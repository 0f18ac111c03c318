//! Startup checks for the footer's hardcoded links.
//!
//! Every link the footer renders must point at an absolute `http` or
//! `https` URL and carry a non-blank label, since the label is what
//! assistive technology announces.
//!
//! # Example
//!
//! ```rust,ignore
//! use portfolio::{validate_footer, SOCIAL_ACCOUNTS, SOURCE_CODE_URL};
//!
//! assert!(validate_footer(SOCIAL_ACCOUNTS, SOURCE_CODE_URL).is_ok());
//! ```

use url::Url;

use crate::config::{ATTRIBUTION_LINKS, SOURCE_CODE_LABEL};
use crate::types::{AppError, AppResult, SocialAccount};

/// Checks a single labelled link.
///
/// # Returns
/// * `Ok(())` if `label` is non-blank and `href` is an absolute http(s) URL
/// * `Err(AppError)` describing the first problem found
pub fn validate_link(label: &str, href: &str) -> AppResult<()> {
    if label.trim().is_empty() {
        return Err(AppError::MissingTitle {
            path: href.to_string(),
        });
    }

    let url = Url::parse(href).map_err(|e| AppError::InvalidUrl {
        url: href.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" if url.host_str().is_some() => Ok(()),
        _ => Err(AppError::NotAbsolute {
            url: href.to_string(),
        }),
    }
}

/// Checks a social account entry.
pub fn validate_account(account: &SocialAccount) -> AppResult<()> {
    validate_link(account.title, account.path)
}

/// Checks every link the footer renders: the social accounts, the
/// attribution links and the source code link.
///
/// Stops at the first invalid link.
pub fn validate_footer(accounts: &[SocialAccount], source_url: &str) -> AppResult<()> {
    for account in accounts {
        validate_account(account)?;
    }
    for link in &ATTRIBUTION_LINKS {
        validate_link(link.label, link.href)?;
    }
    validate_link(SOURCE_CODE_LABEL, source_url)
}
