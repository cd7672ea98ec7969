//! Gist reference resolution.
//!
//! Turns free-form input (a Gist page URL, a bare hex ID, or a raw-content
//! URL) into something the pipeline can fetch. Resolution is pure: no
//! network access happens here.

use regex::Regex;
use reqwest::Url;
use std::sync::LazyLock;

use crate::error::ViewerError;

/// Host of Gist pages, e.g. `https://gist.github.com/alice/deadbeef`.
pub const GIST_HOST: &str = "gist.github.com";

/// Host serving raw file content.
pub const RAW_HOST: &str = "gist.githubusercontent.com";

static GIST_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"gist\.github\.com/([^/]+)/([a-f0-9]+)").expect("static regex is valid")
});

static BARE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-f0-9]+$").expect("static regex is valid"));

/// What a user-supplied reference points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GistReference {
    /// Gist identifier; files are discovered through the metadata API.
    GistId(String),
    /// Raw-content URL fetched directly, skipping metadata lookup.
    RawUrl(String),
}

impl GistReference {
    /// Returns the Gist ID when this reference carries one.
    pub fn gist_id(&self) -> Option<&str> {
        match self {
            GistReference::GistId(id) => Some(id),
            GistReference::RawUrl(_) => None,
        }
    }
}

/// Resolves a free-form reference.
///
/// Rules, in order:
///
/// 1. Input containing [`GIST_HOST`] must carry an `/owner/hexid` path; the
///    owner is discarded and `hexid` becomes the ID. A recognized host with a
///    malformed path does not fall through to the other rules.
/// 2. A purely hexadecimal string (any case) is taken as the ID itself.
/// 3. An http(s) URL on [`RAW_HOST`] is kept as a raw-content URL.
///
/// # Errors
///
/// Returns [`ViewerError::InvalidReference`] when no rule applies.
///
/// # Examples
///
/// ```
/// use gistview::{GistReference, resolve};
///
/// let reference = resolve("https://gist.github.com/alice/deadbeef")?;
/// assert_eq!(reference, GistReference::GistId("deadbeef".to_string()));
/// # Ok::<(), gistview::ViewerError>(())
/// ```
pub fn resolve(input: &str) -> Result<GistReference, ViewerError> {
    if input.contains(GIST_HOST) {
        return GIST_PATH
            .captures(input)
            .and_then(|caps| caps.get(2))
            .map(|id| GistReference::GistId(id.as_str().to_string()))
            .ok_or(ViewerError::InvalidReference);
    }

    if BARE_ID.is_match(input) {
        return Ok(GistReference::GistId(input.to_string()));
    }

    if input.contains(RAW_HOST)
        && let Ok(url) = Url::parse(input)
        && matches!(url.scheme(), "http" | "https")
        && url.host_str() == Some(RAW_HOST)
    {
        return Ok(GistReference::RawUrl(url.to_string()));
    }

    Err(ViewerError::InvalidReference)
}
