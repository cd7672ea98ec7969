//! Allow-list HTML sanitization.
//!
//! [`SanitizedHtml`] can only be produced by [`Sanitizer::clean`], so any
//! HTML that reaches a page through that type has passed the allow-lists.

use ammonia::{Builder, UrlRelative};
use maud::Render;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Elements kept in rendered content. Everything else is stripped.
pub const ALLOWED_TAGS: [&str; 28] = [
    "p",
    "br",
    "strong",
    "em",
    "u",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "ul",
    "ol",
    "li",
    "blockquote",
    "code",
    "pre",
    "a",
    "img",
    "table",
    "thead",
    "tbody",
    "tr",
    "th",
    "td",
    "hr",
    "div",
    "span",
];

/// Attributes kept on any allowed element.
pub const ALLOWED_ATTRIBUTES: [&str; 6] = ["href", "src", "alt", "title", "class", "id"];

/// URL schemes accepted in `href` and `src`. Relative URLs always pass.
pub const ALLOWED_URL_SCHEMES: [&str; 9] = [
    "http", "https", "mailto", "tel", "callto", "sms", "cid", "xmpp", "data",
];

/// Elements removed together with their content.
const CLEAN_CONTENT_TAGS: [&str; 2] = ["script", "style"];

/// HTML that went through the sanitizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedHtml(String);

impl SanitizedHtml {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SanitizedHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Embeds the HTML verbatim in maud templates.
impl Render for SanitizedHtml {
    fn render_to(&self, buffer: &mut String) {
        buffer.push_str(&self.0);
    }
}

/// Allow-list sanitizer built once and reused.
pub struct Sanitizer {
    builder: Builder<'static>,
}

impl Sanitizer {
    /// Creates sanitizer with the content allow-lists.
    ///
    /// No per-tag attributes beyond [`ALLOWED_ATTRIBUTES`] and no injected
    /// `rel` on links, so output of the sanitizer is a fixed point.
    pub fn new() -> Self {
        let mut builder = Builder::default();
        builder
            .tags(ALLOWED_TAGS.into_iter().collect::<HashSet<_>>())
            .clean_content_tags(CLEAN_CONTENT_TAGS.into_iter().collect::<HashSet<_>>())
            .tag_attributes(HashMap::new())
            .generic_attributes(ALLOWED_ATTRIBUTES.into_iter().collect::<HashSet<_>>())
            .url_schemes(ALLOWED_URL_SCHEMES.into_iter().collect::<HashSet<_>>())
            .url_relative(UrlRelative::PassThrough)
            .link_rel(None)
            .strip_comments(true);

        Self { builder }
    }

    /// Strips everything outside the allow-lists from `html`.
    pub fn clean(&self, html: &str) -> SanitizedHtml {
        SanitizedHtml(self.builder.clean(html).to_string())
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new()
    }
}
