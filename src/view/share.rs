//! Shareable read-only links.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters `encodeURIComponent` leaves alone, removed from the escape set.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes `value` for use as one query component.
pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Builds the share-mode link for `input`.
///
/// The original input is kept verbatim (URL or ID alike), so opening the
/// link resolves exactly what the submitter resolved.
///
/// # Arguments
///
/// * `base`: Origin and path of the viewer page, e.g. `https://host/viewer`
/// * `input`: Reference as the user entered it
pub fn share_url(base: &str, input: &str) -> String {
    format!("{}?gist={}&view=share", base, encode_uri_component(input))
}
