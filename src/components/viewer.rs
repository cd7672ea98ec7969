//! Building blocks of the viewer page

use maud::{Markup, html};

use crate::sanitize::SanitizedHtml;

/// Delay before the copy button reverts from its acknowledgment.
pub const COPY_ACK_MS: u64 = 2000;

const LOADING_LABEL: &str = "Loading...";

/// Spinner with a loading label.
///
/// Rendered hidden on pages that are not loading so the form script can
/// reveal it on submit.
pub fn loading_indicator(visible: bool) -> Markup {
    html! {
        div id="loading" class="loading" hidden[!visible] {
            div class="spinner" {}
            p { (LOADING_LABEL) }
        }
    }
}

/// Inline error message.
pub fn error_message(message: &str) -> Markup {
    html! {
        div class="error-message" role="alert" { (message) }
    }
}

/// Reference entry form.
///
/// Submits as a plain `GET` with the `gist` parameter so that every load,
/// whether typed or linked, goes through the same query handling.
///
/// # Arguments
///
/// * `input`: Value to prefill
/// * `loading`: Disable the submit button and show the loading label
pub fn gist_form(input: &str, loading: bool) -> Markup {
    html! {
        form id="gist-form" class="gist-form" method="get" action="" {
            input
                id="gist-input"
                class="gist-input"
                type="text"
                name="gist"
                value=(input)
                placeholder="Enter a Gist URL or ID (e.g. https://gist.github.com/username/abc123 or abc123)";
            button
                id="gist-submit"
                class="button"
                type="submit"
                data-loading-label=(LOADING_LABEL)
                disabled[loading] {
                @if loading { (LOADING_LABEL) } @else { "View" }
            }
        }
    }
}

/// Read-only share link with a copy button.
pub fn share_link_box(url: &str) -> Markup {
    html! {
        div class="share-box" {
            p class="share-label" { "Share link:" }
            div class="share-row" {
                input id="share-url" class="share-input" type="text" value=(url) readonly;
                button
                    id="copy-share-url"
                    class="button"
                    type="button"
                    data-ack-ms=(COPY_ACK_MS)
                    data-copied-label="Copied!" {
                    "Copy"
                }
            }
        }
    }
}

/// Rendered Gist content.
///
/// Only [`SanitizedHtml`] is accepted here.
pub fn markdown_content(html: &SanitizedHtml, extra_class: &str) -> Markup {
    html! {
        div class=(format!("markdown-content {}", extra_class)) {
            (html)
        }
    }
}

/// Hint shown before anything has been loaded.
pub fn empty_hint() -> Markup {
    html! {
        div class="empty-state" {
            p { "Enter a Gist URL or ID to display its Markdown" }
            p {
                "Example: "
                code { "?gist=https://gist.github.com/username/abc123" }
            }
        }
    }
}
