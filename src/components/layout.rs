//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

use crate::assets::{self, AssetMode};
use crate::pages::meta::PageMeta;

/// Wraps page content with standard HTML structure
///
/// Provides DOCTYPE, charset, viewport, title, social meta tags, and
/// stylesheets. The caller provides the body content.
///
/// # Arguments
///
/// * `page`: Title, description, and optional share link of the page
/// * `mode`: Whether assets are linked or embedded
/// * `with_script`: Include the form and copy-button script
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(page: &PageMeta, mode: AssetMode, with_script: bool, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (page.title) }
                meta name="description" content=(page.description);
                @if let Some(url) = &page.url {
                    meta property="og:title" content=(page.title);
                    meta property="og:description" content=(page.description);
                    meta property="og:url" content=(url);
                    meta property="og:type" content="website";
                    meta name="twitter:card" content="summary";
                    meta name="twitter:title" content=(page.title);
                    meta name="twitter:description" content=(page.description);
                }
                (assets::stylesheets(mode))
            }
            body {
                (body)
                @if with_script {
                    (assets::script(mode))
                }
            }
        }
    }
}
