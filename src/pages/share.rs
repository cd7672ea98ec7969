//! Share page: rendered content only

use maud::{Markup, html};

use crate::assets::AssetMode;
use crate::components::layout::page_wrapper;
use crate::components::viewer::{error_message, loading_indicator, markdown_content};
use crate::pages::meta::PageMeta;
use crate::view::ViewState;

/// Generates the read-only page for `state`.
///
/// Shows the loading placeholder, the error, or the content; never the
/// input form or share link.
pub fn generate(state: &ViewState, assets: AssetMode) -> Markup {
    page_wrapper(
        &PageMeta::for_view(state),
        assets,
        false,
        html! {
            div class="share-page" {
                @if state.is_loading() {
                    (loading_indicator(true))
                }
                @if let Some(error) = state.error() {
                    (error_message(error))
                }
                @if let Some(rendered) = state.content().filter(|_| !state.is_loading()) {
                    (markdown_content(&rendered.html, "markdown-share-mode"))
                }
            }
        },
    )
}
