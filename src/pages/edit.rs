//! Edit page: input form, share link, and rendered content

use maud::{Markup, html};

use crate::assets::AssetMode;
use crate::components::layout::page_wrapper;
use crate::components::viewer::{
    empty_hint, error_message, gist_form, loading_indicator, markdown_content, share_link_box,
};
use crate::pages::meta::{DEFAULT_TITLE, PageMeta};
use crate::view::ViewState;

/// Generates the edit page for `state`.
///
/// Sections appear in order: header with form, error, loading indicator,
/// share link, content. The share link and content are left out while
/// loading; the empty-state hint shows only for an idle view.
pub fn generate(state: &ViewState, assets: AssetMode) -> Markup {
    let loading = state.is_loading();

    page_wrapper(
        &PageMeta::for_view(state),
        assets,
        true,
        html! {
            div class="container" {
                header {
                    h1 class="viewer-title" { (DEFAULT_TITLE) }
                    p class="viewer-lead" { "Render Markdown from GitHub Gist, ready to share" }
                    (gist_form(state.input(), loading))
                }

                @if let Some(error) = state.error() {
                    (error_message(error))
                }

                (loading_indicator(loading))

                @if !loading {
                    @if let Some(url) = state.share_url() {
                        (share_link_box(url))
                    }
                    @if let Some(rendered) = state.content() {
                        (markdown_content(&rendered.html, "prose"))
                    }
                }

                @if state.is_idle() {
                    (empty_hint())
                }
            }
        },
    )
}
