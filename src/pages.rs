//! Page generation for the two viewer presentations
//!
//! The edit page carries the input form and share link; the share page shows
//! only the rendered content. Both are built from a [`ViewState`].

pub mod edit;
pub mod meta;
pub mod share;

use maud::Markup;

use crate::assets::AssetMode;
use crate::view::{ViewMode, ViewState};

/// Renders the page matching the view's mode.
pub fn render(state: &ViewState, assets: AssetMode) -> Markup {
    match state.mode() {
        ViewMode::Edit => edit::generate(state, assets),
        ViewMode::Share => share::generate(state, assets),
    }
}
