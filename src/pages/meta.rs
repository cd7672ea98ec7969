//! Document title and social preview metadata

use crate::view::{ViewMode, ViewState};

pub const DEFAULT_TITLE: &str = "Markdown Share Viewer";
pub const DEFAULT_DESCRIPTION: &str = "A viewer that renders Markdown from GitHub Gist";

const FALLBACK_DOCUMENT_TITLE: &str = "Markdown Document";

/// Head metadata of a page.
///
/// `url` is set only for share pages with loaded content; it enables the
/// OpenGraph and Twitter card tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub url: Option<String>,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            url: None,
        }
    }
}

impl PageMeta {
    /// Derives metadata from a view.
    ///
    /// Share pages with content are titled by the Gist description, else the
    /// rendered filename, else a generic document title. Everything else
    /// gets the viewer defaults.
    pub fn for_view(state: &ViewState) -> Self {
        let Some(rendered) = state.content().filter(|_| state.mode() == ViewMode::Share) else {
            return Self::default();
        };

        let title = [
            Some(rendered.description.as_str()),
            rendered.file.as_ref().map(|f| f.filename.as_str()),
        ]
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())
        .unwrap_or(FALLBACK_DOCUMENT_TITLE)
        .to_string();

        let description = if rendered.description.is_empty() {
            format!("{} - Markdown document from GitHub Gist", title)
        } else {
            rendered.description.clone()
        };

        Self {
            title,
            description,
            url: state.share_url().map(String::from),
        }
    }
}
