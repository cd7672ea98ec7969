//! Query parameters of the viewer page.

use serde::Deserialize;

/// Presentation of the viewer page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Input form, share link, and content.
    #[default]
    Edit,
    /// Content only.
    Share,
}

/// Recognized query parameters.
///
/// `gist` and `gistId` carry the reference; `view=share` or `share=true`
/// switch to [`ViewMode::Share`]. Unknown parameters are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViewQuery {
    pub gist: Option<String>,
    #[serde(rename = "gistId")]
    pub gist_id: Option<String>,
    pub view: Option<String>,
    pub share: Option<String>,
}

impl ViewQuery {
    pub fn mode(&self) -> ViewMode {
        if self.view.as_deref() == Some("share") || self.share.as_deref() == Some("true") {
            ViewMode::Share
        } else {
            ViewMode::Edit
        }
    }

    /// Reference to load, preferring `gist` over `gistId`.
    ///
    /// Blank values count as absent. The value is returned as given so the
    /// share link reproduces it; callers trim before resolving.
    pub fn reference(&self) -> Option<&str> {
        [self.gist.as_deref(), self.gist_id.as_deref()]
            .into_iter()
            .flatten()
            .find(|value| !value.trim().is_empty())
    }
}
