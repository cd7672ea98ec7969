//! The resolve, fetch, select, render, sanitize chain.

use crate::error::ViewerError;
use crate::gist::{GistClient, GistFile, UNKNOWN_OWNER};
use crate::markdown::MarkdownRenderer;
use crate::reference::{GistReference, resolve};
use crate::sanitize::{SanitizedHtml, Sanitizer};
use crate::select::select_file;

/// Successful pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub html: SanitizedHtml,
    /// File that was rendered; unknown for raw-content URLs.
    pub file: Option<GistFile>,
    pub description: String,
    pub owner: String,
}

/// Runs the whole pipeline for one reference at a time.
///
/// Owns the rendering configuration, built once in [`Viewer::new`] and only
/// read afterwards. Network calls run sequentially.
pub struct Viewer {
    client: GistClient,
    renderer: MarkdownRenderer<'static>,
    sanitizer: Sanitizer,
}

impl Viewer {
    pub fn new(client: GistClient) -> Self {
        Self {
            client,
            renderer: MarkdownRenderer::new(),
            sanitizer: Sanitizer::new(),
        }
    }

    pub fn client(&self) -> &GistClient {
        &self.client
    }

    /// Loads and renders the Gist that `input` refers to.
    ///
    /// # Errors
    ///
    /// * [`ViewerError::InvalidReference`] before any network call
    /// * [`ViewerError::GistNotFound`] for a missing or empty Gist
    /// * [`ViewerError::MetadataFailed`] / [`ViewerError::FetchFailed`] on
    ///   failed requests
    pub async fn load(&self, input: &str) -> Result<Rendered, ViewerError> {
        let reference = resolve(input)?;

        let (raw_url, file, description, owner) = match reference {
            GistReference::GistId(id) => {
                let summary = self.client.fetch_summary(&id).await?;
                let file = select_file(&summary.files)?.clone();
                tracing::info!(gist = %id, file = %file.filename, "rendering gist file");
                (
                    file.raw_url.clone(),
                    Some(file),
                    summary.description,
                    summary.owner,
                )
            }
            GistReference::RawUrl(url) => {
                tracing::info!(%url, "rendering raw gist content");
                (url, None, String::new(), UNKNOWN_OWNER.to_string())
            }
        };

        let markdown = self.client.fetch_raw(&raw_url).await?;

        Ok(Rendered {
            html: self.render_markdown(&markdown),
            file,
            description,
            owner,
        })
    }

    /// Converts Markdown to display-ready HTML.
    pub fn render_markdown(&self, markdown: &str) -> SanitizedHtml {
        let html = self.renderer.render(markdown);
        self.sanitizer.clean(&html)
    }
}
