//! Error kinds surfaced to viewers.
//!
//! Each variant's `Display` text is the message shown inline on the page.
//! Plumbing errors (CLI, server startup, file output) use `anyhow` instead.

use thiserror::Error;

/// Failure of one resolve, fetch, select, render run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewerError {
    /// Input is neither a Gist URL, a hex ID, nor a raw-content URL.
    #[error("Invalid Gist URL or ID")]
    InvalidReference,

    /// API answered 404, or the Gist has no files.
    #[error("Gist not found")]
    GistNotFound,

    /// Metadata request failed for any reason other than 404.
    #[error("Failed to fetch Gist metadata: {0}")]
    MetadataFailed(String),

    /// Raw content request failed.
    #[error("Failed to fetch the Markdown file: {0}")]
    FetchFailed(String),
}
