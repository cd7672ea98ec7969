//! Choice of the file to render from a multi-file Gist.

use crate::error::ViewerError;
use crate::gist::GistFile;

/// Filename suffixes treated as Markdown. Matching is case-sensitive.
pub const MARKDOWN_SUFFIXES: [&str; 2] = [".md", ".markdown"];

/// Returns true when `filename` ends with a Markdown suffix.
pub fn is_markdown(filename: &str) -> bool {
    MARKDOWN_SUFFIXES
        .iter()
        .any(|suffix| filename.ends_with(suffix))
}

/// Picks the first Markdown file, or the first file when none is Markdown.
///
/// # Errors
///
/// Returns [`ViewerError::GistNotFound`] for an empty file list.
pub fn select_file(files: &[GistFile]) -> Result<&GistFile, ViewerError> {
    files
        .iter()
        .find(|file| is_markdown(&file.filename))
        .or_else(|| files.first())
        .ok_or(ViewerError::GistNotFound)
}
