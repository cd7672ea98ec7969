//! Viewer that renders GitHub Gist Markdown as sanitized HTML.

pub mod assets;
pub mod components;
mod config;
mod error;
mod gist;
mod highlight;
mod markdown;
pub mod pages;
mod pipeline;
mod reference;
mod sanitize;
mod select;
pub mod server;
pub mod view;

pub use assets::AssetMode;
pub use config::{Command, Config, DEFAULT_SITE_URL};
pub use error::ViewerError;
pub use gist::{DEFAULT_API_BASE, GistClient, GistFile, GistSummary, UNKNOWN_OWNER};
pub use highlight::CodeHighlighter;
pub use markdown::MarkdownRenderer;
pub use pipeline::{Rendered, Viewer};
pub use reference::{GIST_HOST, GistReference, RAW_HOST, resolve};
pub use sanitize::{
    ALLOWED_ATTRIBUTES, ALLOWED_TAGS, ALLOWED_URL_SCHEMES, SanitizedHtml, Sanitizer,
};
pub use select::{is_markdown, select_file};
pub use view::{ViewMode, ViewQuery, ViewState, share_url};
