//! Markdown rendering with GitHub Flavored Markdown support.
//!
//! This module provides markdown rendering using comrak with GFM extensions
//! (tables, strikethrough, autolinks, task lists) and syntect highlighting
//! for fenced code blocks.

mod renderer;

pub use renderer::MarkdownRenderer;
