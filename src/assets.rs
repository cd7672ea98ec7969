//! Bundled CSS and script assets

use maud::{Markup, PreEscaped, html};

const BASE: &str = include_str!("../assets/base.css");
const VIEWER: &str = include_str!("../assets/viewer.css");
const MARKDOWN: &str = include_str!("../assets/markdown.css");
const SCRIPT: &str = include_str!("../assets/viewer.js");

/// URL path under which the server exposes assets.
pub const ASSET_PREFIX: &str = "/assets/";

const STYLESHEETS: [&str; 2] = ["viewer.css", "markdown.css"];
const SCRIPT_NAME: &str = "viewer.js";

/// How a page pulls in its assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetMode {
    /// `<link>`/`<script src>` pointing at [`ASSET_PREFIX`], for the server.
    Linked,
    /// Contents embedded in the page, for standalone documents.
    Inline,
}

/// A servable asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub content_type: &'static str,
    pub body: String,
}

/// Returns the bundled asset called `name`, if any.
pub fn lookup(name: &str) -> Option<Asset> {
    let (content_type, body) = match name {
        "viewer.css" => ("text/css; charset=utf-8", bundle(&[BASE, VIEWER])),
        "markdown.css" => ("text/css; charset=utf-8", MARKDOWN.to_string()),
        "viewer.js" => ("text/javascript; charset=utf-8", SCRIPT.to_string()),
        _ => return None,
    };
    Some(Asset { content_type, body })
}

/// Stylesheet tags for the page head.
pub fn stylesheets(mode: AssetMode) -> Markup {
    match mode {
        AssetMode::Linked => html! {
            @for name in STYLESHEETS {
                link rel="stylesheet" href=(format!("{}{}", ASSET_PREFIX, name));
            }
        },
        AssetMode::Inline => html! {
            style { (PreEscaped(bundle(&[BASE, VIEWER, MARKDOWN]))) }
        },
    }
}

/// Script tag driving the form and copy button.
pub fn script(mode: AssetMode) -> Markup {
    match mode {
        AssetMode::Linked => html! {
            script src=(format!("{}{}", ASSET_PREFIX, SCRIPT_NAME)) {}
        },
        AssetMode::Inline => html! {
            script { (PreEscaped(SCRIPT)) }
        },
    }
}

fn bundle(parts: &[&str]) -> String {
    parts.join("\n")
}
