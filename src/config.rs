//! Command line configuration.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use reqwest::Url;
use std::path::PathBuf;

use crate::gist::{DEFAULT_API_BASE, GistClient};

/// Share-link origin when neither a site URL nor a request is available.
pub const DEFAULT_SITE_URL: &str = "http://127.0.0.1:8080/";

/// Command line configuration for gistview.
#[derive(Debug, Clone, Parser)]
#[command(name = "gistview", version, about, long_about = None)]
pub struct Config {
    /// Gist API root
    #[arg(long, global = true, env = "GISTVIEW_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// GitHub token for authenticated API requests
    #[arg(long, global = true, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Public URL of the viewer page, used to build share links
    #[arg(long, global = true, env = "GISTVIEW_SITE_URL")]
    pub site_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Serve the viewer over HTTP
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:8080")]
        bind: String,

        /// Open the viewer in a browser once listening
        #[arg(long)]
        open: bool,
    },

    /// Render a Gist to a standalone HTML document
    Render {
        /// Gist URL, ID, or raw-content URL
        reference: String,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Render the read-only share presentation
        #[arg(long)]
        share: bool,
    },

    /// Print Gist metadata and the file that would be rendered
    Info {
        /// Gist URL, ID, or raw-content URL
        reference: String,
    },
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the API base or site URL is not an http(s) URL.
    pub fn validate(&self) -> Result<()> {
        require_http_url("API base", &self.api_base)?;
        if let Some(site_url) = &self.site_url {
            require_http_url("Site URL", site_url)?;
        }
        Ok(())
    }

    /// Builds the Gist API client from the configured base and token.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be constructed.
    pub fn client(&self) -> Result<GistClient> {
        GistClient::new(&self.api_base, self.token.as_deref())
            .context("Failed to build HTTP client")
    }

    /// Share-link base for contexts without a request.
    pub fn share_base(&self) -> &str {
        self.site_url.as_deref().unwrap_or(DEFAULT_SITE_URL)
    }
}

fn require_http_url(what: &str, value: &str) -> Result<()> {
    let url = Url::parse(value).with_context(|| format!("{} is not a valid URL: {}", what, value))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!("{} must use http or https: {}", what, value);
    }
    Ok(())
}
