//! Gist metadata and raw content retrieval.

use indexmap::IndexMap;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::error::ViewerError;

/// Public GitHub REST API root.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Owner reported when the API omits one or the lookup failed.
pub const UNKNOWN_OWNER: &str = "unknown";

const USER_AGENT: &str = concat!("gistview/", env!("CARGO_PKG_VERSION"));

/// One file of a Gist.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GistFile {
    pub filename: String,
    pub raw_url: String,
}

/// File list and descriptive fields of a Gist, in API order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GistSummary {
    pub files: Vec<GistFile>,
    pub description: String,
    pub owner: String,
}

impl GistSummary {
    /// Summary standing in for a failed lookup.
    pub fn empty() -> Self {
        Self {
            files: Vec::new(),
            description: String::new(),
            owner: UNKNOWN_OWNER.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiGist {
    #[serde(default)]
    files: IndexMap<String, GistFile>,
    description: Option<String>,
    owner: Option<ApiOwner>,
}

#[derive(Debug, Deserialize)]
struct ApiOwner {
    login: Option<String>,
}

impl From<ApiGist> for GistSummary {
    fn from(gist: ApiGist) -> Self {
        Self {
            files: gist.files.into_values().collect(),
            description: gist.description.unwrap_or_default(),
            owner: gist
                .owner
                .and_then(|owner| owner.login)
                .unwrap_or_else(|| UNKNOWN_OWNER.to_string()),
        }
    }
}

/// HTTP access to the Gist API and raw file host.
///
/// Holds a single connection-pooling client. Timeouts are left at the
/// transport defaults.
#[derive(Debug, Clone)]
pub struct GistClient {
    http: Client,
    api_base: String,
}

impl GistClient {
    /// Creates a client for the API rooted at `api_base`.
    ///
    /// # Arguments
    ///
    /// * `api_base`: API root without trailing slash, e.g. [`DEFAULT_API_BASE`]
    /// * `token`: Optional token sent as a bearer credential to raise rate limits
    ///
    /// # Errors
    ///
    /// Returns error if the token is not a valid header value or the TLS
    /// backend cannot be initialized.
    pub fn new(api_base: impl Into<String>, token: Option<&str>) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            api_base: api_base.into().trim_end_matches('/').to_string(),
        })
    }

    /// Fetches the summary of Gist `id`.
    ///
    /// # Errors
    ///
    /// * [`ViewerError::GistNotFound`] when the API answers 404
    /// * [`ViewerError::MetadataFailed`] on any other status, transport, or
    ///   JSON error
    pub async fn fetch_summary(&self, id: &str) -> Result<GistSummary, ViewerError> {
        let url = format!("{}/gists/{}", self.api_base, id);
        tracing::debug!(%url, "fetching gist metadata");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ViewerError::MetadataFailed(e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => return Err(ViewerError::GistNotFound),
            status if !status.is_success() => {
                return Err(ViewerError::MetadataFailed(format!("HTTP {}", status.as_u16())));
            }
            _ => {}
        }

        let gist: ApiGist = response
            .json()
            .await
            .map_err(|e| ViewerError::MetadataFailed(e.to_string()))?;

        Ok(gist.into())
    }

    /// Fetches the summary of Gist `id`, collapsing every failure into
    /// [`GistSummary::empty`].
    ///
    /// A missing Gist and a Gist without files look the same to callers.
    pub async fn summary_or_empty(&self, id: &str) -> GistSummary {
        match self.fetch_summary(id).await {
            Ok(summary) => summary,
            Err(e) => {
                tracing::warn!(gist = id, error = %e, "gist metadata lookup failed");
                GistSummary::empty()
            }
        }
    }

    /// Fetches a raw file body as text. Any content type is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::FetchFailed`] on a non-success status or
    /// transport error.
    pub async fn fetch_raw(&self, raw_url: &str) -> Result<String, ViewerError> {
        tracing::debug!(url = raw_url, "fetching raw content");

        let response = self
            .http
            .get(raw_url)
            .send()
            .await
            .map_err(|e| ViewerError::FetchFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ViewerError::FetchFailed(format!("HTTP {}", status.as_u16())));
        }

        response
            .text()
            .await
            .map_err(|e| ViewerError::FetchFailed(e.to_string()))
    }
}
