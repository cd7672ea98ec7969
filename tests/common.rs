//! Shared test utilities for integration tests.
//!
//! Provides a mock Gist API backed by wiremock. Raw file URLs in the served
//! metadata point back at the same mock server.

#![allow(dead_code)]

use gistview::{GistClient, Viewer};
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path under which raw file bodies are served.
pub fn raw_path(id: &str, filename: &str) -> String {
    format!("/raw/{}/{}", id, filename)
}

/// Mounts Gist `id` with `files` as `(filename, body)` pairs.
///
/// Files are listed in the given order; each body is served at
/// [`raw_path`].
pub async fn mount_gist(
    server: &MockServer,
    id: &str,
    description: Option<&str>,
    owner: Option<&str>,
    files: &[(&str, &str)],
) {
    let mut file_map = serde_json::Map::new();
    for (filename, body) in files {
        let raw = raw_path(id, filename);
        file_map.insert(
            (*filename).to_string(),
            json!({
                "filename": filename,
                "type": "text/plain",
                "raw_url": format!("{}{}", server.uri(), raw),
            }),
        );

        Mock::given(method("GET"))
            .and(path(raw))
            .respond_with(ResponseTemplate::new(200).set_body_string(*body))
            .mount(server)
            .await;
    }

    let owner: Value = match owner {
        Some(login) => json!({ "login": login }),
        None => Value::Null,
    };

    Mock::given(method("GET"))
        .and(path(format!("/gists/{}", id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": id,
            "description": description,
            "owner": owner,
            "files": file_map,
        })))
        .mount(server)
        .await;
}

/// Mounts a bare status response for the metadata of Gist `id`.
pub async fn mount_metadata_status(server: &MockServer, id: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(format!("/gists/{}", id)))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Viewer whose API base is the mock server.
pub fn viewer_for(server: &MockServer) -> Viewer {
    let client = GistClient::new(server.uri(), None).expect("Should build client");
    Viewer::new(client)
}
