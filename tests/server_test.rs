//! HTTP tests of the viewer page against a mock Gist API.

mod common;

use actix_web::{App, test, web};
use common::{mount_gist, viewer_for};
use gistview::server::{AppState, routes};
use wiremock::MockServer;

const SITE: &str = "https://viewer.example/";

async fn get_page(server: &MockServer, site_url: Option<&str>, uri: &str) -> String {
    let state = web::Data::new(AppState::new(
        viewer_for(server),
        site_url.map(String::from),
    ));
    let app = test::init_service(App::new().app_data(state).configure(routes)).await;
    let req = test::TestRequest::get()
        .uri(uri)
        .insert_header(("host", "localhost:8080"))
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    String::from_utf8(body.to_vec()).expect("Body should be UTF8")
}

/// Tests edit mode renders form, share link, and content.
#[actix_web::test]
async fn test_edit_mode_with_gist() {
    // Arrange
    let server = MockServer::start().await;
    mount_gist(
        &server,
        "abc123",
        Some("Demo"),
        Some("user"),
        &[("README.md", "# Hello\n\nSome **bold** text")],
    )
    .await;

    // Act
    let html = get_page(&server, Some(SITE), "/?gist=abc123").await;

    // Assert
    assert!(html.contains("id=\"gist-form\""));
    assert!(html.contains("value=\"abc123\""));
    assert!(html.contains("<h1>Hello</h1>"), "{}", html);
    assert!(html.contains("<strong>bold</strong>"));
    assert!(html.contains("markdown-content prose"));
    assert!(
        html.contains("value=\"https://viewer.example/?gist=abc123&amp;view=share\""),
        "{}",
        html
    );
    assert!(html.contains("data-ack-ms=\"2000\""));
    assert!(!html.contains("og:url"), "Edit mode has no social tags");
    assert!(html.contains("<title>Markdown Share Viewer</title>"));
}

/// Tests share mode shows content only, with social metadata.
#[actix_web::test]
async fn test_share_mode_with_full_url() {
    // Arrange
    let server = MockServer::start().await;
    mount_gist(
        &server,
        "abc123",
        Some("Demo gist"),
        Some("u"),
        &[("notes.md", "Shared *content*")],
    )
    .await;
    let uri = "/?gist=https%3A%2F%2Fgist.github.com%2Fu%2Fabc123&view=share";

    // Act
    let html = get_page(&server, Some(SITE), uri).await;

    // Assert
    assert!(html.contains("<em>content</em>"), "{}", html);
    assert!(html.contains("markdown-content markdown-share-mode"));
    assert!(!html.contains("gist-form"), "Share mode has no form");
    assert!(!html.contains("share-box"), "Share mode has no share link box");
    assert!(html.contains("<title>Demo gist</title>"));
    assert!(
        html.contains(
            "property=\"og:url\" content=\"https://viewer.example/?gist=https%3A%2F%2Fgist.github.com%2Fu%2Fabc123&amp;view=share\""
        ),
        "{}",
        html
    );
}

/// Tests legacy share flag and gistId parameter select share mode.
#[actix_web::test]
async fn test_legacy_share_parameters() {
    // Arrange
    let server = MockServer::start().await;
    mount_gist(&server, "abc123", None, None, &[("doc.md", "legacy")]).await;

    // Act
    let html = get_page(&server, Some(SITE), "/?gistId=abc123&share=true").await;

    // Assert
    assert!(html.contains("markdown-share-mode"), "{}", html);
    assert!(!html.contains("gist-form"));
    assert!(html.contains("<title>doc.md</title>"));
    assert!(html.contains("content=\"doc.md - Markdown document from GitHub Gist\""));
}

/// Tests share link falls back to the request origin.
#[actix_web::test]
async fn test_share_link_uses_request_origin() {
    // Arrange
    let server = MockServer::start().await;
    mount_gist(&server, "abc123", None, None, &[("a.md", "a")]).await;

    // Act
    let html = get_page(&server, None, "/?gist=abc123").await;

    // Assert
    assert!(
        html.contains("value=\"http://localhost:8080/?gist=abc123&amp;view=share\""),
        "{}",
        html
    );
}

/// Tests missing Gist renders inline error without share link.
#[actix_web::test]
async fn test_missing_gist_shows_error() {
    // Arrange
    let server = MockServer::start().await;
    mount_gist(&server, "abc123", None, None, &[]).await;

    // Act
    let html = get_page(&server, Some(SITE), "/?gist=abc123").await;

    // Assert
    assert!(html.contains("Gist not found"), "{}", html);
    assert!(!html.contains("share-box"));
    assert!(!html.contains("markdown-content"));
}

/// Tests blank reference is treated as no reference.
#[actix_web::test]
async fn test_blank_reference_is_idle() {
    // Arrange
    let server = MockServer::start().await;

    // Act
    let html = get_page(&server, Some(SITE), "/?gist=%20%20").await;

    // Assert
    assert!(html.contains("empty-state"), "{}", html);
    assert!(!html.contains("error-message"));
}

/// Tests padded reference loads trimmed but is shared as given.
#[actix_web::test]
async fn test_padded_reference_is_shared_verbatim() {
    // Arrange
    let server = MockServer::start().await;
    mount_gist(&server, "abc123", None, None, &[("a.md", "padded *ok*")]).await;

    // Act
    let html = get_page(&server, Some(SITE), "/?gist=%20abc123%20").await;

    // Assert
    assert!(html.contains("<em>ok</em>"), "{}", html);
    assert!(
        html.contains("value=\"https://viewer.example/?gist=%20abc123%20&amp;view=share\""),
        "{}",
        html
    );
}
