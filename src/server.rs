//! HTTP server for the viewer page

use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use anyhow::{Context, Result};
use maud::Markup;

use crate::assets::{self, AssetMode};
use crate::gist::GistClient;
use crate::pages;
use crate::pipeline::Viewer;
use crate::view::{ViewQuery, ViewState};

/// Per-worker application state.
pub struct AppState {
    viewer: Viewer,
    site_url: Option<String>,
}

impl AppState {
    pub fn new(viewer: Viewer, site_url: Option<String>) -> Self {
        Self { viewer, site_url }
    }
}

/// Settings of [`run`].
#[derive(Debug, Clone)]
pub struct ServeSettings {
    pub bind: String,
    pub client: GistClient,
    pub site_url: Option<String>,
    pub open_browser: bool,
}

/// Registers the viewer routes.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(viewer_page))
        .route("/assets/{name}", web::get().to(asset));
}

/// Serves the viewer until the server is stopped.
///
/// Each worker builds its own [`Viewer`]; the HTTP client and its connection
/// pool are shared.
///
/// # Errors
///
/// Returns error if the address cannot be bound or the server fails.
pub async fn run(settings: ServeSettings) -> Result<()> {
    let ServeSettings {
        bind,
        client,
        site_url,
        open_browser,
    } = settings;

    let factory_site_url = site_url.clone();
    let server = HttpServer::new(move || {
        let state = AppState::new(Viewer::new(client.clone()), factory_site_url.clone());
        App::new()
            .app_data(web::Data::new(state))
            .configure(routes)
    })
    .bind(&bind)
    .with_context(|| format!("Failed to bind {}", bind))?;

    let local_url = server
        .addrs()
        .first()
        .map(|addr| format!("http://{}/", addr))
        .unwrap_or_else(|| format!("http://{}/", bind));
    tracing::info!(url = %local_url, "serving gist viewer");

    if open_browser {
        let target = site_url.as_deref().unwrap_or(&local_url);
        if let Err(e) = open::that(target) {
            tracing::warn!(error = %e, "failed to open browser");
        }
    }

    server.run().await.context("Server failed")?;
    Ok(())
}

/// Renders the viewer, running the pipeline first when a reference is given.
///
/// Pipeline failures render as inline messages with status 200.
async fn viewer_page(
    req: HttpRequest,
    query: web::Query<ViewQuery>,
    state: web::Data<AppState>,
) -> Markup {
    let query = query.into_inner();
    let share_base = state
        .site_url
        .clone()
        .unwrap_or_else(|| request_base(&req));

    let mut view = ViewState::new(query.mode(), share_base);
    if let Some(input) = query.reference() {
        let generation = view.submit(input);
        let outcome = state.viewer.load(input.trim()).await;
        if let Err(e) = &outcome {
            tracing::info!(reference = input, error = %e, "gist load failed");
        }
        view.finish(generation, outcome);
    }

    pages::render(&view, AssetMode::Linked)
}

async fn asset(name: web::Path<String>) -> HttpResponse {
    match assets::lookup(&name) {
        Some(asset) => HttpResponse::Ok()
            .content_type(asset.content_type)
            .body(asset.body),
        None => HttpResponse::NotFound().finish(),
    }
}

/// Scheme, host, and path the request was made to.
fn request_base(req: &HttpRequest) -> String {
    let info = req.connection_info();
    format!("{}://{}{}", info.scheme(), info.host(), req.path())
}
