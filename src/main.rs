use anyhow::{Context, Result, bail};
use gistview::server::{self, ServeSettings};
use gistview::{
    AssetMode, Command, Config, GistReference, ViewMode, ViewState, Viewer, pages, resolve,
    select_file,
};
use std::fs;
use std::io::Write;
use std::path::Path;

#[actix_web::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    config.validate().context("Invalid configuration")?;

    match config.command.clone() {
        Command::Serve { bind, open } => {
            server::run(ServeSettings {
                bind,
                client: config.client()?,
                site_url: config.site_url.clone(),
                open_browser: open,
            })
            .await
        }
        Command::Render {
            reference,
            output,
            share,
        } => render(&config, &reference, output.as_deref(), share).await,
        Command::Info { reference } => info(&config, reference.trim()).await,
    }
}

/// Runs the pipeline once and writes the resulting page.
///
/// The page is written even when loading failed, carrying the inline error;
/// the command then exits with that error.
async fn render(
    config: &Config,
    reference: &str,
    output: Option<&Path>,
    share: bool,
) -> Result<()> {
    let viewer = Viewer::new(config.client()?);
    let mode = if share { ViewMode::Share } else { ViewMode::Edit };

    let mut view = ViewState::new(mode, config.share_base());
    let generation = view.submit(reference);
    view.finish(generation, viewer.load(reference.trim()).await);

    let html = pages::render(&view, AssetMode::Inline).into_string();

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).context("Failed to create output directory")?;
            }
            fs::write(path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "page written");
        }
        None => {
            std::io::stdout()
                .write_all(html.as_bytes())
                .context("Failed to write page to stdout")?;
        }
    }

    if let Some(error) = view.error() {
        bail!("{}", error);
    }
    if let Some(url) = view.share_url() {
        eprintln!("Share link: {}", url);
    }
    Ok(())
}

/// Prints what the viewer knows about a reference without rendering it.
async fn info(config: &Config, reference: &str) -> Result<()> {
    let id = match resolve(reference)? {
        GistReference::GistId(id) => id,
        GistReference::RawUrl(url) => {
            println!("Raw content URL: {}", url);
            return Ok(());
        }
    };

    let summary = config.client()?.summary_or_empty(&id).await;

    println!("Gist:        {}", id);
    println!("Owner:       {}", summary.owner);
    println!("Description: {}", summary.description);
    println!("Files:");
    for file in &summary.files {
        println!("  {}  {}", file.filename, file.raw_url);
    }

    match select_file(&summary.files) {
        Ok(file) => println!("Renders:     {}", file.filename),
        Err(e) => bail!("{}", e),
    }

    Ok(())
}
