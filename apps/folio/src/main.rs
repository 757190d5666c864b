mod config;
mod controller;
mod errors;
mod extract;
mod fetch;
mod html;
mod models;
mod page;
mod preview;
mod render;
mod skills;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{timeout_from_secs, Config};
use crate::controller::{Outcome, PageController};
use crate::page::{behaviors, HostDocument, RegionMap};
use crate::render::RenderContext;

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version, about = "Renders a resume JSON document into a portfolio page")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the portfolio page once (the default)
    Render(RenderArgs),
    /// Render, then serve the output directory on 127.0.0.1
    Preview {
        #[command(flatten)]
        render: RenderArgs,

        /// Port to listen on
        #[arg(long)]
        port: Option<u16>,
    },
}

/// Flags override the matching FOLIO_* environment variables.
#[derive(Args, Debug, Default)]
struct RenderArgs {
    /// Resume JSON location: http(s) URL or file path
    #[arg(long)]
    source: Option<String>,

    /// Host HTML page to inject into (defaults to the built-in page)
    #[arg(long)]
    template: Option<PathBuf>,

    /// Where to write the rendered page
    #[arg(long)]
    output: Option<PathBuf>,

    /// Fetch timeout in seconds; 0 waits indefinitely
    #[arg(long)]
    timeout_secs: Option<u64>,
}

impl RenderArgs {
    fn apply(self, config: &mut Config) {
        if let Some(source) = self.source {
            config.source = source;
        }
        if let Some(template) = self.template {
            config.template = Some(template);
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(secs) = self.timeout_secs {
            config.fetch_timeout = timeout_from_secs(secs);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting folio v{}", env!("CARGO_PKG_VERSION"));

    match cli
        .command
        .unwrap_or_else(|| Command::Render(RenderArgs::default()))
    {
        Command::Render(args) => {
            args.apply(&mut config);
            if let Outcome::Failed(e) = render_page(&config).await? {
                return Err(anyhow::Error::new(e)
                    .context("Portfolio failed to load; error page written"));
            }
        }
        Command::Preview { render, port } => {
            render.apply(&mut config);
            if let Some(port) = port {
                config.preview_port = port;
            }
            if let Outcome::Failed(e) = render_page(&config).await? {
                warn!("Previewing the error page: {e}");
            }
            preview::serve(output_dir(&config.output), config.preview_port).await?;
        }
    }

    Ok(())
}

/// One page view: load the host page, fetch and render the resume, write
/// the result. The page is written whether or not the data loaded.
async fn render_page(config: &Config) -> Result<Outcome> {
    let host = load_host(config.template.as_deref()).await?;
    for id in behaviors::dangling_anchors(&host) {
        warn!("Anchor #{id} has no matching element in the host page");
    }

    let source = fetch::source_for(&config.source, config.fetch_timeout)?;
    let mut page = RegionMap::new();
    let outcome = PageController::new(source.as_ref(), RenderContext::now())
        .run(&mut page)
        .await;

    let html = host.render(&page, &behaviors::script())?;

    let dir = output_dir(&config.output);
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    tokio::fs::write(&config.output, html)
        .await
        .with_context(|| format!("Failed to write {}", config.output.display()))?;
    info!("Wrote {}", config.output.display());

    Ok(outcome)
}

async fn load_host(template: Option<&Path>) -> Result<HostDocument> {
    let Some(path) = template else {
        return Ok(HostDocument::default_page()?);
    };
    let source = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read host page {}", path.display()))?;
    HostDocument::parse(source).with_context(|| format!("Invalid host page {}", path.display()))
}

fn output_dir(output: &Path) -> &Path {
    output
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."))
}
