//! Website server entry point.

use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pathlearn_site::config::Config;
use pathlearn_site::templates::TemplateEngine;
use pathlearn_site::utils::shutdown_signal;
use pathlearn_site::views::handlers::HOME_TEMPLATE;
use pathlearn_site::views::{create_router, AppState};

/// Small website server.
#[derive(Parser, Debug)]
#[command(name = "pathlearn-site")]
#[command(about = "Serves the home, about, and contact pages")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// HTTP server port (overrides PORT).
    #[arg(short, long)]
    port: Option<u16>,

    /// Templates directory (overrides TEMPLATES_DIR).
    #[arg(short, long)]
    templates_dir: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("pathlearn_site=debug,tower_http=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Load configuration
    let mut config = Config::load()?;

    // Override with CLI args if provided
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(templates_dir) = args.templates_dir {
        config.templates_dir = templates_dir;
    }

    // Validate configuration
    if let Err(e) = config.validate() {
        return Err(anyhow::anyhow!("configuration validation failed: {}", e));
    }

    info!("Configuration loaded successfully");
    info!("Templates directory: {}", config.templates_dir);

    // Load templates
    let templates = TemplateEngine::load(&config.templates_dir)?;
    if !templates.contains(HOME_TEMPLATE) {
        warn!(
            "Template {} not found in {}; the home page will return an error",
            HOME_TEMPLATE, config.templates_dir
        );
    }

    let state = AppState::new(templates);
    let router = create_router(state);

    // Start HTTP server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
