use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use log::{info, warn};
use tokio::net::TcpListener;

use cochi::routes::{fixed_route, FIXED_ROUTES};
use cochi::{create_router, enumerate_all, AppState, Config, ContentClient, FileContentClient, SiteError};

const DEFAULT_CONFIG_FILE: &str = "cochi.toml";

#[derive(Debug, Parser)]
#[command(name = "cochi", version, about = "Restaurant site server")]
struct Cli {
    /// Config file (defaults to ./cochi.toml when present)
    #[arg(long, short)]
    config: Option<PathBuf>,
    #[arg(long)]
    host: Option<String>,
    #[arg(long, short)]
    port: Option<u16>,
    #[arg(long)]
    content_dir: Option<PathBuf>,
    #[arg(long)]
    static_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the HTTP server
    Serve,
    /// Print every routable page path
    Routes,
}

fn load_config(cli: &Cli) -> Result<Config, SiteError> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Config::from_file(Path::new(DEFAULT_CONFIG_FILE))?,
        None => Config::new(),
    };
    config.apply_env()?;
    if let Some(host) = &cli.host {
        config.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(dir) = &cli.content_dir {
        config.content_dir = dir.clone();
    }
    if let Some(dir) = &cli.static_dir {
        config.static_dir = dir.clone();
    }
    config.validate()?;
    Ok(config)
}

async fn print_routes(client: Arc<dyn ContentClient>) -> Result<(), SiteError> {
    for route in FIXED_ROUTES {
        println!("{}", route.path);
    }
    for params in enumerate_all(client).await? {
        let url = params.url();
        // the dedicated route wins over the catch-all for these
        if fixed_route(&url).is_none() {
            println!("{}", url);
        }
    }
    Ok(())
}

async fn serve(config: &Config, client: Arc<dyn ContentClient>) -> Result<(), SiteError> {
    match enumerate_all(client.clone()).await {
        Ok(params) => info!("{} catch-all pages available", params.len()),
        Err(e) => warn!("Could not enumerate pages: {}", e),
    }

    let state = AppState {
        client,
        static_dir: Arc::new(config.static_dir.clone()),
        revalidate_secs: config.revalidate_secs,
    };
    let app = create_router(state);

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!("Cochi listening on http://{}", addr);
    axum::serve(listener, app).await.map_err(SiteError::from)
}

#[tokio::main]
async fn main() -> Result<(), SiteError> {
    if let Err(e) = cochi::logger::Logger::init() {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    if !config.content_dir.is_dir() {
        warn!("Content directory {:?} does not exist", config.content_dir);
    }
    let client: Arc<dyn ContentClient> =
        Arc::new(FileContentClient::new(config.content_dir.clone(), config.page_size));

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(&config, client).await,
        Command::Routes => print_routes(client).await,
    }
}
