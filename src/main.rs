use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use eyre::Result;
use log::info;
use tokio::net::TcpListener;

mod cli;

use cli::Cli;
use ytex::config::Config;
use ytex::oembed;
use ytex::server::{self, AppState};
use ytex::youtube::InnerTubeCaptions;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_LANGUAGE: &str = "pt";

/// Bounds every outbound call, including each caption language attempt.
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

fn setup_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    // Config file fills in whatever the CLI/env left unset
    let config = Config::load().unwrap_or_default();
    let port = cli.port.or(config.port).unwrap_or(DEFAULT_PORT);
    let default_language = cli
        .lang
        .or(config.default_language)
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
    let oembed_endpoint = config
        .oembed_endpoint
        .unwrap_or_else(|| oembed::DEFAULT_ENDPOINT.to_string());

    let client = reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()?;

    let state = AppState {
        captions: Arc::new(InnerTubeCaptions::new(client.clone())),
        client,
        oembed_endpoint,
        default_language,
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {addr}");
    println!("Servidor iniciando na porta {port}...");

    axum::serve(listener, server::router(state)).await?;
    Ok(())
}
