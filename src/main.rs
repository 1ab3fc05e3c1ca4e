//! StudyGate HTTP server
//!
//! Starts an Axum web server that serves the chat page and the
//! /api/chat/ normalization endpoint.

use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use studygate::cli::{Cli, Command, generate_config_template};
use studygate::config::Config;
use studygate::handlers::{self, AppState};
use studygate::model::GeminiClient;
use studygate::telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(Command::Config { output }) = cli.command {
        match output {
            Some(path) => {
                std::fs::write(&path, generate_config_template())?;
                println!("Wrote configuration template to {path}");
            }
            None => print!("{}", generate_config_template()),
        }
        return Ok(());
    }

    let config = Config::from_file(&cli.config)?;
    telemetry::init(config.observability.log_level());

    // Fail fast: a missing API key aborts before the server binds
    let api_key = config.model.resolve_api_key()?;
    let model = Arc::new(GeminiClient::new(&config.model, api_key)?);

    tracing::info!(
        "Starting StudyGate server on {}:{} (model {})",
        config.server.host,
        config.server.port,
        config.model.name()
    );

    let addr = SocketAddr::from((
        config
            .server
            .host
            .parse::<std::net::IpAddr>()
            .unwrap_or_else(|_| std::net::IpAddr::from([0, 0, 0, 0])),
        config.server.port,
    ));

    let app = handlers::router(AppState::new(config, model));

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
