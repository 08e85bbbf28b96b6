use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;

mod config;
mod error;
mod form;
mod forwarder;
mod prediction;
mod templates;
mod web;

use config::Config;
use forwarder::Forwarder;
use prediction::{HttpPredictionClient, PredictionService};
use templates::EmbeddedTemplates;
use web::{AppState, StandardFormDecoder};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    config.validate()?;

    let prediction = HttpPredictionClient::new()?;
    info!("Forwarding submissions to {}", prediction.endpoint());

    let state = AppState {
        forwarder: Forwarder::new(Arc::new(prediction), Arc::new(EmbeddedTemplates)),
        form_decoder: Arc::new(StandardFormDecoder),
    };
    let app = web::router(state);

    let addr = config.socket_addr()?;
    info!("Listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Run the web server (blocks until shutdown)
    axum::serve(listener, app).await?;

    Ok(())
}
