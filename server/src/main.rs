//! Issue desk host: server-renders the Leptos shell and serves the WASM
//! bundle. It has no issue endpoints; all issue data lives in the client.

#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use std::process::ExitCode;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "issue desk host failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();

    let config = ServerConfig::from_env()?;
    let app = routes::app()?;

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, "issue desk listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
