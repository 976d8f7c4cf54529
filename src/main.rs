#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use std::process::ExitCode;

use leptos::prelude::get_configuration;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    // A missing .env is normal outside local development.
    let _ = dotenvy::dotenv();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "message-board exited");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    let conf = get_configuration(None).map_err(|e| ServerError::LeptosConfig(e.to_string()))?;

    let app = routes::app(conf.leptos_options);
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, "message-board listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
