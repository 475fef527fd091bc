mod config;
mod error;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let leptos_conf =
        leptos::prelude::get_configuration(None).map_err(|e| AppError::Leptos(e.to_string()))?;

    let app = routes::app(leptos_conf.leptos_options);
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, api_base = client::net::api::API_BASE_URL, "webadmin listening");
    axum::serve(listener, app).await?;
    Ok(())
}
