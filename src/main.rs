//! Linkboard — a self-hosted bookmark manager.
//!
//! Entry point: loads configuration, prepares the store schema and serves the
//! HTTP routes. Built without the `server` feature it only prepares the schema.

use linkboard::app::App;
use linkboard::types::config::AppConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "linkboard=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn start() -> Result<App, Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    tracing::info!(
        path = %config.database_path.display(),
        bind = %config.bind_address(),
        "Loaded configuration"
    );
    Ok(App::new(config)?)
}

#[cfg(feature = "server")]
#[tokio::main]
async fn main() {
    init_tracing();

    let app = match start() {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "Failed to start Linkboard");
            std::process::exit(1);
        }
    };

    let bind = app.config().bind_address();
    let listener = match tokio::net::TcpListener::bind(&bind).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, bind = %bind, "Failed to bind listener");
            std::process::exit(1);
        }
    };
    tracing::info!(bind = %bind, "Linkboard listening");

    if let Err(e) = axum::serve(listener, linkboard::http::router(app)).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "server"))]
fn main() {
    init_tracing();

    if let Err(e) = start() {
        tracing::error!(error = %e, "Failed to prepare Linkboard store");
        std::process::exit(1);
    }
    tracing::info!("Store ready; built without the `server` feature, nothing to serve");
}
