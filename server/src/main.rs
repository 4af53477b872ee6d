#![cfg_attr(test, allow(clippy::disallowed_methods))]
// Forbid unwrap() in production code to prevent panics on bad input.
// Test code is allowed to use unwrap() for convenience.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]

use matrix_server::{
    AppState, build_router,
    auth::{CredentialStore, SigningKey},
    config::ServerConfig,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "matrix_server=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment variables
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Loaded configuration: static_directory={}, listen_port={}",
        config.static_directory.display(),
        config.listen_port
    );

    let key = match &config.jwt_secret {
        Some(secret) => SigningKey::new(secret).unwrap_or_else(|e| {
            tracing::error!("Invalid signing secret: {e}");
            std::process::exit(1);
        }),
        None => {
            tracing::warn!(
                "MATRIX_JWT_SECRET is not set; using a random secret, tokens will not survive a restart"
            );
            SigningKey::generate()
        }
    };

    if !config.static_directory.is_dir() {
        tracing::warn!(
            "static directory {} does not exist; /static will return 404",
            config.static_directory.display()
        );
    }

    let addr = config.socket_addr();
    let state = AppState::new(CredentialStore::seeded(), key, config.static_directory);
    let app = build_router(state);

    tracing::info!("listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("Failed to bind: {e}");
            std::process::exit(1);
        });

    axum::serve(listener, app).await.unwrap_or_else(|e| {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    });
}
