mod config;
mod outcome;
mod routes;
mod services;
mod session;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env();
    let backend = services::backend::HttpBackend::new(&config.backend_url);
    let state = state::AppState::new(Arc::new(backend));

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, backend = %config.backend_url, "gradegate listening");
    axum::serve(listener, app).await.expect("server failed");
}
