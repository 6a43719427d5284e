use anyhow::Context;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use tic_tac_toe::shell::config::AppConfig;
use tic_tac_toe::shell::graphql::{self, GRAPHQL_PATH};
use tic_tac_toe::shell::http;
use tic_tac_toe::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let config = AppConfig::from_env()?;

    // In-memory store for now; games do not survive a restart.
    let state = AppState::in_memory();
    let schema = graphql::schema(state.clone());

    let app = http::router(state)
        .merge(graphql::router(schema))
        .layer(TraceLayer::new_for_http());

    tracing::info!("REST endpoint: http://{}/api/game", config.bind_addr);
    tracing::info!("GraphQL endpoint: http://{}{}", config.bind_addr, GRAPHQL_PATH);
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;
    axum::serve(listener, app).await?;
    Ok(())
}
