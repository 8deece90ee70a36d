use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use event_scheduler::modules::events::adapters::outbound::event_store_in_memory::InMemoryEventStore;
use event_scheduler::shell::config::AppConfig;
use event_scheduler::shell::http::router;
use event_scheduler::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let state = AppState::new(Arc::new(InMemoryEventStore::new()));
    let app = router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("Server running on http://{}", address);
    tracing::info!("GraphQL endpoint: http://{}/gql", address);
    axum::serve(listener, app).await?;
    Ok(())
}
