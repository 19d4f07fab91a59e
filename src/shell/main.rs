use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use beckn_bap::modules::bap::adapters::outbound::counterparty_http::HttpCounterpartyClientFactory;
use beckn_bap::modules::bap::adapters::outbound::registry_http::HttpRegistry;
use beckn_bap::shared::core::context::ContextFactory;
use beckn_bap::shared::infrastructure::message_ledger::in_memory::InMemoryMessageLedger;
use beckn_bap::shell::config::AppConfig;
use beckn_bap::shell::http::router;
use beckn_bap::shell::state::{AppState, CallbackStores};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;
    let http = reqwest::Client::builder()
        .timeout(config.http_timeout)
        .build()?;

    // In-memory storage for now
    let state = AppState::new(
        ContextFactory::new(config.context.clone()),
        Arc::new(HttpRegistry::new(http.clone(), config.registry_url.clone())),
        Arc::new(HttpCounterpartyClientFactory::new(http)),
        Arc::new(InMemoryMessageLedger::new()),
        CallbackStores::in_memory(),
    );

    let app = router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.listen_address().parse()?;
    tracing::info!(bap_id = %config.context.bap_id, "BAP listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
