use taskboard_backend_lib::{
    config::Settings,
    http_router,
    storage::FlatFileStore,
    AppState,
};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize configuration
    let settings = Settings::load()?;

    // Initialize tracing; RUST_LOG overrides the configured level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_level.clone())),
        )
        .init();

    // Open the document store
    let store = FlatFileStore::new(&settings.data_dir)?;

    let bind_addr = settings.bind_addr;

    // Create application state and the router
    let state = AppState::new(store, settings);
    let app = http_router::create_router(state);

    // Start the server
    let listener = TcpListener::bind(bind_addr).await?;
    tracing::info!("listening on {bind_addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
