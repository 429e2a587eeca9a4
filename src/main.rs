use teamhub_api::{app, config, store::DocumentStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up TEAMHUB_DB_PATH and friends.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("Starting teamhub-api in {:?} mode", config.environment);

    let store = DocumentStore::load(&config.store.path).await?;
    let app = app(store);

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    println!("🚀 teamhub-api listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
