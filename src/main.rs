use anyhow::Result;
use certmint::api::ApiServer;
use certmint::config::Settings;
use certmint::{store, telemetry};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Load configuration
    let settings = Arc::new(Settings::load()?);

    // 2. Initialize telemetry
    telemetry::init_logging(&settings)?;
    info!("Starting certmint...");

    // 3. Create the configured certificate store
    let store = store::create_store(&settings)?;
    info!("Using {} storage backend", settings.storage.backend);

    // 4. Serve the API until shutdown
    let server = ApiServer::new(settings.clone(), store)?;
    server.start_with_shutdown().await?;

    info!("certmint stopped");
    Ok(())
}
