//! Salary estimation HTTP server.
//!
//! Serves the estimator and lead endpoints over the configured salary guide.

use std::sync::Arc;

use anyhow::Result;
use salary_engine::api::{AppState, create_router};
use salary_engine::config::{ConfigLoader, NotionConfig, ServerConfig};
use salary_engine::leads::{InMemoryLeadStore, LeadStore, NotionLeadStore};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;

    let config = ServerConfig::from_env()?;
    info!(?config, "Loaded server configuration");

    let loader = match &config.guide_dir {
        Some(dir) => ConfigLoader::load(dir)?,
        None => ConfigLoader::builtin()?,
    };
    let table = loader.into_rate_table();
    info!(
        guide = %table.guide().name,
        version = %table.guide().version,
        "Salary guide loaded"
    );

    let leads: Arc<dyn LeadStore> = match NotionConfig::from_env()? {
        Some(notion) => {
            info!(database_id = %notion.database_id, "Storing leads in Notion");
            Arc::new(NotionLeadStore::new(notion)?)
        }
        None => {
            warn!("NOTION_API_KEY or NOTION_DATABASE_ID unset; leads are kept in memory");
            Arc::new(InMemoryLeadStore::new())
        }
    };

    let state = AppState::new(table, leads);
    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "salary_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}
