mod backend;
mod binding;
mod components;
mod config;
mod datepicker;
mod errors;
mod models;
mod store;

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::backend::BackendClient;
use crate::components::ComponentRegistry;
use crate::config::Config;
use crate::store::{ClientCache, FileCache};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CV editor v{}", env!("CARGO_PKG_VERSION"));

    let backend = Arc::new(BackendClient::new(
        config.backend_url.clone(),
        config.request_timeout_secs,
    ));
    let cache: Arc<dyn ClientCache> = Arc::new(FileCache::new(config.cache_dir.clone()));
    let registry = ComponentRegistry::new(backend, cache.clone(), &config.ui_lang);

    // Offline sync: push the locally cached résumé, if any, to the backend.
    match cache.get_record().await? {
        Some(record) => {
            registry.saver.push(&record).await?;
            info!("cached résumé pushed to {}", config.backend_url);
        }
        None => warn!(
            "no cached résumé under {}; nothing to sync",
            config.cache_dir.display()
        ),
    }

    Ok(())
}
