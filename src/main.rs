use std::sync::Arc;

use anyhow::{Context, Result};
use canwegoyet::{BestTimeClient, IntentDispatcher, SkillConfig, SystemClock, logging, web};

#[tokio::main]
async fn main() -> Result<()> {
    let config = SkillConfig::load().context("Failed to load configuration")?;
    logging::init(&config.logging)?;
    config.warn_missing_keys();

    tracing::info!(
        "Starting CanWeGoYet {} (timezone {})",
        canwegoyet::VERSION,
        config.timezone.name()
    );

    let client = BestTimeClient::new(config.besttime.clone())
        .context("Failed to create BestTime client")?;
    let dispatcher = Arc::new(IntentDispatcher::new(
        client,
        SystemClock::new(config.timezone),
    ));

    web::run(&config, dispatcher).await
}
