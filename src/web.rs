use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use axum::http::StatusCode;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::{
    api, besttime::ForecastProvider, clock::Clock, config::SkillConfig,
    dispatcher::IntentDispatcher,
};

/// Skill requests are small JSON documents
const MAX_BODY_BYTES: usize = 64 * 1024;

pub fn app<P, C>(config: &SkillConfig, dispatcher: Arc<IntentDispatcher<P, C>>) -> Router
where
    P: ForecastProvider + 'static,
    C: Clock + 'static,
{
    api::router(dispatcher)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.server.request_timeout_seconds.into()),
        ))
        .layer(TraceLayer::new_for_http())
}

pub async fn run<P, C>(config: &SkillConfig, dispatcher: Arc<IntentDispatcher<P, C>>) -> Result<()>
where
    P: ForecastProvider + 'static,
    C: Clock + 'static,
{
    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Skill endpoint listening on http://{}/alexa", addr);

    axum::serve(listener, app(config, dispatcher))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Web server failed")?;

    tracing::info!("Web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
    }
}
