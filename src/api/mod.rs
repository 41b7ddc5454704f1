use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    response::Json,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    alexa::{IntentRequest, SkillRequest, SkillResponse},
    besttime::ForecastProvider,
    clock::Clock,
    dispatcher::IntentDispatcher,
};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

pub fn router<P, C>(dispatcher: Arc<IntentDispatcher<P, C>>) -> Router
where
    P: ForecastProvider + 'static,
    C: Clock + 'static,
{
    Router::new()
        .route("/alexa", post(handle_skill_request::<P, C>))
        .route("/health", get(health))
        .with_state(dispatcher)
}

async fn handle_skill_request<P, C>(
    State(dispatcher): State<Arc<IntentDispatcher<P, C>>>,
    Json(payload): Json<SkillRequest>,
) -> Json<SkillResponse>
where
    P: ForecastProvider + 'static,
    C: Clock + 'static,
{
    debug!(
        "Skill request {} ({})",
        payload.request.request_id.as_deref().unwrap_or("-"),
        payload.request.kind
    );

    let request = IntentRequest::from(payload);
    let spoken = dispatcher.dispatch(&request).await;
    Json(SkillResponse::from(spoken))
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
    })
}
