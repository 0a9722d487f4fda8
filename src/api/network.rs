use crate::api::{ApiJson, AppState};
use crate::domain::numeric::{lenient_timestamp, null_as_default};
use crate::domain::{NetworkNode, TimeMs};
use crate::engine::{analyze_network, NetworkHealth};
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkHealthRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub nodes: BTreeMap<String, NetworkNode>,
    /// Evaluation time; defaults to the server clock.
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub now_ms: Option<i64>,
}

pub async fn network_health(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<NetworkHealthRequest>,
) -> Json<NetworkHealth> {
    let now = request.now_ms.map(TimeMs::new).unwrap_or_else(TimeMs::now);
    let health = analyze_network(&request.nodes, now, state.policy());

    tracing::info!(
        total = health.total_nodes,
        active = health.active_nodes,
        status = ?health.health_status,
        "network health evaluated"
    );

    Json(health)
}
