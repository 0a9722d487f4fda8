use crate::api::AppState;
use axum::extract::State;
use axum::Json;

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Readiness plus the thresholds the engine is classifying against.
pub async fn ready(State(state): State<AppState>) -> Json<serde_json::Value> {
    let policy = state.policy();
    Json(serde_json::json!({
        "status": "ready",
        "thresholds": {
            "margin": [policy.margin.worst, policy.margin.second, policy.margin.third],
            "efficiency": [
                policy.efficiency.worst,
                policy.efficiency.second,
                policy.efficiency.third
            ],
            "health": [policy.health.worst, policy.health.second, policy.health.third],
            "livenessWindowMs": policy.liveness_window_ms,
        }
    }))
}
