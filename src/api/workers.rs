use crate::api::{ApiJson, AppState};
use crate::engine::{score_efficiency, Efficiency, ResourceCounts};
use axum::extract::State;
use axum::Json;

pub async fn efficiency(
    State(state): State<AppState>,
    ApiJson(counts): ApiJson<ResourceCounts>,
) -> Json<Efficiency> {
    tracing::info!(active = counts.active, total = counts.total, "scoring efficiency");
    Json(score_efficiency(counts, &state.policy().efficiency))
}
