use crate::api::{ApiJson, AppState};
use crate::domain::Numeric;
use crate::engine::{classify_margin, MarginRisk};
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginRiskRequest {
    #[serde(default)]
    pub balance: Numeric,
    #[serde(default)]
    pub initial_margin: Numeric,
    #[serde(default)]
    pub maintenance_margin: Numeric,
}

pub async fn margin_risk(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<MarginRiskRequest>,
) -> Json<MarginRisk> {
    let risk = classify_margin(
        request.balance.value(),
        request.initial_margin.value(),
        request.maintenance_margin.value(),
        &state.policy().margin,
    );
    tracing::info!(
        margin_level = risk.margin_level,
        risk = ?risk.risk_level,
        "margin risk classified"
    );
    Json(risk)
}
