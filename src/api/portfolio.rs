use crate::api::{ApiJson, AppState};
use crate::domain::numeric::null_as_default;
use crate::domain::AccountSnapshot;
use crate::engine::{analyze_portfolio, PortfolioReport};
use crate::error::AppError;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub current: Vec<AccountSnapshot>,
    #[serde(default)]
    pub baseline: Option<Vec<AccountSnapshot>>,
}

pub async fn analyze(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<AnalyzeRequest>,
) -> Result<Json<PortfolioReport>, AppError> {
    // An empty wallet query result means the address is unknown or inactive.
    if request.current.is_empty() {
        return Err(AppError::NotFound("wallet not found".to_string()));
    }

    tracing::info!(
        accounts = request.current.len(),
        baseline_accounts = request.baseline.as_ref().map(Vec::len),
        "analyzing portfolio"
    );

    let report = analyze_portfolio(
        &request.current,
        request.baseline.as_deref(),
        state.policy(),
    );

    Ok(Json(report))
}
