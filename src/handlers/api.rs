use crate::budget::compute_budget;
use crate::charts::budget_pie;
use crate::dashboard::render_dashboard;
use crate::goals::compute_progress;
use crate::handlers::AppState;
use crate::market::{load_stock_panel, StockPanel};
use crate::models::{Dashboard, DashboardParams};
use crate::quotes::random_quote;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

/// Full render pass as JSON.
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> (StatusCode, Json<Dashboard>) {
    let dashboard = render_dashboard(state.source.as_ref(), &params).await;
    (StatusCode::OK, Json(dashboard))
}

pub async fn get_budget(Query(params): Query<DashboardParams>) -> (StatusCode, Json<Value>) {
    let inputs = params.budget();
    let budget = compute_budget(&inputs);
    (
        StatusCode::OK,
        Json(json!({
            "inputs": inputs,
            "breakdown": budget,
            "categories": budget.categories(),
            "chart": budget_pie(&budget),
        })),
    )
}

pub async fn get_goal(Query(params): Query<DashboardParams>) -> (StatusCode, Json<Value>) {
    let progress = compute_progress(&params.goal());
    (
        StatusCode::OK,
        Json(json!({
            "label": &progress.label,
            // NaN and inf serialize as null
            "percent": progress.percent,
            "bar": progress.bar_fraction(),
            "status": progress.status_line(),
        })),
    )
}

/// One month of daily closes for a symbol, or the generic warning.
pub async fn get_stock(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<(StatusCode, Json<StockPanel>), (StatusCode, Json<String>)> {
    match load_stock_panel(state.source.as_ref(), &symbol).await {
        StockPanel::Unavailable { message } => Err((StatusCode::NOT_FOUND, Json(message))),
        panel => Ok((StatusCode::OK, Json(panel))),
    }
}

pub async fn get_quote() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "quote": random_quote() })))
}

pub async fn health() -> &'static str {
    "OK"
}
