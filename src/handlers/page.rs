use crate::dashboard::{render_dashboard, render_html};
use crate::handlers::AppState;
use crate::models::DashboardParams;
use axum::{
    extract::{Query, State},
    response::Html,
};

/// Renders the whole dashboard page. Every form submit lands here again.
pub async fn dashboard_page(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> Html<String> {
    let dashboard = render_dashboard(state.source.as_ref(), &params).await;
    Html(render_html(&dashboard))
}
