// src/lib.rs
pub mod budget;
pub mod charts;
pub mod config;
pub mod dashboard;
pub mod goals;
pub mod handlers;
pub mod market;
pub mod models;
pub mod quotes;

// Re-export commonly used items
pub use config::Config;
pub use handlers::AppState;
pub use models::*;

use crate::handlers::{
    api::{get_budget, get_dashboard, get_goal, get_quote, get_stock, health},
    page::dashboard_page,
};
use axum::{routing::get, Router};

/// Builds the application router without any layers.
pub fn app(state: AppState) -> Router {
    Router::new()
        // Page
        .route("/", get(dashboard_page))
        // JSON routes
        .route("/api/dashboard", get(get_dashboard))
        .route("/api/budget", get(get_budget))
        .route("/api/goal", get(get_goal))
        .route("/api/stock/:symbol", get(get_stock))
        .route("/api/quote", get(get_quote))
        .route("/health", get(health))
        .with_state(state)
}
