pub mod api;
pub mod page;

use crate::market::PriceHistorySource;
use std::sync::Arc;

/// Shared by every handler. Holds no per-render state.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn PriceHistorySource>,
}

impl AppState {
    pub fn new(source: Arc<dyn PriceHistorySource>) -> Self {
        Self { source }
    }
}
