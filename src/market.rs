use async_trait::async_trait;
use chrono::DateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

use crate::charts::{price_line, ChartSpec};
use crate::models::{PricePoint, StockSeries};

/// The only message users see when a stock cannot be charted.
pub const INVALID_SYMBOL_MESSAGE: &str = "⚠️ Invalid stock symbol. Please enter a valid stock.";

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

// One HTTP client for the whole process
lazy_static::lazy_static! {
    static ref CLIENT: reqwest::Client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_default();
}

/// Why a price history could not be loaded. Only ever logged.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    EmptySymbol,
    Network(String),
    Http(u16),
    Parse(String),
    Provider(String),
    NoData,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::EmptySymbol => write!(f, "empty stock symbol"),
            FetchError::Network(e) => write!(f, "network error: {}", e),
            FetchError::Http(status) => write!(f, "HTTP {}", status),
            FetchError::Parse(e) => write!(f, "malformed response: {}", e),
            FetchError::Provider(e) => write!(f, "provider error: {}", e),
            FetchError::NoData => write!(f, "no price data returned"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Source of the trailing one-month daily price history for a symbol.
#[async_trait]
pub trait PriceHistorySource: Send + Sync {
    async fn fetch_month(&self, symbol: &str) -> Result<StockSeries, FetchError>;
}

/// Outcome of the stock section of a render pass.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StockPanel {
    Chart { series: StockSeries, chart: ChartSpec },
    Unavailable { message: String },
}

/// Fetches once and collapses every failure into the generic warning.
pub async fn load_stock_panel(source: &dyn PriceHistorySource, symbol: &str) -> StockPanel {
    match source.fetch_month(symbol).await {
        Ok(series) => {
            tracing::debug!("Fetched {} closes for {}", series.points.len(), symbol);
            let chart = price_line(&series);
            StockPanel::Chart { series, chart }
        }
        Err(e) => {
            tracing::warn!("Failed to fetch price history for {:?}: {}", symbol, e);
            StockPanel::Unavailable {
                message: INVALID_SYMBOL_MESSAGE.to_string(),
            }
        }
    }
}

/// Yahoo Finance v8 chart endpoint.
#[derive(Clone, Debug)]
pub struct YahooChartSource {
    base_url: Url,
}

impl YahooChartSource {
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    fn chart_url(&self, symbol: &str) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::Network(format!("bad base url {}", self.base_url)))?
            .pop_if_empty()
            .extend(["v8", "finance", "chart", symbol]);
        url.query_pairs_mut()
            .append_pair("range", "1mo")
            .append_pair("interval", "1d");
        Ok(url)
    }
}

#[derive(Deserialize, Debug)]
struct ChartResponse {
    chart: ChartBody,
}

#[derive(Deserialize, Debug)]
struct ChartBody {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Deserialize, Debug)]
struct ChartError {
    description: String,
}

#[derive(Deserialize, Debug)]
struct ChartResult {
    #[serde(default)]
    meta: ChartMeta,
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Deserialize, Debug, Default)]
struct ChartMeta {
    #[serde(default)]
    gmtoffset: i64,
}

#[derive(Deserialize, Debug)]
struct Indicators {
    #[serde(default)]
    quote: Vec<Quote>,
}

#[derive(Deserialize, Debug)]
struct Quote {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

#[async_trait]
impl PriceHistorySource for YahooChartSource {
    async fn fetch_month(&self, symbol: &str) -> Result<StockSeries, FetchError> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(FetchError::EmptySymbol);
        }

        let url = self.chart_url(symbol)?;
        let response = CLIENT
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        if !response.status().is_success() {
            return Err(FetchError::Http(response.status().as_u16()));
        }

        let body: ChartResponse = response
            .json()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()))?;
        parse_chart(symbol, body)
    }
}

fn parse_chart(symbol: &str, body: ChartResponse) -> Result<StockSeries, FetchError> {
    if let Some(err) = body.chart.error {
        return Err(FetchError::Provider(err.description));
    }
    let result = body
        .chart
        .result
        .and_then(|r| r.into_iter().next())
        .ok_or(FetchError::NoData)?;
    let closes = result
        .indicators
        .quote
        .into_iter()
        .next()
        .map(|q| q.close)
        .unwrap_or_default();

    let mut points: Vec<PricePoint> = result
        .timestamp
        .iter()
        .zip(closes)
        .filter_map(|(ts, close)| {
            let close = close?;
            let date = DateTime::from_timestamp(ts + result.meta.gmtoffset, 0)?.date_naive();
            Some(PricePoint { date, close })
        })
        .collect();
    if points.is_empty() {
        return Err(FetchError::NoData);
    }
    points.sort_by_key(|p| p.date);

    Ok(StockSeries {
        symbol: symbol.to_string(),
        points,
    })
}
