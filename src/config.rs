use url::Url;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";
pub const DEFAULT_MARKET_DATA_URL: &str = "https://query1.finance.yahoo.com";

/// Settings read from the environment (and `.env`, if present).
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub frontend_url: String,
    pub market_data_url: Url,
}

impl Config {
    pub fn from_env() -> Result<Self, url::ParseError> {
        Self::from_lookup(|key| dotenv::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, url::ParseError> {
        let market_data_url = lookup("MARKET_DATA_URL")
            .unwrap_or_else(|| DEFAULT_MARKET_DATA_URL.to_string());

        Ok(Config {
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            frontend_url: lookup("FRONTEND_URL")
                .unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_string()),
            market_data_url: Url::parse(&market_data_url)?,
        })
    }
}
