use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderValue;
use finance_dashboard::market::YahooChartSource;
use finance_dashboard::{app, AppState, Config};
use reqwest::Method;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::{self, TraceLayer};
use tracing::Level;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set the log level based on the first argument
    let args: Vec<String> = std::env::args().collect();
    let mut log_level = Level::INFO;
    if args.len() >= 2 {
        log_level = match args[1].as_str() {
            "debug" => Level::DEBUG,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };
    }

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .with_max_level(log_level)
        .init();

    tracing::info!("Log level set to: {}", log_level);

    // Initalize dotenv so we can read .env file
    dotenv::dotenv().ok();
    let config = Config::from_env()?;

    // Initialize CORS layer
    let cors = CorsLayer::new()
        .allow_origin(config.frontend_url.parse::<HeaderValue>()?)
        .allow_methods(vec![Method::GET])
        .allow_headers(vec![CONTENT_TYPE]);

    tracing::info!("Market data from: {}", config.market_data_url);
    let source = YahooChartSource::new(config.market_data_url.clone());

    let app = app(AppState::new(Arc::new(source)))
        // CORS and tracing layers
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(trace::DefaultMakeSpan::new().level(Level::INFO))
                .on_response(trace::DefaultOnResponse::new().level(Level::INFO)),
        );

    // Run server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("Listening on: {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
