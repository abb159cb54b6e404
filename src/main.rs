mod config;
mod extractor;
mod gemini;
mod llm_client;
mod markdown;
mod models;
mod processor;
mod prompt;
mod request_id;
mod router;

use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use config::Config;
use router::process_content;
use std::str::FromStr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(name = "content-processor")]
#[command(about = "Gemini-backed content processing service")]
struct Args {
    #[arg(short, long, default_value = "0.0.0.0")]
    ip: String,

    #[arg(short, long, default_value = "8000")]
    port: u16,

    /// Path to config file
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// trace, debug, info, warn, error
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// socks and http proxy, example: socks5://192.168.0.2:10080
    #[arg(long)]
    proxy: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = Level::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using INFO level.", args.log_level);
        Level::INFO
    });
    tracing_subscriber::fmt().with_max_level(log_level).init();

    // Configuration is read once at startup and stays read-only.
    let config = Config::from_file(&args.config)?;
    info!("Configuration loaded successfully from: {}", args.config);

    let client_builder = reqwest::Client::builder();
    let client_builder = if let Some(proxy) = &args.proxy {
        let proxy = reqwest::Proxy::all(proxy).expect("Failed to create proxy");
        client_builder.proxy(proxy)
    } else {
        client_builder
    };
    let http_client = Arc::new(client_builder.build().expect("Failed to build HTTP client"));

    let llm_client = llm_client::GeminiClient::new(http_client, &config.gemini);
    let app_state = router::AppState {
        processor: Arc::new(processor::ContentProcessor::new(llm_client)),
    };

    let app = Router::new()
        .route("/v1/process", post(process_content))
        .route("/health", get(|| async { "OK" }))
        .layer(axum::middleware::from_fn(request_id::inject_request_id))
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let bind_address = format!("{}:{}", args.ip, args.port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Server started on http://{}", bind_address);

    axum::serve(listener, app).await?;
    Ok(())
}
