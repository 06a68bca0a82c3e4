//! Private share middleware service entry point.
//!
//! Initializes tracing, loads configuration from a TOML file, builds the
//! component and the Axum router, and starts the HTTP server. With `--check`
//! it evaluates the health probe once and exits instead.

use std::process::ExitCode;

use clap::Parser;

use private_share_middleware::cli::{run_check, Args};
use private_share_middleware::config::{AppConfig, DEFAULT_CONFIG_PATH};
use private_share_middleware::http::start_server;
use private_share_middleware::routes::create_router;
use private_share_middleware::state::AppState;
use private_share_middleware::{telemetry, PrivateShareMiddleware};

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();

    // An explicit --config must exist; the default path may be absent
    let config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::load_or_default(DEFAULT_CONFIG_PATH)?,
    };

    let log_filter =
        telemetry::resolve_log_filter(args.log_level, std::env::var("RUST_LOG").ok());
    telemetry::init(&log_filter, config.logging.format);

    let component = PrivateShareMiddleware::new();

    if args.check {
        let (line, code) = run_check(&component)?;
        println!("{}", line);
        return Ok(ExitCode::from(code));
    }

    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        checks = component.check_count(),
        "Loaded configuration"
    );

    let state = AppState::new(config.clone(), component);
    let app = create_router(state);

    start_server(app, &config).await?;

    Ok(ExitCode::SUCCESS)
}
