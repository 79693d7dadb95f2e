use std::sync::Arc;

use fitplan::agent::GeminiGateway;
use fitplan::config::AppConfig;
use fitplan::orchestrator::Orchestrator;
use fitplan::web::{AppState, plan_routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = AppConfig::from_env().map_err(|e| {
        eprintln!("Error: {}", e);
        eprintln!("  export GEMINI_API_KEY=...");
        e
    })?;

    eprintln!("🏋️ FitPlan v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Model: {}", config.model);
    eprintln!("   UI:    http://0.0.0.0:{}/", config.port);
    eprintln!("   API:   http://0.0.0.0:{}/api/plan\n", config.port);

    let gateway = Arc::new(GeminiGateway::new(&config.api_key)?);
    let orchestrator = Arc::new(Orchestrator::new(gateway, &config.model));

    let app = plan_routes(AppState { orchestrator });

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!(port = config.port, "FitPlan server started");
    axum::serve(listener, app).await?;

    Ok(())
}
