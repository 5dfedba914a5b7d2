use tracing_subscriber::EnvFilter;

use diadash::{api, config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    let cfg = config::AppConfig::from_env();
    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);
    tracing::info!(upstream = %cfg.upstream_base_url, "record services gateway");

    let ctx = api::ApiContext::new(&cfg);
    let app = api::history_router(ctx);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!(addr = %cfg.bind_addr, "history API listening");
    axum::serve(listener, app).await?;

    Ok(())
}
