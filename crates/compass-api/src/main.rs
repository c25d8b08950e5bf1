use std::env;

use tracing_subscriber::EnvFilter;

use compass_api::config::CompassConfig;
use compass_api::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging (CloudWatch under Lambda, stdout elsewhere)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = CompassConfig::load()?;
    let state = AppState::from_config(&config).await;
    let app = compass_api::router(state);

    if env::var_os("AWS_LAMBDA_RUNTIME_API").is_some() {
        tracing::info!("starting under the Lambda runtime");
        return lambda_http::run(app).await.map_err(|e| eyre::eyre!(e));
    }

    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr).await?;
    tracing::info!(addr = %config.server.bind_addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
