use cat_api::{telemetry, Config};
use cat_core::CatService;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::load()?;
    telemetry::init_tracing(&config.log_level)?;

    let service = CatService::with_ureq(&config.base_url)?;
    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        backend = %service.base_url(),
        "cat-api listening"
    );

    axum::serve(listener, cat_api::app(service))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("cat-api stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for ctrl-c");
    }
}
