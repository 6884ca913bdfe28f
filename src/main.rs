use slot_status_panel::{
    config::{resolve_base_url, resolve_port, resolve_view},
    router, AppState, PollerConfig, SlotPanel, SlotPoller,
};
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let view = resolve_view()?;
    let base_url = resolve_base_url()?;
    let config = PollerConfig::new(base_url.clone()).with_view(view);
    let addr = SocketAddr::from(([0, 0, 0, 0], resolve_port()));

    let panel = SlotPanel::new(config.container_id.clone());
    let poller = SlotPoller::new(config.clone(), base_url, panel.clone()).start();
    let app = router(AppState::new(config, panel));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    poller.stop().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
