use outreach_server::{build_router, telemetry, ServerConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), String> {
    telemetry::init_tracing();

    let config = ServerConfig::default();
    let app = build_router(&config);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .map_err(|e| format!("bind {}: {e}", config.bind_addr))?;

    info!(
        addr = %config.bind_addr,
        data_root = %config.data_root.display(),
        "outreach-server listening"
    );
    axum::serve(listener, app).await.map_err(|e| e.to_string())
}
