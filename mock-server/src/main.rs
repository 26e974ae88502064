use anyhow::{anyhow, Context};
use mock_server::ListShape;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let shape = match std::env::var("TODO_LIST_SHAPE") {
        Ok(name) => name.parse::<ListShape>().map_err(|e| anyhow!(e))?,
        Err(_) => ListShape::default(),
    };
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    info!(%addr, ?shape, "listening");
    mock_server::run(listener, shape).await.context("server shutdown")
}
