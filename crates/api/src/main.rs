use anyhow::Context;

use restlab_api::ServerConfig;
use restlab_auth::TokenDirectory;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    restlab_observability::init();

    let config = ServerConfig::from_env()?;
    let app = restlab_api::app::build_app(TokenDirectory::builtin());

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server terminated")?;
    Ok(())
}
