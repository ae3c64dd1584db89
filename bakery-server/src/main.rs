use anyhow::Context;
use bakery_server::{Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, work dir, logging) and config
    let config = setup_environment().context("Failed to set up environment")?;

    print_banner();
    tracing::info!(port = config.http_port, "Bakery server starting...");

    // 2. Open storage and seed defaults
    let state = ServerState::initialize(&config)
        .with_context(|| format!("Failed to open database {}", config.db_path().display()))?;

    // 3. Serve until Ctrl+C
    let server = Server::new(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e).context("Server stopped with an error");
    }

    Ok(())
}
