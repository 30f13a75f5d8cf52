use std::sync::Arc;
use tracing_subscriber::prelude::*;
use wallet_backend_rs::{app::App, types::ToContext, utils::config::Config};

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wallet_backend_rs=debug,tower_http=debug".into()),
        )
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::from_env()?;
    let ctx = Arc::new(config.to_context().await?);

    App::new(ctx).serve().await?;

    Ok(())
}
