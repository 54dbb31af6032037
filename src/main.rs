use anyhow::Result;
use tracing::info;

use quotebot::core::config::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    quotebot::setup_logging();

    let config = AppConfig::from_env()?;
    info!(proxy = config.proxy.is_some(), "configuration loaded");

    quotebot::telegram::run_bot(config).await?;

    Ok(())
}
