use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lendsync::config::Config;
use lendsync::error::{LendSyncError, Result};
use lendsync::factories::sync_factory;
use lendsync::storage::MemoryStore;

#[derive(Parser, Debug)]
#[command(name = "lendsyncd")]
#[command(about = "Lender-service model synchronization daemon")]
struct Cli {
    #[arg(long, default_value = "./config.json")]
    config: String,

    #[arg(long, env = "LENDSYNC_ENV")]
    env: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_file(&cli.config)?;
    let env = config.environment(cli.env.as_deref())?;

    let fallback = if env.kafka.verbose.unwrap_or(false) {
        "debug,lendsync=debug"
    } else {
        "info,lendsync=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let store = Arc::new(MemoryStore::new());
    let runtime = sync_factory::start_sync(&env.kafka, store.clone(), store)?;

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| LendSyncError::Runtime(e.to_string()))?;
    info!("shutting down model synchronization");
    runtime.shutdown().await;
    Ok(())
}
