use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pc_remote::cli::{self, Cli};
use pc_remote::config::Config;
use pc_remote::db::{ProfileStore, SqliteKeyValueStore};
use pc_remote::exec::DispatchClient;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::resolve(cli.db.clone(), cli.server.clone(), cli.debug);
    init_tracing(config.debug);

    // Create parent directory if it doesn't exist
    if let Some(parent) = config.db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let store = ProfileStore::new(SqliteKeyValueStore::new(&config.db_path)?);
    let mut client = DispatchClient::new(&config.server_address(store.backend())?);
    cli::handle_command(cli.command, &store, &mut client).await?;

    Ok(())
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("pc_remote=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
