mod backend;
mod config;
mod models;
mod run;
mod ui;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "finn_dash=info,tower_http=info";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();
    let config = config::Config::load()?;

    match args.len() {
        1 => run::as_server(config).await,
        2.. => run::as_cli(&args, config).await,
        _ => {
            eprintln!("Usage: finn-dash [command]");
            Ok(())
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
