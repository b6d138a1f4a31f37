//! Search SearchTruth.com from the command line.

use searchtruth::AppConfig;
use searchtruth::cli::{self, Command};
use searchtruth_engine::Engine;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout stays clean for results and --json.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("searchtruth=info,searchtruth_engine=info")),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("searchtruth failed: {e}");
        std::process::exit(1);
    }
}

async fn run() -> searchtruth::Result<()> {
    let invocation = cli::parse_args(std::env::args().skip(1))?;
    if invocation.command == Command::Help {
        println!("{}", cli::USAGE);
        return Ok(());
    }

    let config = AppConfig::load(invocation.config_path.as_deref())?;
    let engine = Engine::from_config(&config.client)?;
    let output = cli::execute(&engine, &invocation, &config).await?;
    println!("{output}");
    Ok(())
}
