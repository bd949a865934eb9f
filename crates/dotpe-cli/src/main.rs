mod collect;
mod lookup;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "dotpe-cli")]
#[command(about = "Collect ongoing items for a range of DotPe stores")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Walk a store-number range and write every store's ongoing items to one JSON file
    Collect {
        /// First store number (inclusive)
        #[arg(long, env = "DOTPE_START_STORE_NUMBER")]
        start: Option<u64>,
        /// Last store number (inclusive)
        #[arg(long, env = "DOTPE_END_STORE_NUMBER")]
        end: Option<u64>,
        /// Output file; falls back to DOTPE_OUTPUT_PATH
        #[arg(long)]
        output: Option<PathBuf>,
        /// Print the planned run without making requests or writing the file
        #[arg(long)]
        dry_run: bool,
    },
    /// Resolve and fetch a single store and print its ongoing items
    Lookup {
        /// Public store number to look up
        store_number: u64,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load .env before parsing so clap's env fallbacks can see it.
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = dotpe_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        Some(Commands::Collect {
            start,
            end,
            output,
            dry_run,
        }) => {
            let range = collect::resolve_range(start, end)?;
            let output = output.unwrap_or_else(|| config.output_path.clone());
            collect::run_collect(&config, range, &output, dry_run).await?;
        }
        Some(Commands::Lookup { store_number }) => {
            lookup::run_lookup(&config, store_number).await?;
        }
        None => println!("dotpe-cli: run `dotpe-cli collect --start <N> --end <M>` or see --help"),
    }

    Ok(())
}
