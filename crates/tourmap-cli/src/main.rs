mod render;
mod search;
mod translate;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "tourmap")]
#[command(about = "Find points of interest around a place")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Geocode a place and list five points of interest around it.
    Search {
        /// Free-text place name, e.g. `Da Nang` or `Hội An`.
        place: Vec<String>,
        /// Print the result as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Translate a short text.
    Translate {
        text: Vec<String>,
        #[arg(long, default_value = tourmap_translate::DEFAULT_SOURCE_LANG)]
        from: String,
        #[arg(long, default_value = tourmap_translate::DEFAULT_TARGET_LANG)]
        to: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = tourmap_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(env = %config.env, "configuration loaded");

    match cli.command {
        Commands::Search { place, json } => {
            search::run_search(&config, &place.join(" "), json).await?;
        }
        Commands::Translate { text, from, to } => {
            translate::run_translate(&config, &text.join(" "), &from, &to).await?;
        }
    }

    Ok(())
}
