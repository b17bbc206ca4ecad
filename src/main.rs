use anyhow::Result;
use clap::{Parser, Subcommand};

/// greenloop - community sustainability tracking
#[derive(Parser)]
#[command(name = "greenloop")]
#[command(about = "Community sustainability tracking and moderation core", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = greenloop::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    greenloop::observability::init_observability(&config.observability.log_level)?;

    match cli.command {
        Commands::Migrate => greenloop::migrate::migrate(&config).await,
        Commands::Reset => greenloop::migrate::reset(&config).await,
    }
}
