//! Gleaner CLI - Command-line interface for curating fact-checked
//! key-point datasets.

use clap::Parser;
use gleaner_cli::commands;
use gleaner_cli::repl;
use gleaner_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> gleaner_cli::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_default(),
    };

    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        None | Some(Command::Repl) => {
            repl::run_repl(&mut config, &formatter).await?;
        }
        Some(Command::Extract(args)) => {
            commands::execute_extract(args, &config, &formatter).await?;
        }
        Some(Command::Verify(args)) => {
            commands::execute_verify(args, &config, &formatter).await?;
        }
        Some(Command::Stats(args)) => {
            commands::execute_stats(args, &formatter).await?;
        }
        Some(Command::Convert(args)) => {
            commands::execute_convert(args, &formatter).await?;
        }
        Some(Command::Config(args)) => {
            commands::execute_config(args, &mut config, &formatter).await?;
        }
    }

    Ok(())
}
