use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use rankmap::cli::{Cli, Commands};
use rankmap::commands;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rank { path, verbosity } => {
            init_logging(verbosity);
            commands::rank::run(commands::rank::RankConfig { path })
        }
        Commands::Init { force } => commands::init::init_config(force),
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG still overrides the flag-derived level
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
