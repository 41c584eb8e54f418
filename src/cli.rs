use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rankmap")]
#[command(about = "Rank tab-separated score tables", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank a score table and print it
    Rank {
        /// Score table to read (defaults to the configured input path)
        path: Option<PathBuf>,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_rank_command() {
        let args = vec!["rankmap", "rank", "scores.tsv", "-vv"];

        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Rank { path, verbosity } => {
                assert_eq!(path, Some(PathBuf::from("scores.tsv")));
                assert_eq!(verbosity, 2);
            }
            _ => panic!("Expected Rank command"),
        }
    }

    #[test]
    fn test_cli_parsing_rank_without_path() {
        let args = vec!["rankmap", "rank"];

        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Rank { path, verbosity } => {
                assert_eq!(path, None);
                assert_eq!(verbosity, 0);
            }
            _ => panic!("Expected Rank command"),
        }
    }

    #[test]
    fn test_cli_parsing_init_command() {
        let args = vec!["rankmap", "init", "--force"];

        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Init { force } => {
                assert!(force);
            }
            _ => panic!("Expected Init command"),
        }
    }
}
