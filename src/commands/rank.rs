use crate::config;
use crate::formatting::ColorMode;
use crate::io::output::{OutputWriter, TerminalWriter};
use crate::ranking::RankBuilder;
use anyhow::Result;
use log::debug;
use std::path::{Path, PathBuf};

/// Settings for one ranking run.
#[derive(Debug, Clone, Default)]
pub struct RankConfig {
    /// Score table given on the command line, if any
    pub path: Option<PathBuf>,
}

pub fn run(config: RankConfig) -> Result<()> {
    let input = resolve_input_path(config.path, Path::new("."))?;
    debug!("ranking {}", input.display());

    if !ColorMode::from_env().should_use_color() {
        colored::control::set_override(false);
    }

    let records = RankBuilder::new(input).build()?;

    let stdout = std::io::stdout();
    let mut writer = TerminalWriter::new(stdout.lock());
    writer.write_ranking(&records)
}

/// A path on the command line wins over `.rankmap.toml`, which wins over
/// the built-in default.
fn resolve_input_path(cli_path: Option<PathBuf>, dir: &Path) -> Result<PathBuf> {
    match cli_path {
        Some(path) => Ok(path),
        None => Ok(config::load_config(dir)?.input.path),
    }
}
