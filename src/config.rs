use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::{RankError, Result};
use crate::io;

/// Configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = ".rankmap.toml";

/// Settings loaded from `.rankmap.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RankmapConfig {
    #[serde(default)]
    pub input: InputConfig,
}

/// Input table settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Score table read when no path is given on the command line
    #[serde(default = "default_input_path")]
    pub path: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input_path(),
        }
    }
}

fn default_input_path() -> PathBuf {
    PathBuf::from("scores.tsv")
}

/// Load the configuration from `dir`.
///
/// A missing file yields the built-in defaults; a present but unparsable
/// file is a configuration error.
pub fn load_config(dir: &Path) -> Result<RankmapConfig> {
    let path = dir.join(CONFIG_FILE);
    if !io::file_exists(&path) {
        return Ok(RankmapConfig::default());
    }

    let content = io::read_file(&path)
        .map_err(|e| RankError::Config(format!("cannot read {}: {e}", path.display())))?;
    toml::from_str(&content)
        .map_err(|e| RankError::Config(format!("invalid {}: {e}", path.display())))
}
