use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }

    pub fn from_env() -> Self {
        // NO_COLOR wins (per no-color.org standard)
        if env::var("NO_COLOR").is_ok() {
            return Self::Never;
        }

        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                return Self::Always;
            }
        }

        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                return Self::Never;
            }
        }

        Self::Auto
    }
}

fn detect_color_support() -> bool {
    std::io::stdout().is_terminal()
}
