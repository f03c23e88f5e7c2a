#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

pub const DEFAULT_MAX_ATTEMPTS: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Effective settings after merging the TOML file and command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSettings {
    pub seed: Option<u64>,
    pub retry: bool,
    pub max_attempts: usize,
    pub format: OutputFormat,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            seed: None,
            retry: false,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            format: OutputFormat::Text,
        }
    }
}

impl GameSettings {
    pub fn from_toml(config: &TomlConfig) -> Self {
        let defaults = Self::default();
        let game = &config.game;
        Self {
            seed: game.seed,
            retry: game.retry.unwrap_or(defaults.retry),
            max_attempts: game.max_attempts.unwrap_or(defaults.max_attempts),
            format: game.format.unwrap_or(defaults.format),
        }
    }

    /// Command-line flags win over the file.
    #[cfg(feature = "cli")]
    pub fn resolve(cli: &cli::CliConfig) -> Result<Self> {
        let mut settings = match &cli.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Self::from_toml(&file)
            }
            None => Self::default(),
        };

        if cli.seed.is_some() {
            settings.seed = cli.seed;
        }
        if cli.retry {
            settings.retry = true;
        }
        if let Some(max_attempts) = cli.max_attempts {
            settings.max_attempts = max_attempts;
        }
        if let Some(format) = cli.format {
            settings.format = format;
        }

        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<()> {
        validate_range("max_attempts", self.max_attempts, 1, 100)
    }
}

impl ConfigProvider for GameSettings {
    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn retry(&self) -> bool {
        self.retry
    }

    fn max_attempts(&self) -> usize {
        self.max_attempts
    }
}
