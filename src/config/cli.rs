use crate::config::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_range, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "rps-round")]
#[command(about = "Play one round of rock-paper-scissors against the computer")]
pub struct CliConfig {
    #[arg(long, help = "TOML file with a [game] table")]
    pub config: Option<String>,

    #[arg(long, help = "Seed for the computer's choice")]
    pub seed: Option<u64>,

    #[arg(long, help = "Ask again until a valid choice is entered")]
    pub retry: bool,

    #[arg(long)]
    pub max_attempts: Option<usize>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        if let Some(max_attempts) = self.max_attempts {
            validate_range("max_attempts", max_attempts, 1, 100)?;
        }
        Ok(())
    }
}
