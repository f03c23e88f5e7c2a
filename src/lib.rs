pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::{GameSettings, OutputFormat};
pub use core::evaluator::evaluate;
pub use core::game::GameEngine;
pub use core::input_reader::{read_choice, read_choice_with_retry};
pub use core::random_choice::{random_choice, FixedChoiceSource, RandomChoiceSource};
pub use domain::model::{Choice, RoundReport, RoundResult};
pub use utils::error::{GameError, Result};
