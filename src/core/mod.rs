pub mod evaluator;
pub mod game;
pub mod input_reader;
pub mod random_choice;

pub use crate::domain::model::{Choice, Outcome, RoundReport, RoundResult};
pub use crate::domain::ports::{ChoiceSource, ConfigProvider};
pub use crate::utils::error::Result;
