use crate::core::evaluator::evaluate;
use crate::core::input_reader::{read_entry, read_entry_with_retry, PROMPT};
use crate::core::random_choice::RandomChoiceSource;
use crate::domain::model::RoundReport;
use crate::domain::ports::{ChoiceSource, ConfigProvider};
use crate::utils::error::Result;
use rand::rngs::StdRng;
use std::io::{BufRead, Write};

pub struct GameEngine<S: ChoiceSource> {
    source: S,
    retry: bool,
    max_attempts: usize,
}

impl<S: ChoiceSource> GameEngine<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            retry: false,
            max_attempts: 1,
        }
    }

    pub fn with_retry(mut self, max_attempts: usize) -> Self {
        self.retry = true;
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Plays one round: read the user, draw the computer, decide.
    ///
    /// Writes the prompt to `output`; the caller decides how to show the report.
    pub fn play_round<R, W>(&mut self, input: &mut R, output: &mut W) -> Result<RoundReport>
    where
        R: BufRead + ?Sized,
        W: Write + ?Sized,
    {
        let entry = if self.retry {
            read_entry_with_retry(input, output, self.max_attempts)?
        } else {
            write!(output, "{}", PROMPT)?;
            output.flush()?;
            read_entry(input)?
        };

        let computer_choice = self.source.next_choice();
        tracing::debug!("User: {:?}, computer: {}", entry.raw, computer_choice);

        let result = evaluate(&entry.raw, computer_choice.label());
        if result.is_valid_round() {
            tracing::info!("✅ Round finished: {}", result);
        } else {
            tracing::info!("Round rejected: {}", result);
        }

        Ok(RoundReport::new(entry.raw, computer_choice, result))
    }
}

impl GameEngine<RandomChoiceSource<StdRng>> {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        let engine = Self::new(RandomChoiceSource::from_seed_option(config.seed()));
        if config.retry() {
            engine.with_retry(config.max_attempts())
        } else {
            engine
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random_choice::FixedChoiceSource;
    use crate::domain::model::{Choice, RoundResult, INVALID_INPUT_MESSAGE};

    #[test]
    fn test_round_against_fixed_source() {
        let mut engine = GameEngine::new(FixedChoiceSource::new(vec![Choice::Scissors]));
        let mut input = "rock\n".as_bytes();
        let mut output = Vec::new();

        let report = engine.play_round(&mut input, &mut output).unwrap();
        assert_eq!(report.result, RoundResult::UserWins);
        assert_eq!(report.user_choice, "rock");
        assert_eq!(report.computer_choice, Choice::Scissors);
        assert_eq!(String::from_utf8(output).unwrap(), PROMPT);
    }

    #[test]
    fn test_invalid_input_is_not_an_error() {
        let mut engine = GameEngine::new(FixedChoiceSource::new(vec![Choice::Rock]));
        let mut input = "gun\n".as_bytes();
        let mut output = Vec::new();

        let report = engine.play_round(&mut input, &mut output).unwrap();
        assert_eq!(report.result, RoundResult::InvalidUserInput);
        assert_eq!(report.message, INVALID_INPUT_MESSAGE);
        assert_eq!(report.user_choice, "gun");
    }

    #[test]
    fn test_non_utf8_input_is_an_invalid_round() {
        let mut engine = GameEngine::new(FixedChoiceSource::new(vec![Choice::Rock]));
        let mut input: &[u8] = b"\xffrock\n";
        let mut output = Vec::new();

        let report = engine.play_round(&mut input, &mut output).unwrap();
        assert_eq!(report.result, RoundResult::InvalidUserInput);
    }

    #[test]
    fn test_retry_engine_recovers() {
        let mut engine =
            GameEngine::new(FixedChoiceSource::new(vec![Choice::Paper])).with_retry(3);
        let mut input = "gun\npaper\n".as_bytes();
        let mut output = Vec::new();

        let report = engine.play_round(&mut input, &mut output).unwrap();
        assert_eq!(report.result, RoundResult::Tie);
    }
}
