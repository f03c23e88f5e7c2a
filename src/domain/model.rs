use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const INVALID_INPUT_MESSAGE: &str = "Invalid input. Please enter rock, paper, or scissors.";
pub const INVALID_COMPUTER_CHOICE_MESSAGE: &str = "Error: Computer choice is invalid.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    pub fn label(self) -> &'static str {
        match self {
            Choice::Rock => "rock",
            Choice::Paper => "paper",
            Choice::Scissors => "scissors",
        }
    }

    /// The choice this one defeats: rock > scissors > paper > rock.
    pub fn beats(self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Scissors => Choice::Paper,
            Choice::Paper => Choice::Rock,
        }
    }

    pub fn against(self, other: Choice) -> Outcome {
        if self == other {
            Outcome::Tie
        } else if self.beats() == other {
            Outcome::Win
        } else {
            Outcome::Loss
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidChoice(pub String);

impl fmt::Display for InvalidChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not one of rock, paper, scissors", self.0)
    }
}

impl std::error::Error for InvalidChoice {}

// 大小寫敏感，完全比對
impl FromStr for Choice {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rock" => Ok(Choice::Rock),
            "paper" => Ok(Choice::Paper),
            "scissors" => Ok(Choice::Scissors),
            other => Err(InvalidChoice(other.to_string())),
        }
    }
}

/// Outcome of one choice against another, from the first player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
    Tie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundResult {
    UserWins,
    ComputerWins,
    Tie,
    InvalidUserInput,
    InvalidComputerChoice,
}

impl RoundResult {
    pub fn message(self) -> &'static str {
        match self {
            RoundResult::UserWins => "You win!",
            RoundResult::ComputerWins => "Computer wins!",
            RoundResult::Tie => "It's a tie!",
            RoundResult::InvalidUserInput => INVALID_INPUT_MESSAGE,
            RoundResult::InvalidComputerChoice => INVALID_COMPUTER_CHOICE_MESSAGE,
        }
    }

    pub fn is_valid_round(self) -> bool {
        !matches!(
            self,
            RoundResult::InvalidUserInput | RoundResult::InvalidComputerChoice
        )
    }
}

impl From<Outcome> for RoundResult {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Win => RoundResult::UserWins,
            Outcome::Loss => RoundResult::ComputerWins,
            Outcome::Tie => RoundResult::Tie,
        }
    }
}

impl fmt::Display for RoundResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// One played round, as printed with `--format json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundReport {
    pub user_choice: String,
    pub computer_choice: Choice,
    pub result: RoundResult,
    pub message: String,
}

impl RoundReport {
    pub fn new(user_choice: impl Into<String>, computer_choice: Choice, result: RoundResult) -> Self {
        Self {
            user_choice: user_choice.into(),
            computer_choice,
            result,
            message: result.message().to_string(),
        }
    }
}
