use crate::domain::model::{Choice, RoundResult};

/// Decides a round from raw labels.
///
/// The user's label is validated before the computer's, so an invalid user
/// choice is reported even when the computer's choice is also invalid.
pub fn evaluate(user_choice: &str, computer_choice: &str) -> RoundResult {
    let user = match user_choice.parse::<Choice>() {
        Ok(choice) => choice,
        Err(_) => return RoundResult::InvalidUserInput,
    };
    let computer = match computer_choice.parse::<Choice>() {
        Ok(choice) => choice,
        Err(_) => return RoundResult::InvalidComputerChoice,
    };

    user.against(computer).into()
}
