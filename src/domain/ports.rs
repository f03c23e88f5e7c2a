use crate::domain::model::Choice;

/// Supplies the opponent's pick for a round.
pub trait ChoiceSource {
    fn next_choice(&mut self) -> Choice;
}

pub trait ConfigProvider {
    fn seed(&self) -> Option<u64>;
    fn retry(&self) -> bool;
    fn max_attempts(&self) -> usize;
}
