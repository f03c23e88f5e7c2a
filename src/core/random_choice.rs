use crate::domain::model::Choice;
use crate::domain::ports::ChoiceSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks a choice with the thread-local generator.
pub fn random_choice() -> Choice {
    choose_with(&mut rand::thread_rng())
}

pub fn choose_with<R: Rng + ?Sized>(rng: &mut R) -> Choice {
    Choice::ALL[rng.gen_range(0..Choice::ALL.len())]
}

#[derive(Debug, Clone)]
pub struct RandomChoiceSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomChoiceSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomChoiceSource<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => {
                tracing::debug!("Using seeded computer choices (seed={})", seed);
                Self::seeded(seed)
            }
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> ChoiceSource for RandomChoiceSource<R> {
    fn next_choice(&mut self) -> Choice {
        choose_with(&mut self.rng)
    }
}

/// Replays a fixed list of choices, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct FixedChoiceSource {
    choices: Vec<Choice>,
    next: usize,
}

impl FixedChoiceSource {
    pub fn new(choices: Vec<Choice>) -> Self {
        Self { choices, next: 0 }
    }
}

impl ChoiceSource for FixedChoiceSource {
    fn next_choice(&mut self) -> Choice {
        if self.choices.is_empty() {
            return Choice::Rock;
        }
        let choice = self.choices[self.next % self.choices.len()];
        self.next += 1;
        choice
    }
}
