use derive_getters::Dissolve;
use derive_more::{Constructor, From, Into};

use super::step::Step;

/// Position of the alignment in sequence coordinates
#[derive(
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Debug,
    Hash,
    Default,
    Constructor,
    Dissolve,
    From,
    Into,
)]
pub struct Offset {
    pub reference: usize,
    pub query: usize,
}

impl Offset {
    pub fn apply(mut self, step: &Step) -> Self {
        step.op()
            .apply(&mut self.reference, &mut self.query, *step.len());
        self
    }
}
