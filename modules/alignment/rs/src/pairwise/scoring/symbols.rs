use derive_more::Constructor;

use crate::pairwise::Op;
use crate::Score;

/// Substitution scoring between a reference and a query symbol.
pub trait Scorer {
    fn score(&self, reference: u8, query: u8) -> Score;

    /// Diagonal operation produced when the two symbols are aligned.
    fn classify(&self, reference: u8, query: u8) -> Op;
}

/// Flat match/mismatch scoring. Symbols are compared case-insensitively.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Constructor)]
pub struct Equality {
    pub equal: Score,
    pub different: Score,
}

impl Scorer for Equality {
    #[inline(always)]
    fn score(&self, reference: u8, query: u8) -> Score {
        if reference.eq_ignore_ascii_case(&query) {
            self.equal
        } else {
            self.different
        }
    }

    #[inline(always)]
    fn classify(&self, reference: u8, query: u8) -> Op {
        if reference.eq_ignore_ascii_case(&query) {
            Op::Match
        } else {
            Op::Mismatch
        }
    }
}
