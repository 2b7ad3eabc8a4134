use std::ops::Range;

use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;

use crate::Score;

use super::cigar::Cigar;
use super::offset::Offset;
use super::step::StepWithOffset;

/// An optimal pairwise alignment between a reference and a query.
#[derive(Clone, Eq, PartialEq, Debug, Getters, Constructor, Dissolve)]
pub struct Alignment {
    score: Score,
    cigar: Cigar,
    /// Half-open range of the query covered by the alignment
    query: Range<usize>,
    /// Half-open range of the reference covered by the alignment
    reference: Range<usize>,
}

impl Alignment {
    /// Checks if the alignment is empty.
    pub fn is_empty(&self) -> bool {
        self.cigar.is_empty()
    }

    /// Start of the alignment in both sequences.
    pub fn start(&self) -> Offset {
        Offset::new(self.reference.start, self.query.start)
    }

    /// Returns the lossless RLE representation of the alignment.
    pub fn rle(&self) -> String {
        self.cigar.extended()
    }

    /// Returns alignment steps with tracked sequence coordinates.
    pub fn tracked_steps(&self) -> impl Iterator<Item = StepWithOffset> + '_ {
        self.cigar.tracked(self.start())
    }
}
