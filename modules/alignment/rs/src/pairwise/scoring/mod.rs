use derive_getters::Getters;

pub use gaps::{Affine, GapKind, Gaps, LaneCosts, LongGap};
pub use symbols::{Equality, Scorer};

pub use crate::Score;
use crate::pairwise::gotoh::NEG_INF;
use crate::pairwise::{AlignError, Op};

pub mod gaps;
pub mod symbols;

/// User-facing scoring configuration. Penalties are expressed as non-positive scores.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Parameters {
    pub match_score: i32,
    pub mismatch_score: i32,
    pub gap_open: i32,
    pub gap_extend: i32,
    /// Deletion bases past this run length are charged `long_gap_extend`. `None` disables long gaps.
    pub long_gap_threshold: Option<usize>,
    pub long_gap_extend: i32,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            match_score: 10,
            mismatch_score: -9,
            gap_open: -15,
            gap_extend: -4,
            long_gap_threshold: None,
            long_gap_extend: -4,
        }
    }
}

impl Parameters {
    pub fn new(match_score: i32, mismatch_score: i32, gap_open: i32, gap_extend: i32) -> Self {
        Self {
            match_score,
            mismatch_score,
            gap_open,
            gap_extend,
            long_gap_threshold: None,
            long_gap_extend: gap_extend,
        }
    }

    pub fn with_long_gaps(mut self, threshold: usize, extend: i32) -> Self {
        self.long_gap_threshold = Some(threshold);
        self.long_gap_extend = extend;
        self
    }

    pub fn without_long_gaps(mut self) -> Self {
        self.long_gap_threshold = None;
        self.long_gap_extend = self.gap_extend;
        self
    }

    pub fn validate(&self) -> Result<(), AlignError> {
        for (name, value) in [
            ("gap_open", self.gap_open),
            ("gap_extend", self.gap_extend),
            ("long_gap_extend", self.long_gap_extend),
        ] {
            if value > 0 {
                return Err(AlignError::parameter(format!(
                    "{name} is a penalty and must not be positive, got {value}"
                )));
            }
        }

        if let Some(threshold) = self.long_gap_threshold {
            if threshold == 0 {
                return Err(AlignError::parameter(
                    "long_gap_threshold must be at least 1",
                ));
            }
            // Gaps up to the threshold must score well above unreachable cells
            let at_threshold = Score::try_from(threshold)
                .ok()
                .and_then(|x| x.checked_mul(self.gap_extend as Score))
                .and_then(|x| x.checked_add(self.gap_open as Score))
                .filter(|x| *x > NEG_INF);
            if at_threshold.is_none() {
                return Err(AlignError::parameter(format!(
                    "long_gap_threshold {threshold} is too large for gap_extend {}",
                    self.gap_extend
                )));
            }
            if self.long_gap_extend < self.gap_extend {
                return Err(AlignError::parameter(format!(
                    "long_gap_extend ({}) must not penalize more than gap_extend ({})",
                    self.long_gap_extend, self.gap_extend
                )));
            }
        }
        Ok(())
    }
}

/// Validated, immutable scoring scheme shared by every alignment call.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Getters)]
pub struct Scheme {
    symbols: Equality,
    gaps: Gaps,
}

impl Scheme {
    pub fn new(parameters: &Parameters) -> Result<Self, AlignError> {
        parameters.validate()?;

        let symbols = Equality::new(
            parameters.match_score as Score,
            parameters.mismatch_score as Score,
        );
        let affine = Affine::new(parameters.gap_open as Score, parameters.gap_extend as Score);
        let long = parameters
            .long_gap_threshold
            .map(|threshold| LongGap::new(threshold, parameters.long_gap_extend as Score));
        Ok(Self {
            symbols,
            gaps: Gaps::new(affine, long),
        })
    }

    #[inline(always)]
    pub fn score(&self, reference: u8, query: u8) -> Score {
        self.symbols.score(reference, query)
    }

    #[inline(always)]
    pub fn classify(&self, reference: u8, query: u8) -> Op {
        self.symbols.classify(reference, query)
    }

    #[inline(always)]
    pub fn gap_open(&self) -> Score {
        self.gaps.open()
    }

    #[inline(always)]
    pub fn gap_extend(&self, kind: GapKind, run: usize) -> Score {
        self.gaps.extend(kind, run)
    }

    /// Total score of a gap run of the given operation. `LongGap` runs are charged the long-gap
    /// discount past the threshold, `Deletion` and `Insertion` runs are plain affine.
    pub fn gap(&self, op: Op, len: usize) -> Option<Score> {
        match op {
            Op::Insertion => Some(self.gaps.run(GapKind::Insertion, len)),
            Op::Deletion => Some(Gaps::new(self.gaps.affine, None).run(GapKind::Deletion, len)),
            Op::LongGap => Some(self.gaps.run(GapKind::Deletion, len)),
            Op::Match | Op::Mismatch | Op::Aligned => None,
        }
    }
}

impl TryFrom<Parameters> for Scheme {
    type Error = AlignError;

    fn try_from(value: Parameters) -> Result<Self, Self::Error> {
        Scheme::new(&value)
    }
}
