use derive_more::Constructor;

use crate::Score;

/// Sequence consumed by a gap run.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum GapKind {
    /// Query symbols against a gap in the reference
    Insertion,
    /// Reference symbols against a gap in the query. Only deletions can become long gaps.
    Deletion,
}

/// Classic affine gap: a gap of length `L` scores `open + L * extend`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Constructor)]
pub struct Affine {
    pub open: Score,
    pub extend: Score,
}

/// Discounted per-base rate for deletion bases past `threshold`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Constructor)]
pub struct LongGap {
    pub threshold: usize,
    pub extend: Score,
}

/// Score added when a DP lane opens a gap (`first`) or extends it by one base (`extend`).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct LaneCosts {
    pub first: Score,
    pub extend: Score,
}

/// Gap scoring. All functions are pure and position independent.
///
/// A deletion of length `L > T` scores `open + T * extend + (L - T) * long.extend`. This is the
/// upper envelope of two affine lines, `open + L * extend` and
/// `open + T * (extend - long.extend) + L * long.extend`, which lets the DP track long gaps in a
/// separate affine lane instead of carrying run lengths around.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Constructor)]
pub struct Gaps {
    pub affine: Affine,
    pub long: Option<LongGap>,
}

impl Gaps {
    /// Charged once per gap run.
    #[inline(always)]
    pub fn open(&self) -> Score {
        self.affine.open
    }

    /// Score of the `run`-th (1-based) base of a gap.
    #[inline(always)]
    pub fn extend(&self, kind: GapKind, run: usize) -> Score {
        match (kind, self.long) {
            (GapKind::Deletion, Some(long)) if run > long.threshold => long.extend,
            _ => self.affine.extend,
        }
    }

    /// Total score of a gap run of the given length (zero for an empty run).
    pub fn run(&self, kind: GapKind, len: usize) -> Score {
        if len == 0 {
            return 0;
        }
        let short = len as Score;
        match (kind, self.long) {
            (GapKind::Deletion, Some(long)) if len > long.threshold => {
                let threshold = long.threshold as Score;
                self.affine.open + threshold * self.affine.extend + (short - threshold) * long.extend
            }
            _ => self.affine.open.saturating_add(short.saturating_mul(self.affine.extend)),
        }
    }

    /// Costs of the short-gap lanes (insertions and short deletions).
    pub fn short_lane(&self) -> LaneCosts {
        LaneCosts {
            first: self.affine.open + self.affine.extend,
            extend: self.affine.extend,
        }
    }

    /// Costs of the long-deletion lane, if long gaps are enabled.
    pub fn long_lane(&self) -> Option<LaneCosts> {
        self.long.map(|long| {
            // Thresholds beyond the score range never pay off; the lane saturates instead
            let threshold = Score::try_from(long.threshold).unwrap_or(Score::MAX);
            let open = threshold
                .saturating_mul(self.affine.extend - long.extend)
                .saturating_add(self.affine.open);
            LaneCosts {
                first: open.saturating_add(long.extend),
                extend: long.extend,
            }
        })
    }
}
