use std::fmt::{Display, Formatter};
use std::str::FromStr;

use derive_more::Into;
use eyre::{ensure, eyre, Result};
use itertools::Itertools;

use super::offset::Offset;
use super::op::Op;
use super::step::{Step, StepWithOffset, StepsWithOffsetsIterator};

/// Run-length encoded alignment path. Adjacent steps never share the same operation.
///
/// `Display` renders the conventional form (`12M3D45M2N10M`) where matches and mismatches collapse
/// into `M`. Use [`Cigar::extended`] for the lossless `=`/`X` form; both are accepted by `FromStr`.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default, Into)]
pub struct Cigar(Vec<Step>);

impl Cigar {
    /// Merge consecutive identical operations into runs.
    pub fn encode(ops: impl IntoIterator<Item = Op>) -> Self {
        let steps = ops
            .into_iter()
            .dedup_with_count()
            .map(|(len, op)| Step { op, len })
            .collect();
        Self(steps)
    }

    /// Expand every run back into unit operations.
    pub fn decode(&self) -> Vec<Op> {
        let mut ops = Vec::with_capacity(self.len());
        ops.extend(self.0.iter().flat_map(Step::ops));
        ops
    }

    pub fn from_steps(mut steps: Vec<Step>) -> Self {
        Step::collapse(&mut steps);
        Self(steps)
    }

    pub fn steps(&self) -> &[Step] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of alignment columns.
    pub fn len(&self) -> usize {
        self.0.iter().map(|x| x.len).sum()
    }

    /// Number of query symbols covered by the alignment.
    pub fn query_len(&self) -> usize {
        self.0
            .iter()
            .filter(|x| x.op.consumes_query())
            .map(|x| x.len)
            .sum()
    }

    /// Number of reference symbols covered by the alignment.
    pub fn reference_len(&self) -> usize {
        self.0
            .iter()
            .filter(|x| x.op.consumes_reference())
            .map(|x| x.len)
            .sum()
    }

    /// Steps with their start positions, given the start of the alignment in both sequences.
    pub fn tracked(&self, start: Offset) -> impl Iterator<Item = StepWithOffset> + '_ {
        StepsWithOffsetsIterator::new(self.0.iter().cloned(), start)
    }

    /// Lossless rendering with `=` for matches and `X` for mismatches.
    pub fn extended(&self) -> String {
        self.0
            .iter()
            .map(|x| format!("{}{}", x.len, x.op.extended_symbol()))
            .collect()
    }
}

impl Display for Cigar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (symbol, group) in &self.0.iter().chunk_by(|x| x.op.symbol()) {
            let len: usize = group.map(|x| x.len).sum();
            write!(f, "{len}{symbol}")?;
        }
        Ok(())
    }
}

impl FromStr for Cigar {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        ensure!(!s.is_empty(), "CIGAR string is empty");

        let mut steps = Vec::with_capacity(s.len() / 2);
        let mut len: Option<usize> = None;
        for (pos, ch) in s.char_indices() {
            if let Some(digit) = ch.to_digit(10) {
                let value = len
                    .unwrap_or(0)
                    .checked_mul(10)
                    .and_then(|x| x.checked_add(digit as usize))
                    .ok_or_else(|| eyre!("run length overflow at position {pos} in {s:?}"))?;
                len = Some(value);
                continue;
            }

            let op = Op::try_from(ch)
                .map_err(|_| eyre!("unknown CIGAR operation {ch:?} at position {pos} in {s:?}"))?;
            let len = len
                .take()
                .ok_or_else(|| eyre!("missing run length before {ch:?} at position {pos} in {s:?}"))?;
            ensure!(len > 0, "zero-length run before {ch:?} at position {pos} in {s:?}");
            steps.push(Step { op, len });
        }
        ensure!(len.is_none(), "CIGAR string {s:?} ends without an operation");

        Ok(Self::from_steps(steps))
    }
}
