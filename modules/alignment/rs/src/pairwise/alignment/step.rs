use derive_getters::{Dissolve, Getters};
use derive_more::{Constructor, From, Into};
use eyre::Result;

use super::offset::Offset;
use super::op::Op;

/// An alignment step: a run of identical operations.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Getters, Dissolve)]
pub struct Step {
    /// The alignment operation
    pub(super) op: Op,
    /// The length of the run, e.g. the number of consequent matches or gaps.
    /// Guaranteed to be greater than zero.
    pub(super) len: usize,
}

impl Step {
    pub fn new(op: Op, len: usize) -> Result<Self> {
        if len == 0 {
            return Err(eyre::eyre!("Step length must be greater than zero"));
        }
        Ok(Self { op, len })
    }

    /// Merge adjacent steps with identical operations in place.
    pub fn collapse(steps: &mut Vec<Step>) {
        if steps.len() < 2 {
            return;
        }

        let mut writep = 0;
        for readp in 1..steps.len() {
            if steps[writep].op == steps[readp].op {
                steps[writep].len += steps[readp].len;
            } else {
                writep += 1;
                steps[writep] = steps[readp];
            }
        }
        steps.truncate(writep + 1);
    }

    /// Unit operations of the step.
    pub fn ops(&self) -> impl Iterator<Item = Op> {
        std::iter::repeat_n(self.op, self.len)
    }
}

/// A tracked alignment step with known start position (offset) in the sequence coordinates
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Getters, Dissolve, Constructor, From, Into)]
pub struct StepWithOffset {
    pub step: Step,
    pub start: Offset,
}

impl StepWithOffset {
    /// Get the end position of the step in sequence coordinates (e.g. the alignment position after applying the step)
    pub fn end(&self) -> Offset {
        self.start.apply(&self.step)
    }
}

/// An iterator that keeps track of the current offset in the alignment
pub struct StepsWithOffsetsIterator<T: Iterator<Item: Into<Step>>> {
    iter: T,
    offset: Offset,
}

impl<T: Iterator<Item: Into<Step>>> StepsWithOffsetsIterator<T> {
    pub fn new(iter: T, offset: Offset) -> Self {
        Self { iter, offset }
    }
}

impl<T: Iterator<Item: Into<Step>>> Iterator for StepsWithOffsetsIterator<T> {
    type Item = StepWithOffset;

    fn next(&mut self) -> Option<Self::Item> {
        let step = StepWithOffset {
            start: self.offset,
            step: self.iter.next()?.into(),
        };
        self.offset = step.end();
        Some(step)
    }
}
