use eyre::{ensure, Result};

use tralign_core_rs::alignment::Alignable;

use crate::pairwise::{Op, Scheme};
use crate::Score;

use super::cigar::Cigar;
use super::offset::Offset;
use super::step::StepWithOffset;

fn ensure_within<R, Q>(step: &StepWithOffset, reference: &R, query: &Q) -> Result<()>
where
    R: Alignable<Symbol = u8>,
    Q: Alignable<Symbol = u8>,
{
    let end = step.end();
    ensure!(
        end.reference <= reference.len() && end.query <= query.len(),
        "step {:?} starting at {:?} runs past the sequences (reference: {}, query: {})",
        step.step,
        step.start,
        reference.len(),
        query.len()
    );
    Ok(())
}

/// Recompute the score of an alignment from its CIGAR and the aligned sequences.
///
/// Explicit `=`/`X` runs must agree with the symbols they cover.
pub fn rescore<R, Q>(
    cigar: &Cigar,
    scheme: &Scheme,
    reference: &R,
    query: &Q,
    start: Offset,
) -> Result<Score>
where
    R: Alignable<Symbol = u8>,
    Q: Alignable<Symbol = u8>,
{
    let mut total: Score = 0;
    for tracked in cigar.tracked(start) {
        ensure_within(&tracked, reference, query)?;

        let (op, len) = (*tracked.step.op(), *tracked.step.len());
        if let Some(gap) = scheme.gap(op, len) {
            total += gap;
            continue;
        }

        for k in 0..len {
            let (r, q) = (
                *reference.at(tracked.start.reference + k),
                *query.at(tracked.start.query + k),
            );
            if op != Op::Aligned {
                let actual = scheme.classify(r, q);
                ensure!(
                    actual == op,
                    "{op:?} at reference {} / query {} is actually a {actual:?}",
                    tracked.start.reference + k,
                    tracked.start.query + k
                );
            }
            total += scheme.score(r, q);
        }
    }
    Ok(total)
}

/// Resolve `M` (aligned) runs into explicit match and mismatch runs.
pub fn disambiguate<R, Q>(
    cigar: &Cigar,
    scheme: &Scheme,
    reference: &R,
    query: &Q,
    start: Offset,
) -> Result<Cigar>
where
    R: Alignable<Symbol = u8>,
    Q: Alignable<Symbol = u8>,
{
    let mut ops = Vec::with_capacity(cigar.len());
    for tracked in cigar.tracked(start) {
        ensure_within(&tracked, reference, query)?;

        match tracked.step.op() {
            Op::Aligned => {
                ops.extend((0..*tracked.step.len()).map(|k| {
                    scheme.classify(
                        *reference.at(tracked.start.reference + k),
                        *query.at(tracked.start.query + k),
                    )
                }));
            }
            _ => ops.extend(tracked.step.ops()),
        }
    }
    Ok(Cigar::encode(ops))
}
