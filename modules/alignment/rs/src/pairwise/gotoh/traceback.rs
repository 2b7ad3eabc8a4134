use std::ops::Range;

use derive_getters::{Dissolve, Getters};

use tralign_core_rs::alignment::Alignable;

use crate::pairwise::{AlignError, Op, Scheme};
use crate::Score;

use super::fill::Costs;
use super::lanes::{extend, Lane, Lanes, NEG_INF};
use super::Mode;

/// Unit operations of an optimal path together with the covered ranges of both sequences.
#[derive(Clone, Eq, PartialEq, Debug, Getters, Dissolve)]
pub struct Trace {
    score: Score,
    ops: Vec<Op>,
    reference: Range<usize>,
    query: Range<usize>,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
struct Seed {
    row: usize,
    col: usize,
    lane: Lane,
    score: Score,
}

/// Cell where the optimal path ends. Ties between cells go to the smallest row, then column.
fn seed(lanes: &Lanes, mode: Mode) -> Result<Seed, AlignError> {
    let layout = lanes.layout();
    let (rows, cols) = (layout.rows(), layout.cols());

    let mut best = Seed {
        row: rows,
        col: cols,
        lane: Lane::Match,
        score: NEG_INF,
    };
    match mode {
        Mode::Global => {
            let (lane, score) = lanes.get(rows - 1, cols - 1).best();
            best = Seed {
                row: rows - 1,
                col: cols - 1,
                lane,
                score,
            };
        }
        Mode::SemiGlobal => {
            for row in 0..rows {
                let (lane, score) = lanes.get(row, cols - 1).best();
                if score > best.score {
                    best = Seed {
                        row,
                        col: cols - 1,
                        lane,
                        score,
                    };
                }
            }
        }
        Mode::Local => {
            best.score = 0;
            for row in 1..rows {
                for col in layout.columns(row) {
                    let score = lanes.get(row, col).m;
                    if col > 0 && score > best.score {
                        best = Seed {
                            row,
                            col,
                            lane: Lane::Match,
                            score,
                        };
                    }
                }
            }
            if best.score <= 0 {
                return Err(AlignError::no_alignment(
                    "no pair of symbols scores above zero",
                ));
            }
        }
    }

    if best.score <= NEG_INF {
        return Err(AlignError::no_alignment(
            "the optimal endpoint is unreachable within the band",
        ));
    }
    Ok(best)
}

/// Walk the lanes back from the optimum and recover one optimal path.
///
/// Predecessors are re-derived from the lane values. Ties are broken by lane precedence
/// (match, deletion, long gap, insertion) and gap lanes prefer extending over opening, which
/// yields the longest gap runs. In local mode starting a new alignment wins over any predecessor
/// with the same score.
pub fn traceback<R, Q>(
    lanes: &Lanes,
    scheme: &Scheme,
    mode: Mode,
    reference: &R,
    query: &Q,
) -> Result<Trace, AlignError>
where
    R: Alignable<Symbol = u8>,
    Q: Alignable<Symbol = u8>,
{
    let seed = seed(lanes, mode)?;
    let costs = Costs::new(scheme);

    let (mut row, mut col, mut lane) = (seed.row, seed.col, seed.lane);
    let mut ops = Vec::with_capacity(row + col);
    while !mode.stops(row, col) {
        let value = lanes.get(row, col).get(lane);
        let next = match lane {
            Lane::Match => {
                let (r, q) = (*reference.at(row - 1), *query.at(col - 1));
                ops.push(scheme.classify(r, q));
                (row, col) = (row - 1, col - 1);

                let target = value - scheme.score(r, q);
                if mode.restarts() && target <= 0 {
                    break;
                }
                lanes.get(row, col).lane_with(target)
            }
            Lane::Deletion => {
                ops.push(Op::Deletion);
                let up = lanes.get(row - 1, col);
                row -= 1;

                if extend(up.d, costs.short.extend) == value {
                    Some(Lane::Deletion)
                } else if extend(up.m, costs.short.first) == value {
                    Some(Lane::Match)
                } else {
                    None
                }
            }
            Lane::LongGap => {
                ops.push(Op::LongGap);
                let up = lanes.get(row - 1, col);
                row -= 1;

                match costs.long {
                    Some(long) if extend(up.l, long.extend) == value => Some(Lane::LongGap),
                    Some(long) if extend(up.m, long.first) == value => Some(Lane::Match),
                    _ => None,
                }
            }
            Lane::Insertion => {
                ops.push(Op::Insertion);
                let left = lanes.get(row, col - 1);
                col -= 1;

                if extend(left.i, costs.short.extend) == value {
                    Some(Lane::Insertion)
                } else if extend(left.m, costs.short.first) == value {
                    Some(Lane::Match)
                } else {
                    None
                }
            }
        };

        lane = match next {
            Some(lane) => lane,
            None => {
                return Err(AlignError::no_alignment(format!(
                    "traceback lost its path at reference {row}, query {col}"
                )))
            }
        };
    }

    if ops.is_empty() {
        return Err(AlignError::no_alignment("the optimal path is empty"));
    }
    ops.reverse();

    Ok(Trace {
        score: seed.score,
        ops,
        reference: row..seed.row,
        query: col..seed.col,
    })
}
