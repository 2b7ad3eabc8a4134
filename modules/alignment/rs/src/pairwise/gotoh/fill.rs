use tralign_core_rs::alignment::Alignable;

use crate::pairwise::scoring::{LaneCosts, Scheme};
use crate::Score;

use super::lanes::{extend, Cell, Layout, Lanes, NEG_INF};
use super::Mode;

/// Per-lane gap costs derived from the scoring scheme.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(super) struct Costs {
    pub short: LaneCosts,
    pub long: Option<LaneCosts>,
}

impl Costs {
    pub fn new(scheme: &Scheme) -> Self {
        Self {
            short: scheme.gaps().short_lane(),
            long: scheme.gaps().long_lane(),
        }
    }

    #[inline(always)]
    pub fn deletion(&self, up: &Cell) -> Score {
        extend(up.m, self.short.first).max(extend(up.d, self.short.extend))
    }

    #[inline(always)]
    pub fn long_gap(&self, up: &Cell) -> Score {
        match self.long {
            Some(long) => extend(up.m, long.first).max(extend(up.l, long.extend)),
            None => NEG_INF,
        }
    }

    #[inline(always)]
    pub fn insertion(&self, left: &Cell) -> Score {
        extend(left.m, self.short.first).max(extend(left.i, self.short.extend))
    }
}

/// Fill the score lanes row by row. Rows follow the reference, columns follow the query.
pub fn fill<R, Q>(
    scheme: &Scheme,
    mode: Mode,
    reference: &R,
    query: &Q,
    band: Option<usize>,
) -> Lanes
where
    R: Alignable<Symbol = u8>,
    Q: Alignable<Symbol = u8>,
{
    let layout = Layout::new(reference.len() + 1, query.len() + 1, band);
    let costs = Costs::new(scheme);
    let mut lanes = Lanes::new(layout);

    for row in 0..layout.rows() {
        for col in layout.columns(row) {
            let up = match row {
                0 => Cell::UNREACHABLE,
                _ => lanes.get(row - 1, col),
            };
            let left = match col {
                0 => Cell::UNREACHABLE,
                _ => lanes.get(row, col - 1),
            };

            let m = match (row, col) {
                (0, 0) => 0,
                (_, 0) if mode.free_reference_start() => 0,
                (0, _) if mode.free_query_start() => 0,
                (0, _) | (_, 0) => NEG_INF,
                _ => {
                    let mut prev = lanes.get(row - 1, col - 1).best().1;
                    if mode.restarts() {
                        prev = prev.max(0);
                    }
                    extend(
                        prev,
                        scheme.score(*reference.at(row - 1), *query.at(col - 1)),
                    )
                }
            };

            let cell = Cell {
                m,
                d: costs.deletion(&up),
                l: costs.long_gap(&up),
                i: costs.insertion(&left),
            };
            lanes.set(row, col, cell);
        }
    }
    lanes
}
