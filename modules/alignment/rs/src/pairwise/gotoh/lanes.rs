use std::ops::Range;

use crate::Score;

/// Score of unreachable cells. Far enough from `Score::MIN` that adding penalties never overflows.
pub const NEG_INF: Score = Score::MIN / 4;

/// Add `delta` to a lane value; unreachable values stay unreachable.
#[inline(always)]
pub fn extend(score: Score, delta: Score) -> Score {
    if score <= NEG_INF {
        NEG_INF
    } else {
        score.saturating_add(delta).max(NEG_INF)
    }
}

/// DP lanes, listed in tie-break precedence order.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Lane {
    /// Ends with a match or a mismatch
    Match,
    /// Ends with a short gap consuming the reference
    Deletion,
    /// Ends with a long gap consuming the reference
    LongGap,
    /// Ends with a gap consuming the query
    Insertion,
}

impl Lane {
    pub const PRECEDENCE: [Lane; 4] = [Lane::Match, Lane::Deletion, Lane::LongGap, Lane::Insertion];
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Cell {
    pub m: Score,
    pub d: Score,
    pub l: Score,
    pub i: Score,
}

impl Cell {
    pub const UNREACHABLE: Cell = Cell {
        m: NEG_INF,
        d: NEG_INF,
        l: NEG_INF,
        i: NEG_INF,
    };

    #[inline(always)]
    pub fn get(&self, lane: Lane) -> Score {
        match lane {
            Lane::Match => self.m,
            Lane::Deletion => self.d,
            Lane::LongGap => self.l,
            Lane::Insertion => self.i,
        }
    }

    /// Highest lane value; ties go to the lane that comes first in precedence order.
    #[inline(always)]
    pub fn best(&self) -> (Lane, Score) {
        let mut best = (Lane::Match, self.m);
        for lane in &Lane::PRECEDENCE[1..] {
            let score = self.get(*lane);
            if score > best.1 {
                best = (*lane, score);
            }
        }
        best
    }

    /// First lane in precedence order holding exactly `score`.
    #[inline(always)]
    pub fn lane_with(&self, score: Score) -> Option<Lane> {
        Lane::PRECEDENCE
            .into_iter()
            .find(|lane| self.get(*lane) == score)
    }

    #[inline(always)]
    pub fn is_reachable(&self) -> bool {
        self.best().1 > NEG_INF
    }
}

/// Shape of the DP matrix. With a band, only cells with `|row - col| <= band` are stored and
/// every row keeps a fixed-width window of columns.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Layout {
    rows: usize,
    cols: usize,
    band: Option<usize>,
    width: usize,
}

impl Layout {
    pub fn new(rows: usize, cols: usize, band: Option<usize>) -> Self {
        let width = match band {
            Some(band) => cols.min(band.saturating_mul(2).saturating_add(1)),
            None => cols,
        };
        Self {
            rows,
            cols,
            band,
            width,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Stored columns of the given row.
    #[inline(always)]
    pub fn columns(&self, row: usize) -> Range<usize> {
        match self.band {
            None => 0..self.cols,
            Some(band) => {
                let start = row.saturating_sub(band).min(self.cols);
                let end = row.saturating_add(band).saturating_add(1).min(self.cols);
                start..end
            }
        }
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows {
            return None;
        }
        let columns = self.columns(row);
        if columns.contains(&col) {
            Some(row * self.width + (col - columns.start))
        } else {
            None
        }
    }
}

/// Score lanes of one alignment call.
#[derive(Clone, Debug)]
pub struct Lanes {
    layout: Layout,
    cells: Vec<Cell>,
}

impl Lanes {
    pub fn new(layout: Layout) -> Self {
        Self {
            cells: vec![Cell::UNREACHABLE; layout.rows * layout.width],
            layout,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Cell at the given position; cells outside the matrix or the band are unreachable.
    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        match self.layout.index(row, col) {
            Some(index) => self.cells[index],
            None => Cell::UNREACHABLE,
        }
    }

    /// Stores a cell. Writes outside the band are dropped.
    #[inline(always)]
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if let Some(index) = self.layout.index(row, col) {
            self.cells[index] = cell;
        }
    }
}
