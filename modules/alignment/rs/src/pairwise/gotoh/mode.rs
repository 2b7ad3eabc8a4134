use std::str::FromStr;

use derive_more::Display;
use eyre::eyre;

/// Alignment mode. Selects the boundary initialization, the optimum search and the stop rule.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Display)]
pub enum Mode {
    /// End-to-end alignment of both sequences; every terminal gap is charged.
    #[default]
    #[display("global")]
    Global,
    /// The whole query against any part of the reference; reference flanks are free.
    #[display("semi-global")]
    SemiGlobal,
    /// Best-scoring pair of substrings.
    #[display("local")]
    Local,
}

impl Mode {
    /// First-column cells start an alignment for free, i.e. the reference prefix is skipped.
    #[inline(always)]
    pub fn free_reference_start(&self) -> bool {
        matches!(self, Mode::SemiGlobal | Mode::Local)
    }

    /// First-row cells start an alignment for free, i.e. the query prefix is skipped.
    #[inline(always)]
    pub fn free_query_start(&self) -> bool {
        matches!(self, Mode::Local)
    }

    /// A diagonal cell may discard a negative prefix and start a new alignment.
    #[inline(always)]
    pub fn restarts(&self) -> bool {
        matches!(self, Mode::Local)
    }

    /// The traceback is complete once it reaches this cell.
    #[inline(always)]
    pub fn stops(&self, row: usize, col: usize) -> bool {
        match self {
            Mode::Global => row == 0 && col == 0,
            Mode::SemiGlobal => col == 0,
            Mode::Local => row == 0 || col == 0,
        }
    }
}

impl FromStr for Mode {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "global" => Ok(Mode::Global),
            "semi-global" | "semiglobal" | "glocal" => Ok(Mode::SemiGlobal),
            "local" => Ok(Mode::Local),
            _ => Err(eyre!("unknown alignment mode: {s}")),
        }
    }
}
