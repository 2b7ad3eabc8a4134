//! Gotoh dynamic programming with affine gaps and an optional long-gap lane.
//!
//! Rows follow the reference, columns follow the query. Every cell keeps four lanes: `M` (ends
//! with a match or a mismatch), `D` (short deletion), `L` (long deletion) and `I` (insertion).
//! Deletions of length `L` score `max(D, L)`, which is exactly the long-gap cost curve.

use tralign_core_rs::alignment::Alignable;

use crate::pairwise::{AlignError, Scheme};

pub use fill::fill;
pub use lanes::{Cell, Lane, Lanes, Layout, NEG_INF};
pub use mode::Mode;
pub use traceback::{traceback, Trace};

mod fill;
mod lanes;
mod mode;
mod traceback;

/// Fill the lanes and trace back one optimal path.
pub fn run<R, Q>(
    scheme: &Scheme,
    mode: Mode,
    reference: &R,
    query: &Q,
    band: Option<usize>,
) -> Result<Trace, AlignError>
where
    R: Alignable<Symbol = u8>,
    Q: Alignable<Symbol = u8>,
{
    match mode {
        Mode::Global if reference.is_empty() && query.is_empty() => {
            return Err(AlignError::no_alignment("both sequences are empty"));
        }
        Mode::SemiGlobal if query.is_empty() => {
            return Err(AlignError::no_alignment("the query is empty"));
        }
        Mode::Local if reference.is_empty() || query.is_empty() => {
            return Err(AlignError::no_alignment(
                "local alignment needs two non-empty sequences",
            ));
        }
        _ => {}
    }

    let lanes = fill(scheme, mode, reference, query, band);
    traceback(&lanes, scheme, mode, reference, query)
}
