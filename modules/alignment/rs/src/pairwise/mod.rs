pub use aligner::{align, Aligner, Config};
pub use alignment::{Alignment, Cigar, Offset, Op, Step};
pub use error::{AlignError, SeqRole};
pub use gotoh::Mode;
pub use scoring::{Parameters, Scheme};

mod aligner;
pub mod alignment;
mod error;
pub mod gotoh;
pub mod scoring;
