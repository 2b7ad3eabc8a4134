pub use pairwise::{align, AlignError, Aligner, Alignment, Cigar, Config, Mode, Parameters};
pub use tralign_core_rs::seq::{Alphabet, Sequence};

pub mod pairwise;

/// Integer type of every alignment score and DP cell.
pub type Score = i64;
