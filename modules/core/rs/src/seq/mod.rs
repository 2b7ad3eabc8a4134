pub use alphabet::Alphabet;
pub use sequence::{InvalidSymbol, Sequence};

mod alphabet;
mod sequence;
