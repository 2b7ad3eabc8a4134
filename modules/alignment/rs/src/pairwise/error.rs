use derive_more::{Display, Error};

use tralign_core_rs::seq::{Alphabet, InvalidSymbol};

/// Which of the two aligned sequences an error refers to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display)]
pub enum SeqRole {
    #[display("reference")]
    Reference,
    #[display("query")]
    Query,
}

/// Failures of the alignment engine. Every variant is detected before or during the matrix
/// construction; there are no partial results.
#[derive(Clone, Eq, PartialEq, Debug, Display, Error)]
pub enum AlignError {
    /// Malformed scoring configuration
    #[display("invalid scoring parameters: {reason}")]
    InvalidParameter { reason: String },
    /// A symbol outside the configured alphabet
    #[display(
        "invalid {role} sequence: symbol {:?} at position {position} is not part of the {alphabet} alphabet",
        char::from(*symbol)
    )]
    InvalidSequence {
        role: SeqRole,
        position: usize,
        symbol: u8,
        alphabet: Alphabet,
    },
    /// Degenerate input without any valid alignment path
    #[display("no alignment: {reason}")]
    NoAlignment { reason: String },
}

impl AlignError {
    pub(crate) fn parameter(reason: impl Into<String>) -> Self {
        AlignError::InvalidParameter {
            reason: reason.into(),
        }
    }

    pub(crate) fn no_alignment(reason: impl Into<String>) -> Self {
        AlignError::NoAlignment {
            reason: reason.into(),
        }
    }

    pub(crate) fn sequence(role: SeqRole, err: InvalidSymbol) -> Self {
        AlignError::InvalidSequence {
            role,
            position: err.position,
            symbol: err.symbol,
            alphabet: err.alphabet,
        }
    }
}
