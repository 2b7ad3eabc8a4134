use derive_getters::{Dissolve, Getters};
use derive_more::{Display, Error};

use super::Alphabet;

/// A symbol that does not belong to the requested alphabet.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display, Error)]
#[display("symbol {:?} at position {position} is not part of the {alphabet} alphabet", char::from(*symbol))]
pub struct InvalidSymbol {
    pub position: usize,
    pub symbol: u8,
    pub alphabet: Alphabet,
}

/// An immutable, validated sequence of upper-case symbols.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Getters, Dissolve)]
pub struct Sequence {
    alphabet: Alphabet,
    #[getter(skip)]
    symbols: Vec<u8>,
}

impl Sequence {
    /// Validates every symbol against the alphabet and stores the upper-cased copy.
    pub fn new(alphabet: Alphabet, raw: impl AsRef<[u8]>) -> Result<Self, InvalidSymbol> {
        let raw = raw.as_ref();
        let mut symbols = Vec::with_capacity(raw.len());
        for (position, &symbol) in raw.iter().enumerate() {
            match alphabet.normalize(symbol) {
                Some(x) => symbols.push(x),
                None => {
                    return Err(InvalidSymbol {
                        position,
                        symbol,
                        alphabet,
                    })
                }
            }
        }
        Ok(Self { alphabet, symbols })
    }

    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl AsRef<[u8]> for Sequence {
    fn as_ref(&self) -> &[u8] {
        &self.symbols
    }
}
