use std::str::FromStr;

use derive_more::Display;
use eyre::{eyre, Report};

/// Closed set of symbols a sequence may contain. Membership is case-insensitive.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Display)]
pub enum Alphabet {
    /// Nucleotides and the `N` wildcard
    #[default]
    #[display("dna")]
    Dna,
    /// Ribonucleotides and the `N` wildcard
    #[display("rna")]
    Rna,
    /// IUPAC nucleotide ambiguity codes (both `T` and `U` are accepted)
    #[display("iupac")]
    Iupac,
    /// Amino acids, including the ambiguous/rare codes and the stop symbol `*`
    #[display("protein")]
    Protein,
    /// Any printable, non-whitespace ASCII symbol
    #[display("any")]
    Any,
}

impl Alphabet {
    /// Upper-case symbols of the alphabet. Empty for [`Alphabet::Any`].
    pub fn symbols(&self) -> &'static [u8] {
        match self {
            Alphabet::Dna => b"ACGTN",
            Alphabet::Rna => b"ACGUN",
            Alphabet::Iupac => b"ACGTURYSWKMBDHVN",
            Alphabet::Protein => b"ACDEFGHIKLMNPQRSTVWYBZXJUO*",
            Alphabet::Any => b"",
        }
    }

    /// Returns the canonical (upper-case) form of the symbol if it belongs to the alphabet.
    pub fn normalize(&self, symbol: u8) -> Option<u8> {
        let upper = symbol.to_ascii_uppercase();
        let member = match self {
            Alphabet::Any => symbol.is_ascii_graphic(),
            _ => self.symbols().contains(&upper),
        };
        member.then_some(upper)
    }

    pub fn contains(&self, symbol: u8) -> bool {
        self.normalize(symbol).is_some()
    }
}

impl FromStr for Alphabet {
    type Err = Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dna" => Ok(Alphabet::Dna),
            "rna" => Ok(Alphabet::Rna),
            "iupac" => Ok(Alphabet::Iupac),
            "protein" | "aa" => Ok(Alphabet::Protein),
            "any" => Ok(Alphabet::Any),
            _ => Err(eyre!("Unknown alphabet: {s}")),
        }
    }
}
