use derive_getters::Getters;
use rayon::prelude::*;
use rayon::ThreadPool;

use tralign_core_rs::seq::{Alphabet, Sequence};

use super::alignment::{Alignment, Cigar};
use super::error::{AlignError, SeqRole};
use super::gotoh::{self, Mode};
use super::scoring::{Parameters, Scheme};

/// Alignment settings besides the scoring scheme.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Getters)]
pub struct Config {
    mode: Mode,
    /// Symbols accepted in both sequences
    alphabet: Alphabet,
    /// Restrict the DP to cells with `|row - col| <= band`. Disabled by default.
    band: Option<usize>,
}

impl Config {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    pub fn with_band(mut self, band: Option<usize>) -> Self {
        self.band = band;
        self
    }
}

/// Reusable, immutable aligner: a validated scoring scheme plus the alignment settings.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Getters)]
pub struct Aligner {
    scheme: Scheme,
    config: Config,
}

impl Aligner {
    pub fn new(parameters: &Parameters, config: Config) -> Result<Self, AlignError> {
        Ok(Self {
            scheme: Scheme::new(parameters)?,
            config,
        })
    }

    /// Validate both sequences against the configured alphabet and align them.
    pub fn align(
        &self,
        reference: impl AsRef<[u8]>,
        query: impl AsRef<[u8]>,
    ) -> Result<Alignment, AlignError> {
        let reference = Sequence::new(self.config.alphabet, reference)
            .map_err(|err| AlignError::sequence(SeqRole::Reference, err))?;
        let query = Sequence::new(self.config.alphabet, query)
            .map_err(|err| AlignError::sequence(SeqRole::Query, err))?;
        self.align_sequences(&reference, &query)
    }

    /// Align already validated sequences.
    pub fn align_sequences(
        &self,
        reference: &Sequence,
        query: &Sequence,
    ) -> Result<Alignment, AlignError> {
        let band = self.band(reference.len(), query.len());
        log::debug!(
            "{} alignment: {}x{} matrix, band: {:?}",
            self.config.mode,
            reference.len() + 1,
            query.len() + 1,
            band
        );

        let (score, ops, reference, query) =
            gotoh::run(&self.scheme, self.config.mode, reference, query, band)?.dissolve();
        Ok(Alignment::new(score, Cigar::encode(ops), query, reference))
    }

    /// Align independent (reference, query) pairs on the given thread pool.
    /// Results are returned in the input order.
    pub fn align_all<R, Q>(
        &self,
        pool: &ThreadPool,
        pairs: &[(R, Q)],
    ) -> Vec<Result<Alignment, AlignError>>
    where
        R: AsRef<[u8]> + Sync,
        Q: AsRef<[u8]> + Sync,
    {
        pool.install(|| {
            pairs
                .par_iter()
                .map(|(reference, query)| self.align(reference, query))
                .collect()
        })
    }

    /// Effective band for the given dimensions. Global alignments must reach the corner.
    fn band(&self, rows: usize, cols: usize) -> Option<usize> {
        let band = self.config.band?;
        let required = rows.abs_diff(cols);
        if self.config.mode == Mode::Global && band < required {
            log::warn!(
                "Band {band} can't reach the end of a {rows}x{cols} global alignment, widening it to {required}"
            );
            return Some(required);
        }
        Some(band)
    }
}

/// Align `query` against `reference` with a one-off [`Aligner`] over the DNA alphabet.
pub fn align(
    reference: impl AsRef<[u8]>,
    query: impl AsRef<[u8]>,
    parameters: &Parameters,
    mode: Mode,
) -> Result<Alignment, AlignError> {
    Aligner::new(parameters, Config::new(mode))?.align(reference, query)
}
