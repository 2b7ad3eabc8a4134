/// `Op` represents a single column of a pairwise alignment between a reference and a query.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Op {
    /// Identical symbols in both sequences (=)
    Match,
    /// Different symbols in both sequences (X)
    Mismatch,
    /// A match or a mismatch that was not resolved against the sequences (M).
    /// Only produced when parsing conventional CIGAR strings.
    Aligned,
    /// A query symbol against a gap in the reference (I)
    Insertion,
    /// A reference symbol against a gap in the query (D)
    Deletion,
    /// A reference symbol inside a deletion run charged at the long-gap rate (N)
    LongGap,
}

impl Op {
    pub fn consumes_reference(&self) -> bool {
        !matches!(self, Op::Insertion)
    }

    pub fn consumes_query(&self) -> bool {
        !matches!(self, Op::Deletion | Op::LongGap)
    }

    /// Conventional CIGAR code. Matches and mismatches are both rendered as `M`.
    pub fn symbol(&self) -> char {
        match self {
            Op::Match | Op::Mismatch | Op::Aligned => 'M',
            Op::Insertion => 'I',
            Op::Deletion => 'D',
            Op::LongGap => 'N',
        }
    }

    /// Extended CIGAR code that keeps matches (`=`) and mismatches (`X`) apart.
    pub fn extended_symbol(&self) -> char {
        match self {
            Op::Match => '=',
            Op::Mismatch => 'X',
            _ => self.symbol(),
        }
    }

    /// Applies the operation to the given sequence indices.
    pub fn apply(&self, reference: &mut usize, query: &mut usize, len: usize) {
        if self.consumes_reference() {
            *reference += len;
        }
        if self.consumes_query() {
            *query += len;
        }
    }
}

impl TryFrom<char> for Op {
    type Error = ();

    /// Tries to convert a CIGAR code into an `Op`.
    /// Returns an error if the character does not represent a supported operation.
    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '=' => Ok(Op::Match),
            'X' => Ok(Op::Mismatch),
            'M' => Ok(Op::Aligned),
            'I' => Ok(Op::Insertion),
            'D' => Ok(Op::Deletion),
            'N' => Ok(Op::LongGap),
            _ => Err(()),
        }
    }
}
