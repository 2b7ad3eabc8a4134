// Instead of making a custom trait here we should support Rust builtin traits for containers
// once they are ready: https://internals.rust-lang.org/t/traits-that-should-be-in-std-but-arent/3002

use crate::seq::Sequence;

/// Random-access view over the symbols consumed by the alignment engine.
pub trait Alignable {
    /// The type of individual symbols being aligned.
    type Symbol;

    /// Returns true if there is nothing to align.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of symbols.
    fn len(&self) -> usize;

    /// Symbol at the given 0-based position. Panics when out of bounds.
    fn at(&self, pos: usize) -> &Self::Symbol;
}

impl<T: Copy> Alignable for &[T] {
    type Symbol = T;

    #[inline(always)]
    fn len(&self) -> usize {
        (self as &[Self::Symbol]).len()
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self[pos]
    }
}

impl<T: Copy> Alignable for Vec<T> {
    type Symbol = T;

    #[inline(always)]
    fn len(&self) -> usize {
        self.len()
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self[pos]
    }
}

impl Alignable for Sequence {
    type Symbol = u8;

    #[inline(always)]
    fn len(&self) -> usize {
        self.symbols().len()
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self.symbols()[pos]
    }
}
