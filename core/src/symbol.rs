//! The symbol alphabet.

/// A single symbol of an L-system string.
///
/// The alphabet is fixed: every possible byte value is a valid symbol,
/// whether or not a production is defined for it.
pub type Symbol = u8;

/// Number of distinct symbols in the alphabet.
pub const ALPHABET_SIZE: usize = 1 << Symbol::BITS;
