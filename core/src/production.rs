//! Production rules.

use crate::Symbol;

/// How a single symbol is rewritten during one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Production<'t> {
    /// No rule: the symbol is copied through unchanged.
    Identity,
    /// The symbol produces nothing.
    Delete,
    /// The symbol is replaced by this non-empty sequence.
    Replace(&'t [Symbol]),
}

impl<'t> Production<'t> {
    /// Classify a stored table entry.
    pub fn from_entry(entry: Option<&'t [Symbol]>) -> Self {
        match entry {
            None => Production::Identity,
            Some([]) => Production::Delete,
            Some(replacement) => Production::Replace(replacement),
        }
    }

    /// Number of symbols this production emits for one occurrence.
    pub fn output_len(&self) -> usize {
        match self {
            Production::Identity => 1,
            Production::Delete => 0,
            Production::Replace(replacement) => replacement.len(),
        }
    }

    /// Append the output of this production for `symbol` to `out`.
    pub fn apply(&self, symbol: Symbol, out: &mut Vec<Symbol>) {
        match self {
            Production::Identity => out.push(symbol),
            Production::Delete => {}
            Production::Replace(replacement) => out.extend_from_slice(replacement),
        }
    }
}
