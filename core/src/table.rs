//! Dense production table.
//!
//! One slot per symbol of the alphabet, indexed directly by the symbol's
//! byte value. Lookups never hash and never miss: a slot with no rule is
//! the identity production.

use std::fmt;

use crate::{Production, Symbol, ALPHABET_SIZE};

/// Production rules for every symbol of the alphabet.
#[derive(Clone, PartialEq, Eq)]
pub struct ProductionTable {
    slots: [Option<Box<[Symbol]>>; ALPHABET_SIZE],
}

impl ProductionTable {
    /// Create a table where every symbol maps to itself.
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }

    /// Set or clear the rule for `symbol`.
    ///
    /// `None` clears the rule, `Some(&[])` deletes the symbol on rewrite, and
    /// any other sequence is copied into the table.
    pub fn set(&mut self, symbol: Symbol, replacement: Option<&[Symbol]>) {
        self.slots[symbol as usize] = replacement.map(Box::from);
    }

    /// Look up the production for `symbol`.
    #[inline]
    pub fn production(&self, symbol: Symbol) -> Production<'_> {
        Production::from_entry(self.slots[symbol as usize].as_deref())
    }

    /// Number of symbols with a rule set.
    pub fn rule_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}

impl Default for ProductionTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ProductionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (symbol, slot) in self.slots.iter().enumerate() {
            if let Some(replacement) = slot {
                map.entry(&symbol, replacement);
            }
        }
        map.finish()
    }
}
