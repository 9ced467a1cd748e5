//! Rewrite engine.

use lsys_core::{ProductionTable, Symbol};

use crate::config::EngineConfig;
use crate::error::{RewriteError, RewriteResult};
use crate::DEFAULT_SIZE_LIMIT;

/// A deterministic, context-free L-system.
///
/// Holds the production rules and the current string. Every call that takes
/// a caller's sequence stores its own copy, and [`value`](Self::value) only
/// hands out a shared borrow, so engine state can never be changed from
/// outside except through these methods.
#[derive(Debug, Clone)]
pub struct RewriteEngine {
    productions: ProductionTable,
    current: Vec<Symbol>,
    /// Maximum number of symbols the current string may hold after an
    /// iteration. Checked before each iteration commits.
    pub size_limit: u64,
}

impl RewriteEngine {
    /// Create an engine with no productions and the default size limit.
    pub fn new(initial: &[Symbol]) -> Self {
        Self {
            productions: ProductionTable::new(),
            current: initial.to_vec(),
            size_limit: DEFAULT_SIZE_LIMIT,
        }
    }

    /// Create an engine with no productions, using `config`.
    pub fn with_config(initial: &[Symbol], config: &EngineConfig) -> Self {
        Self {
            size_limit: config.size_limit,
            ..Self::new(initial)
        }
    }

    /// Set the production for `symbol`, overwriting any previous one.
    ///
    /// - `None` removes the rule, so the symbol is left as-is.
    /// - `Some(&[])` makes the symbol disappear on the next iteration.
    /// - Any other sequence replaces the symbol and is copied.
    pub fn set_production(&mut self, symbol: Symbol, replacement: Option<&[Symbol]>) {
        tracing::trace!(symbol, len = replacement.map(<[Symbol]>::len), "set production");
        self.productions.set(symbol, replacement);
    }

    /// Replace the current string with a copy of `state`.
    ///
    /// Productions and the size limit are kept.
    pub fn reset(&mut self, state: &[Symbol]) {
        tracing::trace!(len = state.len(), "reset state");
        self.current = state.to_vec();
    }

    /// Apply every production exactly once.
    ///
    /// Fails with [`RewriteError::SizeLimitExceeded`] if the result would be
    /// longer than `size_limit`, in which case nothing is changed.
    pub fn iterate(&mut self) -> RewriteResult<()> {
        let next_len = check_limit(self.next_len(), self.size_limit)?;

        // next_len <= size_limit, but may still not fit in memory on 32-bit targets
        let capacity = usize::try_from(next_len).map_err(|_| {
            RewriteError::size_limit_exceeded(Some(next_len), self.size_limit)
        })?;

        let mut next = Vec::with_capacity(capacity);
        for &symbol in &self.current {
            self.productions.production(symbol).apply(symbol, &mut next);
        }
        debug_assert_eq!(next.len(), capacity);

        tracing::debug!(from = self.current.len(), to = next.len(), "iteration committed");
        self.current = next;
        Ok(())
    }

    /// The current string.
    pub fn value(&self) -> &[Symbol] {
        &self.current
    }

    /// Number of symbols in the current string.
    pub fn len(&self) -> usize {
        self.current.len()
    }

    /// Whether the current string is empty.
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Length of the string the next iteration would produce, or `None` if
    /// it overflows `u64`.
    fn next_len(&self) -> Option<u64> {
        checked_total(
            self.current
                .iter()
                .map(|&symbol| self.productions.production(symbol).output_len()),
        )
    }
}

/// Sum per-symbol output lengths, or `None` on `u64` overflow.
fn checked_total(lens: impl IntoIterator<Item = usize>) -> Option<u64> {
    lens.into_iter()
        .try_fold(0u64, |total, len| total.checked_add(u64::try_from(len).ok()?))
}

/// Admit a next generation of `required` symbols under `limit`.
///
/// An overflowed length (`None`) always exceeds the limit.
fn check_limit(required: Option<u64>, limit: u64) -> RewriteResult<u64> {
    match required {
        Some(len) if len <= limit => Ok(len),
        required => {
            tracing::debug!(?required, limit, "iteration refused");
            Err(RewriteError::size_limit_exceeded(required, limit))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_creation() {
        // GIVEN
        let initial = b"AC".to_vec();

        // WHEN
        let engine = RewriteEngine::new(&initial);

        // THEN
        assert_eq!(engine.value(), b"AC");
        assert_eq!(engine.size_limit, DEFAULT_SIZE_LIMIT);
        assert_eq!(engine.productions.rule_count(), 0);
    }

    #[test]
    fn test_with_config_sets_limit() {
        let engine = RewriteEngine::with_config(b"A", &EngineConfig::new().size_limit(7));

        assert_eq!(engine.size_limit, 7);
        assert_eq!(engine.value(), b"A");
    }

    #[test]
    fn test_iterate_without_rules_is_identity() {
        let mut engine = RewriteEngine::new(b"hello");

        engine.iterate().unwrap();

        assert_eq!(engine.value(), b"hello");
    }

    #[test]
    fn test_iterate_three_generations() {
        // GIVEN
        let mut engine = RewriteEngine::new(b"AC");
        engine.set_production(b'A', Some(b"AA"));
        engine.set_production(b'C', Some(b"BC"));

        // WHEN
        for _ in 0..3 {
            engine.iterate().unwrap();
        }

        // THEN
        assert_eq!(engine.value(), b"AAAAAAAABBBC");
    }

    #[test]
    fn test_reset_keeps_rules_and_limit() {
        // GIVEN
        let mut engine = RewriteEngine::new(b"AC");
        engine.set_production(b'A', Some(b"AA"));
        engine.size_limit = 100;

        // WHEN
        engine.reset(b"AAAAAAC");
        engine.set_production(b'A', Some(&[]));
        engine.set_production(b'C', None);
        engine.iterate().unwrap();

        // THEN
        assert_eq!(engine.value(), b"C");
        assert_eq!(engine.size_limit, 100);
    }

    #[test]
    fn test_reset_copies_state() {
        let mut state = b"AB".to_vec();
        let mut engine = RewriteEngine::new(b"");
        engine.reset(&state);

        state[0] = b'Z';

        assert_eq!(engine.value(), b"AB");
    }

    #[test]
    fn test_new_copies_initial() {
        let mut initial = b"AB".to_vec();
        let engine = RewriteEngine::new(&initial);

        initial.clear();

        assert_eq!(engine.value(), b"AB");
    }

    #[test]
    fn test_set_production_copies_replacement() {
        // GIVEN
        let mut replacement = b"XY".to_vec();
        let mut engine = RewriteEngine::new(b"A");
        engine.set_production(b'A', Some(replacement.as_slice()));

        // WHEN
        replacement[1] = b'Q';
        engine.iterate().unwrap();

        // THEN
        assert_eq!(engine.value(), b"XY");
    }

    #[test]
    fn test_size_limit_exceeded_leaves_state() {
        // GIVEN
        let mut engine = RewriteEngine::new(b"A");
        engine.set_production(b'A', Some(b"AA"));
        engine.size_limit = 32;
        for _ in 0..5 {
            engine.iterate().unwrap();
        }
        let before = engine.value().to_vec();

        // WHEN
        let result = engine.iterate();

        // THEN
        assert_eq!(
            result,
            Err(RewriteError::SizeLimitExceeded {
                required: Some(64),
                limit: 32
            })
        );
        assert_eq!(engine.value(), before.as_slice());
        assert_eq!(engine.len(), 32);
    }

    #[test]
    fn test_limit_is_inclusive() {
        let mut engine = RewriteEngine::new(b"AB");
        engine.set_production(b'A', Some(b"AAA"));
        engine.size_limit = 4;

        engine.iterate().unwrap();

        assert_eq!(engine.value(), b"AAAB");
    }

    #[test]
    fn test_raising_limit_allows_retry() {
        // GIVEN
        let mut engine = RewriteEngine::new(b"AA");
        engine.set_production(b'A', Some(b"AAA"));
        engine.size_limit = 5;
        assert!(engine.iterate().is_err());

        // WHEN
        engine.size_limit = 6;

        // THEN
        engine.iterate().unwrap();
        assert_eq!(engine.value(), b"AAAAAA");
    }

    #[test]
    fn test_zero_limit_allows_only_empty_result() {
        let mut engine = RewriteEngine::new(b"AB");
        engine.size_limit = 0;
        assert!(engine.iterate().is_err());

        engine.set_production(b'A', Some(&[]));
        engine.set_production(b'B', Some(&[]));
        engine.iterate().unwrap();

        assert!(engine.is_empty());
    }

    #[test]
    fn test_next_len_counts_every_state() {
        let mut engine = RewriteEngine::new(b"ABCD");
        engine.set_production(b'A', Some(b"AAAA"));
        engine.set_production(b'B', Some(&[]));
        engine.set_production(b'C', None);

        assert_eq!(engine.next_len(), Some(6));
    }

    #[test]
    fn test_empty_state_stays_empty() {
        let mut engine = RewriteEngine::new(&[]);
        engine.set_production(b'A', Some(b"AA"));

        engine.iterate().unwrap();

        assert!(engine.is_empty());
    }

    #[test]
    fn test_checked_total_sums_lengths() {
        assert_eq!(checked_total(std::iter::empty()), Some(0));
        assert_eq!(checked_total([1, 0, 4]), Some(5));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_checked_total_overflow_is_none() {
        let half = usize::MAX / 2 + 1;

        assert_eq!(checked_total([usize::MAX, 0]), Some(u64::MAX));
        assert_eq!(checked_total([usize::MAX, 1]), None);
        assert_eq!(checked_total([half, half]), None);
    }

    #[test]
    fn test_check_limit_maps_overflow_to_size_limit_exceeded() {
        assert_eq!(check_limit(Some(32), 32), Ok(32));
        assert_eq!(
            check_limit(Some(33), 32),
            Err(RewriteError::size_limit_exceeded(Some(33), 32))
        );
        assert_eq!(
            check_limit(None, u64::MAX),
            Err(RewriteError::SizeLimitExceeded {
                required: None,
                limit: u64::MAX
            })
        );
    }
}
