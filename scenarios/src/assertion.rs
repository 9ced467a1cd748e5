//! Assertion types and builders for verifying step outcomes.

use lsys_core::Symbol;

use crate::error::{ScenarioError, ScenarioResult};

/// What a single step did to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// The call's result, with errors rendered to their message.
    pub result: Result<(), String>,
    /// Engine value before the step.
    pub before: Vec<Symbol>,
    /// Engine value after the step.
    pub after: Vec<Symbol>,
}

/// A complete assertion for a step outcome.
pub struct Assertion {
    // Value assertions
    pub value: Option<Vec<Symbol>>,
    pub len: Option<usize>,
    pub len_max: Option<usize>,
    pub unchanged: bool,

    // Error assertions
    pub ok: bool,
    pub error: Option<String>,
    pub error_pattern: Option<String>,

    // Custom assertion function
    #[allow(clippy::type_complexity)]
    pub custom: Option<Box<dyn Fn(&Outcome) -> bool + Send + Sync>>,
}

impl Default for Assertion {
    fn default() -> Self {
        Self {
            value: None,
            len: None,
            len_max: None,
            unchanged: false,
            ok: false,
            error: None,
            error_pattern: None,
            custom: None,
        }
    }
}

impl std::fmt::Debug for Assertion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Assertion")
            .field("value", &self.value.as_deref().map(render))
            .field("len", &self.len)
            .field("len_max", &self.len_max)
            .field("unchanged", &self.unchanged)
            .field("ok", &self.ok)
            .field("error", &self.error)
            .field("error_pattern", &self.error_pattern)
            .field("custom", &self.custom.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl Assertion {
    /// Create a new empty assertion.
    pub fn new() -> Self {
        Self::default()
    }

    /// Verify the assertion against an outcome.
    pub fn verify(&self, step: &str, outcome: &Outcome) -> ScenarioResult<()> {
        // Check error expectations first
        if let Some(ref expected_error) = self.error {
            match &outcome.result {
                Err(msg) if msg.contains(expected_error.as_str()) => {}
                Err(msg) => {
                    return Err(ScenarioError::assertion_failed(
                        step,
                        format!(
                            "expected error containing '{}', got: {}",
                            expected_error, msg
                        ),
                    ))
                }
                Ok(()) => {
                    return Err(ScenarioError::assertion_failed(
                        step,
                        format!(
                            "expected error containing '{}', but step succeeded",
                            expected_error
                        ),
                    ))
                }
            }
        }

        if let Some(ref pattern) = self.error_pattern {
            let re = regex_lite::Regex::new(pattern)
                .map_err(|e| ScenarioError::invalid_pattern(step, pattern, e.to_string()))?;
            match &outcome.result {
                Err(msg) if re.is_match(msg) => {}
                Err(msg) => {
                    return Err(ScenarioError::assertion_failed(
                        step,
                        format!("expected error matching '{}', got: {}", pattern, msg),
                    ))
                }
                Ok(()) => {
                    return Err(ScenarioError::assertion_failed(
                        step,
                        format!("expected error matching '{}', but step succeeded", pattern),
                    ))
                }
            }
        }

        if self.ok {
            if let Err(msg) = &outcome.result {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("unexpected error: {}", msg),
                ));
            }
        }

        if self.unchanged && outcome.before != outcome.after {
            return Err(ScenarioError::assertion_failed(
                step,
                format!(
                    "expected value to stay '{}', got '{}'",
                    render(&outcome.before),
                    render(&outcome.after)
                ),
            ));
        }

        if let Some(ref expected) = self.value {
            if &outcome.after != expected {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!(
                        "expected value '{}', got '{}'",
                        render(expected),
                        render(&outcome.after)
                    ),
                ));
            }
        }

        if let Some(expected) = self.len {
            if outcome.after.len() != expected {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected length {}, got {}", expected, outcome.after.len()),
                ));
            }
        }

        if let Some(max) = self.len_max {
            if outcome.after.len() > max {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected length at most {}, got {}", max, outcome.after.len()),
                ));
            }
        }

        if let Some(ref custom) = self.custom {
            if !custom(outcome) {
                return Err(ScenarioError::assertion_failed(
                    step,
                    "custom assertion returned false",
                ));
            }
        }

        Ok(())
    }
}

/// Builder for creating assertions.
pub struct AssertionBuilder {
    assertion: Assertion,
}

impl AssertionBuilder {
    /// Create a new assertion builder.
    pub fn new() -> Self {
        Self {
            assertion: Assertion::new(),
        }
    }

    /// Build the assertion.
    pub fn build(self) -> Assertion {
        self.assertion
    }

    // ========== Value assertions ==========

    /// Assert the engine value after the step.
    pub fn value<S: IntoSymbols>(mut self, symbols: S) -> Self {
        self.assertion.value = Some(symbols.into_symbols());
        self
    }

    /// Assert the length of the engine value after the step.
    pub fn len(mut self, n: usize) -> Self {
        self.assertion.len = Some(n);
        self
    }

    /// Assert the engine value holds at most N symbols after the step.
    pub fn len_max(mut self, n: usize) -> Self {
        self.assertion.len_max = Some(n);
        self
    }

    /// Assert the engine value is empty after the step.
    pub fn empty(self) -> Self {
        self.len(0)
    }

    /// Assert the step left the engine value as it was.
    pub fn unchanged(mut self) -> Self {
        self.assertion.unchanged = true;
        self
    }

    // ========== Error assertions ==========

    /// Assert that the step succeeds.
    pub fn ok(mut self) -> Self {
        self.assertion.ok = true;
        self
    }

    /// Assert that the step fails with an error containing the given text.
    pub fn error(mut self, contains: impl Into<String>) -> Self {
        self.assertion.error = Some(contains.into());
        self
    }

    /// Assert that the step fails with an error matching the given regex.
    pub fn error_matches(mut self, pattern: impl Into<String>) -> Self {
        self.assertion.error_pattern = Some(pattern.into());
        self
    }

    // ========== Advanced ==========

    /// Custom assertion function.
    pub fn assert_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&Outcome) -> bool + Send + Sync + 'static,
    {
        self.assertion.custom = Some(Box::new(f));
        self
    }
}

impl Default for AssertionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Render symbols for failure messages.
pub(crate) fn render(symbols: &[Symbol]) -> String {
    String::from_utf8_lossy(symbols).into_owned()
}

/// Trait for converting values into symbol sequences.
pub trait IntoSymbols {
    fn into_symbols(self) -> Vec<Symbol>;
}

impl IntoSymbols for &str {
    fn into_symbols(self) -> Vec<Symbol> {
        self.as_bytes().to_vec()
    }
}

impl IntoSymbols for &[Symbol] {
    fn into_symbols(self) -> Vec<Symbol> {
        self.to_vec()
    }
}

impl<const N: usize> IntoSymbols for &[Symbol; N] {
    fn into_symbols(self) -> Vec<Symbol> {
        self.to_vec()
    }
}

impl IntoSymbols for Vec<Symbol> {
    fn into_symbols(self) -> Vec<Symbol> {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(result: Result<(), &str>, before: &str, after: &str) -> Outcome {
        Outcome {
            result: result.map_err(str::to_string),
            before: before.into_symbols(),
            after: after.into_symbols(),
        }
    }

    #[test]
    fn test_value_assertion() {
        let assertion = AssertionBuilder::new().value("AB").len(2).build();

        assert!(assertion.verify("s", &outcome(Ok(()), "A", "AB")).is_ok());
        assert!(assertion.verify("s", &outcome(Ok(()), "A", "BA")).is_err());
    }

    #[test]
    fn test_error_assertion() {
        let assertion = AssertionBuilder::new().error("size limit").unchanged().build();

        let failed = outcome(Err("would exceed the size limit of 3 symbols"), "AA", "AA");
        assert!(assertion.verify("s", &failed).is_ok());
        assert!(assertion.verify("s", &outcome(Ok(()), "AA", "AAAA")).is_err());
    }

    #[test]
    fn test_error_pattern() {
        let assertion = AssertionBuilder::new()
            .error_matches(r"limit of \d+ symbols")
            .build();

        assert!(assertion
            .verify("s", &outcome(Err("the size limit of 32 symbols"), "", ""))
            .is_ok());
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let assertion = AssertionBuilder::new().error_matches("(").build();

        let err = assertion
            .verify("s", &outcome(Err("x"), "", ""))
            .unwrap_err();
        assert!(matches!(err, ScenarioError::InvalidPattern { .. }));
    }

    #[test]
    fn test_ok_rejects_error() {
        let assertion = AssertionBuilder::new().ok().build();

        let err = assertion
            .verify("iterate", &outcome(Err("boom"), "", ""))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "assertion failed for step 'iterate': unexpected error: boom"
        );
    }

    #[test]
    fn test_custom_assertion() {
        let assertion = AssertionBuilder::new()
            .assert_fn(|o| o.after.len() == o.before.len() * 2)
            .build();

        assert!(assertion.verify("s", &outcome(Ok(()), "AB", "AABB")).is_ok());
        assert!(assertion.verify("s", &outcome(Ok(()), "AB", "AAB")).is_err());
    }
}
