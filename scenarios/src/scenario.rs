//! Scenario definition and builder.

use std::fmt;

use lsys_core::Symbol;
use lsys_rule::EngineConfig;

use crate::assertion::{render, Assertion, AssertionBuilder, IntoSymbols};
use crate::error::ScenarioResult;
use crate::runner::Runner;

/// One engine call performed by a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Apply every production once.
    Iterate,
    /// Replace the current value.
    Reset(Vec<Symbol>),
    /// Set or clear a production.
    SetProduction(Symbol, Option<Vec<Symbol>>),
    /// Change the size limit.
    SetSizeLimit(u64),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Iterate => write!(f, "iterate"),
            Action::Reset(state) => write!(f, "reset '{}'", render(state)),
            Action::SetProduction(symbol, None) => {
                write!(f, "clear '{}'", char::from(*symbol).escape_default())
            }
            Action::SetProduction(symbol, Some(replacement)) => write!(
                f,
                "rule '{}' -> '{}'",
                char::from(*symbol).escape_default(),
                render(replacement)
            ),
            Action::SetSizeLimit(limit) => write!(f, "size limit {}", limit),
        }
    }
}

/// A step in a scenario with its assertion.
#[derive(Debug)]
pub struct Step {
    /// Step name (position and action, for reporting).
    pub name: String,
    /// The engine call to perform.
    pub action: Action,
    /// Assertion to verify the outcome.
    pub assertion: Assertion,
}

/// A complete test scenario.
pub struct Scenario {
    /// Scenario name (for reporting).
    name: String,
    /// Initial engine value.
    axiom: Vec<Symbol>,
    /// Productions installed before the first step.
    rules: Vec<(Symbol, Option<Vec<Symbol>>)>,
    /// Engine settings.
    config: EngineConfig,
    /// Steps with assertions.
    steps: Vec<Step>,
}

impl Scenario {
    /// Create a new scenario with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            axiom: Vec::new(),
            rules: Vec::new(),
            config: EngineConfig::default(),
            steps: Vec::new(),
        }
    }

    /// Set the initial value.
    pub fn axiom<S: IntoSymbols>(mut self, symbols: S) -> Self {
        self.axiom = symbols.into_symbols();
        self
    }

    /// Install a production before the first step.
    pub fn rule<S: IntoSymbols>(mut self, symbol: Symbol, replacement: S) -> Self {
        self.rules.push((symbol, Some(replacement.into_symbols())));
        self
    }

    /// Set the engine config.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the initial size limit.
    pub fn size_limit(mut self, limit: u64) -> Self {
        self.config.size_limit = limit;
        self
    }

    /// Add a step with an assertion.
    pub fn step<F>(mut self, action: Action, assertion_fn: F) -> Self
    where
        F: FnOnce(AssertionBuilder) -> AssertionBuilder,
    {
        let name = format!("#{} {}", self.steps.len() + 1, action);
        let assertion = assertion_fn(AssertionBuilder::new()).build();
        self.steps.push(Step {
            name,
            action,
            assertion,
        });
        self
    }

    /// Add an iteration step.
    pub fn iterate<F>(self, assertion_fn: F) -> Self
    where
        F: FnOnce(AssertionBuilder) -> AssertionBuilder,
    {
        self.step(Action::Iterate, assertion_fn)
    }

    /// Add a reset step.
    pub fn reset<S: IntoSymbols>(self, symbols: S) -> Self {
        self.step(Action::Reset(symbols.into_symbols()), |a| a)
    }

    /// Add a step replacing the production for `symbol`.
    pub fn set_rule<S: IntoSymbols>(self, symbol: Symbol, replacement: S) -> Self {
        self.step(
            Action::SetProduction(symbol, Some(replacement.into_symbols())),
            |a| a,
        )
    }

    /// Add a step making `symbol` vanish on rewrite.
    pub fn delete(self, symbol: Symbol) -> Self {
        self.step(Action::SetProduction(symbol, Some(Vec::new())), |a| a)
    }

    /// Add a step clearing the production for `symbol`.
    pub fn clear(self, symbol: Symbol) -> Self {
        self.step(Action::SetProduction(symbol, None), |a| a)
    }

    /// Add a step changing the size limit.
    pub fn limit(self, limit: u64) -> Self {
        self.step(Action::SetSizeLimit(limit), |a| a)
    }

    /// Run the scenario and return the result.
    pub fn run(&self) -> ScenarioResult<()> {
        Runner::new(self).run()
    }

    /// Get the scenario name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the initial value.
    pub fn initial(&self) -> &[Symbol] {
        &self.axiom
    }

    /// Get the productions installed before the first step.
    pub fn rules(&self) -> &[(Symbol, Option<Vec<Symbol>>)] {
        &self.rules
    }

    /// Get the engine config.
    pub fn engine_config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get the steps.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}
