//! Scenario runner.

use lsys_rule::RewriteEngine;

use crate::assertion::Outcome;
use crate::error::ScenarioResult;
use crate::scenario::{Action, Scenario};

/// Runs a scenario against a fresh engine.
pub struct Runner<'s> {
    scenario: &'s Scenario,
}

impl<'s> Runner<'s> {
    /// Create a new runner for a scenario.
    pub fn new(scenario: &'s Scenario) -> Self {
        Self { scenario }
    }

    /// Run the scenario.
    pub fn run(&self) -> ScenarioResult<()> {
        // 1. Build the engine
        let mut engine =
            RewriteEngine::with_config(self.scenario.initial(), self.scenario.engine_config());
        for (symbol, replacement) in self.scenario.rules() {
            engine.set_production(*symbol, replacement.as_deref());
        }

        // 2. Execute each step and verify assertions
        for step in self.scenario.steps() {
            let before = engine.value().to_vec();
            let result = apply(&mut engine, &step.action);
            let outcome = Outcome {
                result,
                before,
                after: engine.value().to_vec(),
            };
            step.assertion.verify(&step.name, &outcome)?;
        }

        Ok(())
    }
}

fn apply(engine: &mut RewriteEngine, action: &Action) -> Result<(), String> {
    match action {
        Action::Iterate => engine.iterate().map_err(|e| e.to_string()),
        Action::Reset(state) => {
            engine.reset(state);
            Ok(())
        }
        Action::SetProduction(symbol, replacement) => {
            engine.set_production(*symbol, replacement.as_deref());
            Ok(())
        }
        Action::SetSizeLimit(limit) => {
            engine.size_limit = *limit;
            Ok(())
        }
    }
}
