//! LSYS Integration Test Framework
//!
//! Provides a fluent API for writing integration tests against the rewrite
//! engine. A scenario names an axiom, an initial set of productions and
//! engine settings, then lists steps. Each step performs one engine call and
//! carries an assertion on the outcome.
//!
//! # Example
//!
//! ```
//! use lsys_scenarios::prelude::*;
//!
//! fn scenario() -> Scenario {
//!     Scenario::new("algae")
//!         .axiom("A")
//!         .rule(b'A', "AB")
//!         .rule(b'B', "A")
//!         .iterate(|a| a.value("AB"))
//!         .iterate(|a| a.value("ABA"))
//!         .iterate(|a| a.value("ABAAB").len(5))
//! }
//!
//! scenario().run().unwrap();
//! ```

mod assertion;
mod error;
mod runner;
mod scenario;

pub use assertion::{Assertion, AssertionBuilder, IntoSymbols, Outcome};
pub use error::{ScenarioError, ScenarioResult};
pub use scenario::{Action, Scenario, Step};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::assertion::{Assertion, AssertionBuilder, IntoSymbols, Outcome};
    pub use crate::error::{ScenarioError, ScenarioResult};
    pub use crate::scenario::{Action, Scenario};
}
