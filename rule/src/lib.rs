//! LSYS Rule
//!
//! Rewrite a symbol string with per-symbol productions.
//!
//! Responsibilities:
//! - Hold the production table and the current string
//! - Apply every production simultaneously, one generation per call
//! - Refuse any generation that would outgrow the size limit
//! - Leave state untouched when an iteration is refused

mod config;
mod engine;
mod error;


pub use config::EngineConfig;
pub use engine::RewriteEngine;
pub use error::{RewriteError, RewriteResult};

/// Default limit on the number of symbols a generation may hold (100 MiB).
pub const DEFAULT_SIZE_LIMIT: u64 = 100 * 1024 * 1024;
