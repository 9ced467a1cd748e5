//! LSYS Core Types
//!
//! This crate provides the foundational types used by the rewriting engine:
//! - The symbol alphabet (every byte value is a symbol)
//! - Productions (identity, deletion, replacement)
//! - The dense production table, indexed by symbol

mod production;
mod symbol;
mod table;

pub use production::*;
pub use symbol::*;
pub use table::*;
