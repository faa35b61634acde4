//! Wire types and domain rules shared by the stockroom dashboard.
//!
//! Everything here is plain Rust with no browser dependencies, so the rules
//! the dashboard relies on (validation, movement classification, audit search,
//! session transitions) are testable natively.

pub mod domain;
pub mod system;
