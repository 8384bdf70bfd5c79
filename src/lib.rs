//! Literal find-and-replace repair for a single text file.
//!
//! This crate implements a one-shot patch model: load the target file whole,
//! replace every occurrence of each literal pattern, write the result back.
//! The architecture enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (rules, substitution).
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (target file, rules file).
//!   Isolated behind seams to enable fakes in tests.
//!
//! Orchestration modules ([`apply`], [`check`]) coordinate core logic with
//! I/O to implement CLI commands.

pub mod apply;
pub mod check;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
