//! Deterministic, pure logic shared by the patch pipeline.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! text and return deterministic outputs suitable for tests.

pub mod rule;
pub mod substitute;
