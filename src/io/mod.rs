//! I/O helpers for mend commands.

pub mod rules_file;
pub mod target;
