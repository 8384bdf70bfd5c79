//! Stable exit codes for mend CLI commands.

/// Command succeeded; for `mend check`, the target carries no occurrence.
pub const OK: i32 = 0;
/// Command failed due to a missing/unreadable target, bad encoding, invalid
/// rules, or other errors.
pub const FAILED: i32 = 1;
/// `mend check` counted at least one occurrence of a pattern.
pub const FOUND: i32 = 2;
