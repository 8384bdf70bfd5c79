//! Test-only helpers for constructing substitution rules.

use crate::core::rule::{Rule, RuleSet};

/// Create a rule from literal (already unescaped) strings.
pub fn rule(pattern: &str, replacement: &str) -> Rule {
    Rule {
        pattern: pattern.to_string(),
        replacement: replacement.to_string(),
    }
}

/// Create a rule set from literal pattern/replacement pairs.
pub fn rule_set(pairs: &[(&str, &str)]) -> RuleSet {
    RuleSet::new(
        pairs
            .iter()
            .map(|(pattern, replacement)| rule(pattern, replacement))
            .collect(),
    )
}
