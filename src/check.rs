//! Non-mutating occurrence scan for `mend check`.

use std::path::{Path, PathBuf};

use crate::apply::{ApplyMode, RuleHit, apply_rules};
use crate::core::rule::RuleSet;
use crate::io::target::{PatchError, TargetStore};

/// Occurrence report for one target, one entry per rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub target: PathBuf,
    pub hits: Vec<RuleHit>,
}

impl CheckReport {
    pub fn total_occurrences(&self) -> usize {
        self.hits.iter().map(|hit| hit.count).sum()
    }

    /// True when no rule matched anywhere in the target.
    pub fn is_clean(&self) -> bool {
        self.total_occurrences() == 0
    }
}

/// Count what `mend apply` would replace, without writing anything.
///
/// Runs the same pipeline as apply in dry-run mode, so counts stay
/// consistent with sequential rule application: each rule is counted
/// against the output of the rules before it.
pub fn check_target<S: TargetStore>(
    store: &S,
    target: &Path,
    rules: &RuleSet,
) -> Result<CheckReport, PatchError> {
    let outcome = apply_rules(store, target, rules, ApplyMode::DryRun)?;
    Ok(CheckReport {
        target: outcome.target,
        hits: outcome.hits,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::core::rule::default_rules;
    use crate::io::target::FsTarget;

    #[test]
    fn clean_target_reports_clean() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("clean.tsx");
        fs::write(&path, b"render(items))}\r\n").expect("write target");

        let report = check_target(&FsTarget, &path, &default_rules()).expect("check");

        assert!(report.is_clean());
        assert_eq!(report.total_occurrences(), 0);
    }

    #[test]
    fn corrupted_target_counts_without_writing() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("dirty.tsx");
        let before: &[u8] = b"a))}\\r\r\nb))}\\r\r\n";
        fs::write(&path, before).expect("write target");

        let report = check_target(&FsTarget, &path, &default_rules()).expect("check");

        assert_eq!(report.total_occurrences(), 2);
        assert!(!report.is_clean());
        assert_eq!(fs::read(&path).expect("read target"), before);
    }

    #[test]
    fn missing_target_fails_with_not_found() {
        let temp = tempfile::tempdir().expect("tempdir");

        let err = check_target(&FsTarget, &temp.path().join("gone.tsx"), &default_rules())
            .expect_err("check should fail");

        assert!(matches!(err, PatchError::NotFound { .. }));
    }
}
