//! Orchestration for `mend apply`: read, substitute, write back.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::rule::RuleSet;
use crate::core::substitute::replace_counting;
use crate::io::target::{PatchError, TargetStore};

/// Whether the transformed text is written back to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyMode {
    /// Write the transformed text back.
    Write,
    /// Count replacements without touching the target.
    DryRun,
}

/// Replacements made by one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleHit {
    /// Literal pattern the rule matched (raw, not escaped for display).
    pub pattern: String,
    pub count: usize,
}

/// Structured result of one patch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOutcome {
    pub target: PathBuf,
    /// One entry per rule, in application order.
    pub hits: Vec<RuleHit>,
    /// False when the run was a dry run.
    pub written: bool,
}

impl PatchOutcome {
    pub fn total_replacements(&self) -> usize {
        self.hits.iter().map(|hit| hit.count).sum()
    }
}

/// Run the patch operation end to end.
///
/// The target is loaded whole, every rule is applied in order to the
/// in-memory text, and the result goes back in a single truncating write.
/// Any failure aborts before the write, leaving the target untouched; in
/// [`ApplyMode::DryRun`] nothing is ever written.
///
/// The write happens even when no rule matched: a clean target is rewritten
/// with identical bytes.
pub fn apply_rules<S: TargetStore>(
    store: &S,
    target: &Path,
    rules: &RuleSet,
    mode: ApplyMode,
) -> Result<PatchOutcome, PatchError> {
    let mut contents = store.read(target)?;

    let mut hits = Vec::with_capacity(rules.len());
    for rule in rules.iter() {
        let (next, count) = replace_counting(&contents, &rule.pattern, &rule.replacement);
        contents = next;
        debug!(count, "rule applied");
        hits.push(RuleHit {
            pattern: rule.pattern.clone(),
            count,
        });
    }

    let written = match mode {
        ApplyMode::Write => {
            store.write(target, &contents)?;
            true
        }
        ApplyMode::DryRun => false,
    };

    let outcome = PatchOutcome {
        target: target.to_path_buf(),
        hits,
        written,
    };
    info!(
        path = %outcome.target.display(),
        replacements = outcome.total_replacements(),
        written,
        "patch run finished"
    );
    Ok(outcome)
}
