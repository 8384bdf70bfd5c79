//! Rules file handling: the TOML document that externalizes substitutions.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::rule::{Rule, RuleSet, default_rules};

/// Rules file looked up in the working directory when `--rules` is absent.
pub const DEFAULT_RULES_PATH: &str = "mend.toml";

const RULES_HEADER: &str = "\
# mend substitution rules.
#
# Each [[rule]] is a literal pattern/replacement pair, applied in order.
# TOML string escapes (\\r, \\n, \\\\) spell control characters.

";

/// Rules file (TOML), one `[[rule]]` table per substitution.
///
/// This file is intended to be edited by humans. TOML basic-string escapes
/// (`\r`, `\n`, `\\`) spell control characters; decoded values are used
/// literally, with no second unescape pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RulesFile {
    pub rule: Vec<Rule>,
}

impl RulesFile {
    fn into_rule_set(self) -> RuleSet {
        RuleSet::new(self.rule)
    }
}

/// Load rules from a TOML file that must exist.
///
/// Used for explicit `--rules` paths; a missing file is an error, not a
/// fallback to the built-in rule.
pub fn load_rules_file(path: &Path) -> Result<RuleSet> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read rules {}", path.display()))?;
    let file: RulesFile =
        toml::from_str(&contents).with_context(|| format!("parse rules {}", path.display()))?;
    let rules = file.into_rule_set();
    let violations = rules.validate();
    if !violations.is_empty() {
        bail!(
            "invalid rules in {}: {}",
            path.display(),
            violations.join("; ")
        );
    }
    debug!(path = %path.display(), rules = rules.len(), "rules loaded");
    Ok(rules)
}

/// Load rules from the discovered path.
///
/// If the file is missing, returns the built-in rule set.
pub fn discover_rules(path: &Path) -> Result<RuleSet> {
    if !path.exists() {
        debug!(path = %path.display(), "no rules file, using built-in rule");
        return Ok(default_rules());
    }
    load_rules_file(path)
}

/// Write the starter rules file for `mend init` (temp file + rename).
///
/// Refuses to overwrite an existing file unless `force` is set.
pub fn write_default_rules(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "rules file {} already exists (use --force to overwrite)",
            path.display()
        );
    }
    let file = RulesFile {
        rule: default_rules().into_rules(),
    };
    let mut buf = String::from(RULES_HEADER);
    buf.push_str(&toml::to_string_pretty(&file).context("serialize rules toml")?);
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp rules {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace rules {}", path.display()))?;
    Ok(())
}
