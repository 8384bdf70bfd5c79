//! Substitution rules: literal pattern/replacement pairs.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Pattern of the built-in rule: a stray escaped carriage return (literal
/// backslash then `r`) left immediately before a raw CRLF terminator.
pub const DEFAULT_PATTERN: &str = "))}\\r\r\n";
/// Replacement of the built-in rule: the well-formed terminator alone.
pub const DEFAULT_REPLACEMENT: &str = "))}\r\n";

/// One literal substitution: every occurrence of `pattern` becomes
/// `replacement`. Both fields are exact character sequences, not patterns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub pattern: String,
    pub replacement: String,
}

impl Rule {
    /// Build a rule from CLI-supplied strings, decoding `\\`, `\r`, `\n`
    /// and `\t` escapes in both fields.
    pub fn from_escaped(pattern: &str, replacement: &str) -> Result<Self, EscapeError> {
        Ok(Self {
            pattern: unescape(pattern)?,
            replacement: unescape(replacement)?,
        })
    }
}

/// Ordered rules, applied sequentially: each rule operates on the output of
/// the rules before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn into_rules(self) -> Vec<Rule> {
        self.rules
    }

    /// Check rule invariants, returning one message per violation.
    ///
    /// An empty vec means the set is usable. Rules are reported by position
    /// so rules-file authors can find the offender.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.rules.is_empty() {
            errors.push("at least one rule is required".to_string());
        }
        for (index, rule) in self.rules.iter().enumerate() {
            if rule.pattern.is_empty() {
                errors.push(format!("rule {index}: pattern must not be empty"));
            }
        }
        errors
    }
}

/// The built-in rule set: exactly the one hardcoded substitution.
pub fn default_rules() -> RuleSet {
    RuleSet::new(vec![Rule {
        pattern: DEFAULT_PATTERN.to_string(),
        replacement: DEFAULT_REPLACEMENT.to_string(),
    }])
}

/// Escape decoding failure in a CLI-supplied rule string.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum EscapeError {
    #[error("unknown escape sequence \\{found} at byte {at}")]
    UnknownEscape { found: char, at: usize },
    #[error("trailing backslash at byte {at}")]
    TrailingBackslash { at: usize },
}

/// Decode `\\`, `\r`, `\n` and `\t` escapes so control characters can be
/// spelled in a shell argument. Every other character passes through as-is.
pub fn unescape(input: &str) -> Result<String, EscapeError> {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.char_indices();
    while let Some((at, ch)) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some((_, '\\')) => out.push('\\'),
            Some((_, 'r')) => out.push('\r'),
            Some((_, 'n')) => out.push('\n'),
            Some((_, 't')) => out.push('\t'),
            Some((_, other)) => return Err(EscapeError::UnknownEscape { found: other, at }),
            None => return Err(EscapeError::TrailingBackslash { at }),
        }
    }
    Ok(out)
}

/// Render a literal string with backslashes and control characters escaped.
///
/// Inverse of [`unescape`]; used when printing patterns in record lines so
/// they stay on one line.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\r' => out.push_str("\\r"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out
}
