//! Repair a corrupted byte sequence in a text file by literal substitution.
//!
//! The built-in rule removes a stray escaped carriage return (a literal
//! backslash and `r`) left before a raw CRLF terminator. Custom rules come
//! from `--pattern`/`--replacement` or a TOML rules file (`mend init`
//! writes a starter).

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use mend::apply::{ApplyMode, apply_rules};
use mend::check::check_target;
use mend::core::rule::{Rule, RuleSet, escape};
use mend::exit_codes;
use mend::io::rules_file::{
    DEFAULT_RULES_PATH, discover_rules, load_rules_file, write_default_rules,
};
use mend::io::target::FsTarget;
use mend::logging;
use std::path::{Path, PathBuf};

/// Target patched when no path argument is given.
const DEFAULT_TARGET: &str = "components/Sidebar.tsx";

#[derive(Parser)]
#[command(
    name = "mend",
    version,
    about = "Repair a corrupted byte sequence in a text file by literal substitution"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply substitution rules to the target and write it back.
    Apply {
        /// File to repair.
        #[arg(default_value = DEFAULT_TARGET)]
        path: PathBuf,

        /// Rules file (TOML); `./mend.toml` is picked up when present.
        #[arg(long, conflicts_with_all = ["pattern", "replacement"])]
        rules: Option<PathBuf>,

        /// Literal pattern override; decodes \\, \r, \n and \t escapes.
        #[arg(long, requires = "replacement")]
        pattern: Option<String>,

        /// Literal replacement override; same escapes as --pattern.
        #[arg(long, requires = "pattern")]
        replacement: Option<String>,

        /// Count replacements without writing.
        #[arg(long)]
        dry_run: bool,
    },

    /// Count pattern occurrences without modifying the target.
    Check {
        /// File to scan.
        #[arg(default_value = DEFAULT_TARGET)]
        path: PathBuf,

        /// Rules file (TOML); `./mend.toml` is picked up when present.
        #[arg(long, conflicts_with_all = ["pattern", "replacement"])]
        rules: Option<PathBuf>,

        /// Literal pattern override; decodes \\, \r, \n and \t escapes.
        #[arg(long, requires = "replacement")]
        pattern: Option<String>,

        /// Literal replacement override; same escapes as --pattern.
        #[arg(long, requires = "pattern")]
        replacement: Option<String>,
    },

    /// Write a starter rules file with the built-in rule.
    Init {
        /// Rules file to create.
        #[arg(long, default_value = DEFAULT_RULES_PATH)]
        rules: PathBuf,

        /// Overwrite an existing rules file.
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    logging::init();
    let code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::FAILED
        }
    };
    std::process::exit(code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Apply {
            path,
            rules,
            pattern,
            replacement,
            dry_run,
        } => {
            let set = resolve_rules(rules.as_deref(), pattern.as_deref(), replacement.as_deref())?;
            cmd_apply(&path, &set, dry_run)
        }
        Command::Check {
            path,
            rules,
            pattern,
            replacement,
        } => {
            let set = resolve_rules(rules.as_deref(), pattern.as_deref(), replacement.as_deref())?;
            cmd_check(&path, &set)
        }
        Command::Init { rules, force } => cmd_init(&rules, force),
    }
}

fn cmd_apply(path: &Path, rules: &RuleSet, dry_run: bool) -> Result<i32> {
    let mode = if dry_run {
        ApplyMode::DryRun
    } else {
        ApplyMode::Write
    };
    let outcome = apply_rules(&FsTarget, path, rules, mode)?;
    let verb = if outcome.written { "fixed" } else { "dry-run" };
    println!(
        "{}: target={} replacements={}",
        verb,
        outcome.target.display(),
        outcome.total_replacements()
    );
    Ok(exit_codes::OK)
}

fn cmd_check(path: &Path, rules: &RuleSet) -> Result<i32> {
    let report = check_target(&FsTarget, path, rules)?;
    println!(
        "check: target={} occurrences={} rules={}",
        report.target.display(),
        report.total_occurrences(),
        report.hits.len()
    );
    for hit in &report.hits {
        println!(
            "check: rule={} occurrences={}",
            escape(&hit.pattern),
            hit.count
        );
    }
    if report.is_clean() {
        Ok(exit_codes::OK)
    } else {
        Ok(exit_codes::FOUND)
    }
}

fn cmd_init(rules_path: &Path, force: bool) -> Result<i32> {
    write_default_rules(rules_path, force)?;
    println!("init: rules={}", rules_path.display());
    Ok(exit_codes::OK)
}

/// Resolve rules by precedence: inline pattern/replacement pair, explicit
/// rules file, discovered `./mend.toml`, built-in rule.
fn resolve_rules(
    rules: Option<&Path>,
    pattern: Option<&str>,
    replacement: Option<&str>,
) -> Result<RuleSet> {
    if let (Some(pattern), Some(replacement)) = (pattern, replacement) {
        let set = RuleSet::new(vec![Rule::from_escaped(pattern, replacement)?]);
        let violations = set.validate();
        if !violations.is_empty() {
            bail!("invalid rule: {}", violations.join("; "));
        }
        return Ok(set);
    }
    match rules {
        Some(path) => load_rules_file(path),
        None => discover_rules(Path::new(DEFAULT_RULES_PATH)),
    }
}
