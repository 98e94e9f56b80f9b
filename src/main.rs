//! Main entry point for the cmd-audit CLI.
//!
//! Parses arguments, initializes logging, runs one subcommand and maps the
//! outcome to an exit status. Audit denials exit with status 1.

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;

use cmd_audit::catalog::{Platform, VirtualizationType};
use cmd_audit::security::{AuditVerdict, forbidden_patterns};
use cmd_audit::{Commander, utils};

#[derive(Debug, Parser)]
#[command(name = "cmd-audit", version, about = "Command audit and compliance advisory engine")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Write logs to a timestamped file in this directory instead of stderr
    #[arg(long, global = true, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List read-only baseline discovery commands for a platform
    Baseline {
        #[arg(default_value = "windows")]
        platform: String,
    },
    /// Audit a command (or one command per stdin line) before execution
    Audit {
        #[arg(required_unless_present = "stdin")]
        candidate: Option<String>,

        /// Read candidates from stdin, one per line
        #[arg(long, conflicts_with = "candidate")]
        stdin: bool,
    },
    /// Print the hardening checklist for a container/virtualization type
    Harden {
        #[arg(value_name = "TYPE")]
        kind: String,
    },
    /// List the forbidden pattern set in evaluation order
    Rules,
}

#[derive(Serialize)]
struct AuditRecord<'a> {
    candidate: &'a str,
    #[serde(flatten)]
    verdict: &'a AuditVerdict,
}

#[derive(Serialize)]
struct RuleRecord<'a> {
    category: cmd_audit::PatternCategory,
    name: &'a str,
    pattern: &'a str,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let _log_guard = utils::logger::init_logging(cli.log_dir.as_deref())?;

    let commander = Commander::new();
    tracing::debug!(
        version = commander.version(),
        mode = ?commander.mode(),
        "Engine ready"
    );

    match cli.command {
        Command::Baseline { platform } => {
            print_baseline(&commander, &platform, cli.json)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Audit { candidate, stdin } => {
            let candidates = match candidate {
                Some(candidate) if !stdin => vec![candidate],
                _ => io::stdin().lock().lines().collect::<io::Result<Vec<_>>>()?,
            };
            run_audit(&commander, &candidates, cli.json)
        }
        Command::Harden { kind } => {
            let text = commander.hardening_checklist(&kind);
            if cli.json {
                let kind_resolved = VirtualizationType::from_key(&kind);
                println!(
                    "{}",
                    serde_json::json!({ "type": kind, "resolved": kind_resolved, "checklist": text })
                );
            } else {
                println!("{}", text);
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Rules => {
            print_rules(cli.json)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn print_baseline(commander: &Commander, platform: &str, json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&commander.baseline_discovery(platform))?
        );
        return Ok(());
    }

    match Platform::from_key(platform) {
        Some(platform) => {
            for task in platform.tasks() {
                println!("{:<18} {}", task.name, task.command);
            }
        }
        None => {
            let known: Vec<_> = Platform::ALL.iter().map(|p| p.key()).collect();
            eprintln!(
                "No baseline for platform '{}' (known: {})",
                platform,
                known.join(", ")
            );
        }
    }
    Ok(())
}

/// Exit status for an audit run: 0 when every candidate is allowed, 1 otherwise.
fn audit_exit_status(verdicts: &[AuditVerdict]) -> u8 {
    if verdicts.iter().all(AuditVerdict::is_allowed) {
        0
    } else {
        1
    }
}

fn run_audit(commander: &Commander, candidates: &[String], json: bool) -> Result<ExitCode> {
    let verdicts: Vec<_> = candidates
        .iter()
        .map(|c| commander.audit_action(c))
        .collect();

    for (candidate, verdict) in candidates.iter().zip(&verdicts) {
        if json {
            let record = AuditRecord {
                candidate,
                verdict,
            };
            println!("{}", serde_json::to_string(&record)?);
        } else if verdict.allowed {
            println!("ALLOW  {}", candidate);
        } else {
            let rule = verdict.rule.map(|r| format!(" [{}]", r)).unwrap_or_default();
            println!(
                "DENY   {}{} - {}",
                candidate,
                rule,
                verdict.reason.unwrap_or_default()
            );
        }
    }

    let denied = verdicts.iter().filter(|v| !v.allowed).count();
    tracing::info!(total = candidates.len(), denied, "Audit finished");
    Ok(ExitCode::from(audit_exit_status(&verdicts)))
}

fn print_rules(json: bool) -> Result<()> {
    let patterns = forbidden_patterns()
        .map_err(|e| anyhow::anyhow!("Forbidden pattern set failed to compile: {}", e))?;

    if json {
        let records: Vec<_> = patterns
            .iter()
            .map(|p| RuleRecord {
                category: p.category,
                name: p.name,
                pattern: p.pattern(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    for p in patterns {
        println!("{:<36} {:<20} {}", p.category.to_string(), p.name, p.pattern());
    }
    Ok(())
}
