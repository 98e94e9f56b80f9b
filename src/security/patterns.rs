//! Forbidden pattern set.
//!
//! An ordered table of case-insensitive matchers describing command shapes
//! that must never reach execution. Order matters: the audit stops at the
//! first rule that matches, so the reported rule is always the earliest one
//! declared below.

use std::fmt;
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use serde::Serialize;

/// Abuse class a forbidden pattern belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternCategory {
    /// Destructive or stability-impacting actions
    Destructive,
    /// Event log clearing, shell history suppression
    LogTampering,
    /// Turning off endpoint protection or firewalls
    SecurityControlDisablement,
    /// Scheduled tasks, services, run keys, cron
    Persistence,
    /// Red-team, credential dumping and tunneling tools
    OffensiveTooling,
}

impl fmt::Display for PatternCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Destructive => write!(f, "destructive/stability-impacting"),
            Self::LogTampering => write!(f, "log/trace tampering"),
            Self::SecurityControlDisablement => write!(f, "security control disablement"),
            Self::Persistence => write!(f, "persistence/backdoor creation"),
            Self::OffensiveTooling => write!(f, "offensive tooling/credential theft"),
        }
    }
}

/// Uncompiled rule definition.
struct RuleDef {
    category: PatternCategory,
    name: &'static str,
    pattern: &'static str,
}

const fn rule(category: PatternCategory, name: &'static str, pattern: &'static str) -> RuleDef {
    RuleDef {
        category,
        name,
        pattern,
    }
}

use PatternCategory::*;

const RULES: &[RuleDef] = &[
    // Destructive / stability-impacting
    rule(Destructive, "rm-rf-root", r"\brm\s+-rf\s+/(?:\s|$)"),
    rule(Destructive, "rm-rf-root-glob", r"\brm\s+-rf\s+/\*"),
    rule(Destructive, "mkfs", r"\bmkfs(\.|_)?\w*\b"),
    rule(Destructive, "raw-disk-write", r"\b(?:dd|shred)\b"),
    rule(Destructive, "diskpart", r"\bdiskpart\b"),
    rule(Destructive, "format-drive", r"\bformat\s+\w*:"),
    rule(Destructive, "shutdown", r"\bshutdown\b"),
    rule(Destructive, "reboot", r"\breboot\b"),
    rule(Destructive, "init-runlevel", r"\binit\s+[06]\b"),
    // Log tampering / trace removal
    rule(LogTampering, "wevtutil-clear", r"\bwevtutil\s+cl\b"),
    rule(LogTampering, "clear-eventlog", r"\bClear-EventLog\b"),
    rule(LogTampering, "delete-evtx", r"\bdel\b.*\\winevt\\logs"),
    rule(LogTampering, "histfile-devnull", r"\bexport\s+HISTFILE\s*=\s*/dev/null\b"),
    rule(LogTampering, "history-clear", r"\bhistory\s+-c\b"),
    // Security control disablement
    rule(SecurityControlDisablement, "defender-disable", r"\bSet-MpPreference\b.*Disable"),
    rule(SecurityControlDisablement, "netsh-state-off", r"\bnetsh\b.*\bstate\s+off\b"),
    rule(SecurityControlDisablement, "ufw-disable", r"\bufw\s+disable\b"),
    // Persistence / backdoor creation
    rule(Persistence, "schtasks-create", r"\bschtasks\b.*\bcreate\b"),
    rule(Persistence, "reg-add", r"\breg\b.*\badd\b"),
    rule(Persistence, "sc-create", r"\bsc\b.*\bcreate\b"),
    rule(Persistence, "crontab-edit", r"\bcrontab\b.*(?:^|\s)-e\b"),
    rule(Persistence, "systemctl-enable", r"\bsystemctl\b.*\benable\b"),
    // Offensive tooling / credential theft indicators
    rule(OffensiveTooling, "mimikatz", r"\bmimikatz\b"),
    rule(OffensiveTooling, "rubeus", r"\brubeus\b"),
    rule(OffensiveTooling, "secretsdump", r"\bsecretsdump\b"),
    rule(OffensiveTooling, "psexec", r"\bpsexec\b"),
    rule(OffensiveTooling, "chisel", r"\bchisel\b"),
    rule(OffensiveTooling, "frp", r"\bfrp\b"),
    rule(OffensiveTooling, "sharphound", r"\bsharphound\b"),
];

/// A compiled forbidden pattern.
#[derive(Debug, Clone)]
pub struct ForbiddenPattern {
    pub category: PatternCategory,
    pub name: &'static str,
    regex: Regex,
}

impl ForbiddenPattern {
    pub fn is_match(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }

    /// Source text of the underlying expression.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

static FORBIDDEN_PATTERNS: LazyLock<Result<Vec<ForbiddenPattern>, regex::Error>> =
    LazyLock::new(compile_rules);

fn compile_rules() -> Result<Vec<ForbiddenPattern>, regex::Error> {
    RULES
        .iter()
        .map(|def| {
            RegexBuilder::new(&ascii_word_boundaries(def.pattern))
                .case_insensitive(true)
                .build()
                .map(|regex| ForbiddenPattern {
                    category: def.category,
                    name: def.name,
                    regex,
                })
        })
        .collect()
}

/// Rewrites every `\b` escape to the ASCII-only `(?-u:\b)`.
///
/// In Unicode mode CJK and accented letters count as word characters, so
/// `mimikatz` glued to `运行` would have no boundary and slip through.
fn ascii_word_boundaries(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 16);
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('b') => out.push_str(r"(?-u:\b)"),
            Some(next) => {
                out.push('\\');
                out.push(next);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Returns the compiled pattern set in declared order.
///
/// Compilation happens once per process. An error here means the rule table
/// itself is broken; callers must treat it as "deny everything".
pub fn forbidden_patterns() -> Result<&'static [ForbiddenPattern], &'static regex::Error> {
    FORBIDDEN_PATTERNS.as_deref()
}
