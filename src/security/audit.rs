//! Pre-execution command audit.
//!
//! This is a heuristic line of defense: it flags command text that looks
//! destructive, anti-forensic, security-disabling, persistence-creating or
//! tied to known offensive tooling. It is not an authorization control and
//! a passing verdict says nothing about whether the caller may run the command.

use serde::Serialize;

use super::patterns::{PatternCategory, forbidden_patterns};

/// Reason attached to whitespace-only or empty input.
pub const EMPTY_INSTRUCTION_REASON: &str = "empty instruction";

/// Reason attached to every pattern denial, whatever the category.
pub const BLOCKED_REASON: &str = "command looks destructive, removes traces, disables security \
     controls or establishes persistence; blocked by audit rules";

/// Reason attached when the rule table failed to compile.
pub const RULES_UNAVAILABLE_REASON: &str = "audit rules unavailable";

/// Allow/deny decision for a single candidate command.
///
/// `reason` is only present on denials. `category` and `rule` identify the
/// forbidden pattern that fired, when one did.
#[must_use = "an unchecked audit verdict must never be treated as permission to execute"]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditVerdict {
    pub allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<PatternCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<&'static str>,
}

impl AuditVerdict {
    pub fn allow() -> Self {
        Self {
            allowed: true,
            reason: None,
            category: None,
            rule: None,
        }
    }

    pub fn deny(reason: &'static str) -> Self {
        Self {
            allowed: false,
            reason: Some(reason),
            category: None,
            rule: None,
        }
    }

    fn blocked_by(category: PatternCategory, rule: &'static str) -> Self {
        Self {
            allowed: false,
            reason: Some(BLOCKED_REASON),
            category: Some(category),
            rule: Some(rule),
        }
    }

    pub fn is_allowed(&self) -> bool {
        self.allowed
    }
}

/// Audit a candidate command before any execution attempt.
///
/// # Rules
/// - Deny: empty or whitespace-only input
/// - Deny: first forbidden pattern that matches (declared order, case-insensitive)
/// - Deny: every input, if the rule table could not be compiled
/// - Allow: everything else
///
/// # Examples
/// ```
/// use cmd_audit::security::audit_action;
///
/// assert!(!audit_action("rm -rf /").allowed);
/// assert!(audit_action("whoami /all").allowed);
/// ```
pub fn audit_action(candidate: &str) -> AuditVerdict {
    let normalized = candidate.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');

    if normalized.is_empty() {
        return AuditVerdict::deny(EMPTY_INSTRUCTION_REASON);
    }

    let patterns = match forbidden_patterns() {
        Ok(patterns) => patterns,
        Err(e) => {
            tracing::error!("Forbidden pattern set failed to compile: {}", e);
            return AuditVerdict::deny(RULES_UNAVAILABLE_REASON);
        }
    };

    match patterns.iter().find(|p| p.is_match(normalized)) {
        Some(pattern) => {
            tracing::warn!(
                rule = pattern.name,
                category = %pattern.category,
                "Blocked command: {}",
                normalized
            );
            AuditVerdict::blocked_by(pattern.category, pattern.name)
        }
        None => {
            tracing::debug!("Allowed command: {}", normalized);
            AuditVerdict::allow()
        }
    }
}

/// Audit several candidates independently, keeping input order.
pub fn audit_batch<'a, I>(candidates: I) -> Vec<AuditVerdict>
where
    I: IntoIterator<Item = &'a str>,
{
    candidates.into_iter().map(audit_action).collect()
}
