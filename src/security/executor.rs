//! Command execution gating with audit verdict enforcement.
//!
//! This module provides a single decision point that an execution layer
//! consults before running anything. A denial is a hard stop; nothing in
//! this crate can turn it into `Execute`.

use super::AuditVerdict;

/// Result of passing a command through the audit gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionDecision {
    /// Command may be handed to the execution layer
    Execute,
    /// Command is denied and must not be executed
    Deny { reason: String },
}

impl ExecutionDecision {
    pub fn is_execute(&self) -> bool {
        matches!(self, Self::Execute)
    }
}

/// Maps an audit verdict to the execution decision for `cmd`.
///
/// # Examples
/// ```
/// use cmd_audit::security::{audit_action, executor::{gate_command, ExecutionDecision}};
///
/// let cmd = "ip addr";
/// assert_eq!(gate_command(cmd, &audit_action(cmd)), ExecutionDecision::Execute);
///
/// let cmd = "wevtutil cl Security";
/// assert!(matches!(gate_command(cmd, &audit_action(cmd)), ExecutionDecision::Deny { .. }));
/// ```
pub fn gate_command(cmd: &str, verdict: &AuditVerdict) -> ExecutionDecision {
    if verdict.allowed {
        return ExecutionDecision::Execute;
    }

    let reason = verdict.reason.unwrap_or("denied by audit");
    let reason = match verdict.rule {
        Some(rule) => format!("Command '{}' denied ({}): {}", cmd, rule, reason),
        None => format!("Command '{}' denied: {}", cmd, reason),
    };
    ExecutionDecision::Deny { reason }
}

/// Audits `cmd` and gates it in one step.
pub fn audit_and_gate(cmd: &str) -> ExecutionDecision {
    gate_command(cmd, &super::audit_action(cmd))
}
