//! Stateless service facade over the audit engine and advisory catalogs.
//!
//! Holds no mutable state. A single shared instance, one per call, or the
//! free functions in [`crate::catalog`] and [`crate::security`] are all
//! equivalent.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::{baseline_discovery, hardening_checklist};
use crate::security::{AuditVerdict, audit_action};

/// Engine version reported to orchestration layers.
pub const ENGINE_VERSION: &str = "1.1.0";

/// Operating mode. Only read-only auditing exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Mode {
    #[default]
    Audit,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Commander {
    mode: Mode,
}

impl Commander {
    pub const fn new() -> Self {
        Self { mode: Mode::Audit }
    }

    pub fn version(&self) -> &'static str {
        ENGINE_VERSION
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn baseline_discovery(&self, platform: &str) -> BTreeMap<&'static str, &'static str> {
        baseline_discovery(platform)
    }

    /// Legacy name for [`Commander::baseline_discovery`].
    pub fn silent_discovery(&self, platform: &str) -> BTreeMap<&'static str, &'static str> {
        self.baseline_discovery(platform)
    }

    pub fn audit_action(&self, candidate: &str) -> AuditVerdict {
        audit_action(candidate)
    }

    pub fn hardening_checklist(&self, kind: &str) -> &'static str {
        hardening_checklist(kind)
    }

    /// Legacy name for [`Commander::hardening_checklist`]. Older callers
    /// still ask for an "escape strategy"; they get the isolation checklist.
    pub fn escape_strategy(&self, kind: &str) -> &'static str {
        self.hardening_checklist(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let commander = Commander::new();
        assert_eq!(commander.version(), "1.1.0");
        assert_eq!(commander.mode(), Mode::Audit);
        assert_eq!(Commander::default().mode(), Mode::Audit);
    }

    #[test]
    fn test_legacy_aliases_match() {
        let commander = Commander::new();
        for platform in ["windows", "linux", "plan9"] {
            assert_eq!(
                commander.silent_discovery(platform),
                commander.baseline_discovery(platform)
            );
        }
        for kind in ["docker", "k8s", "vm", "unknown-type"] {
            assert_eq!(commander.escape_strategy(kind), commander.hardening_checklist(kind));
        }
    }

    #[test]
    fn test_delegates_to_audit() {
        let commander = Commander::new();
        assert_eq!(commander.audit_action("rm -rf /"), audit_action("rm -rf /"));
        assert!(commander.audit_action("whoami /all").allowed);
    }

    #[test]
    fn test_shareable_across_threads() {
        let commander = Commander::new();
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(move || commander.audit_action("secretsdump.py").allowed))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().ok(), Some(false));
        }
    }
}
