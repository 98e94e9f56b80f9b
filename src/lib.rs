//! cmd-audit - Command audit and compliance advisory engine
//!
//! This library provides:
//! - A pre-execution audit that denies destructive, anti-forensic,
//!   security-disabling, persistence-creating or offensive-tooling commands
//! - Curated read-only baseline discovery commands per platform
//! - Static hardening checklists for container and virtualization platforms
//!
//! The audit is a heuristic pattern pre-filter. It is not an authorization
//! control, and an allowed verdict is never sufficient permission on its own.
//!
//! # Example
//!
//! ```
//! use cmd_audit::{Commander, security::executor::{gate_command, ExecutionDecision}};
//!
//! let commander = Commander::new();
//!
//! for (task, command) in commander.baseline_discovery("linux") {
//!     let verdict = commander.audit_action(command);
//!     assert_eq!(gate_command(command, &verdict), ExecutionDecision::Execute, "{task}");
//! }
//!
//! let verdict = commander.audit_action("wevtutil cl Security");
//! assert!(!verdict.allowed);
//! ```

pub mod catalog;
pub mod commander;
pub mod security;
pub mod utils;

// Re-export commonly used types
pub use catalog::{Platform, VirtualizationType, baseline_discovery, hardening_checklist};
pub use commander::Commander;
pub use security::{AuditVerdict, PatternCategory, audit_action};
