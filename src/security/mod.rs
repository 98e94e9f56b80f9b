//! Security module for pre-execution command auditing.
//!
//! This module holds the forbidden pattern set, the audit function that
//! evaluates candidates against it, and the gate an execution layer uses to
//! turn a verdict into a hard stop.

mod audit;
pub mod executor;
mod patterns;

pub use audit::{
    AuditVerdict, BLOCKED_REASON, EMPTY_INSTRUCTION_REASON, RULES_UNAVAILABLE_REASON, audit_action,
    audit_batch,
};
pub use patterns::{ForbiddenPattern, PatternCategory, forbidden_patterns};
