//! Static advisory catalogs: baseline discovery commands and hardening checklists.

mod baseline;
mod hardening;
mod tests;

pub use baseline::{BaselineTask, Platform, baseline_discovery};
pub use hardening::{UNDEFINED_TYPE_MESSAGE, VirtualizationType, hardening_checklist};
