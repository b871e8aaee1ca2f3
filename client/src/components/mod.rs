//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the desk chrome, issue cards and charts while reading and
//! writing shared state from Leptos context providers.

pub mod avatar;
pub mod charts;
pub mod create_issue_dialog;
pub mod header;
pub mod issue_card;
pub mod kpi_card;
pub mod sidebar;
