//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`ui` chrome, issue list filters, the create
//! dialog) so each component depends on a small focused model provided as an
//! `RwSignal` context.

pub mod create_issue;
pub mod issue_list;
pub mod ui;
