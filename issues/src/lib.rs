//! Issue records, mock inventory, and filter logic for the issue desk.
//!
//! This crate is UI-framework agnostic so the Leptos client can consume it
//! directly and tests can exercise filtering without a browser.

pub mod draft;
pub mod filter;
pub mod metrics;
pub mod model;
pub mod store;

pub use draft::{DraftError, IssueDraft, NewIssue};
pub use filter::{Choice, IssueFilter, filter_issues};
pub use model::{Issue, ParseEnumError, Person, Priority, Status};
pub use store::mock_issues;
