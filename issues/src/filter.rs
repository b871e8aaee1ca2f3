//! Issue list filtering: text search ANDed with status and priority choices.
//!
//! Filtering is a pure function of the issue slice and the three criteria. It
//! preserves the slice's relative order and never fails; no match yields an
//! empty vector.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use std::fmt;
use std::str::FromStr;

use crate::model::{Issue, ParseEnumError, Priority, Status};

/// Select value for the "all" option.
pub const ALL_VALUE: &str = "all";

/// A categorical filter: every value, or exactly one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Choice<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Choice<T> {
    #[must_use]
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }

    #[must_use]
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl<T: FromStr<Err = ParseEnumError>> FromStr for Choice<T> {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_VALUE {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

impl<T: fmt::Display> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_VALUE),
            Self::Only(value) => fmt::Display::fmt(value, f),
        }
    }
}

/// Search text plus categorical filters for the issue list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IssueFilter {
    pub query: String,
    pub status: Choice<Status>,
    pub priority: Choice<Priority>,
}

impl IssueFilter {
    /// True when every issue passes.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.query.is_empty() && self.status.is_all() && self.priority.is_all()
    }

    /// Returns true if the issue satisfies all three criteria.
    #[must_use]
    pub fn matches(&self, issue: &Issue) -> bool {
        self.status.admits(&issue.status)
            && self.priority.admits(&issue.priority)
            && matches_query(issue, &self.query.to_lowercase())
    }

    /// Matching issues in their original order.
    #[must_use]
    pub fn apply<'a>(&self, issues: &'a [Issue]) -> Vec<&'a Issue> {
        issues.iter().filter(|issue| self.matches(issue)).collect()
    }
}

/// Filter `issues` by a search query and status/priority choices.
#[must_use]
pub fn filter_issues<'a>(
    issues: &'a [Issue],
    query: &str,
    status: Choice<Status>,
    priority: Choice<Priority>,
) -> Vec<&'a Issue> {
    IssueFilter { query: query.to_owned(), status, priority }.apply(issues)
}

/// `needle` must already be lowercased.
fn matches_query(issue: &Issue, needle: &str) -> bool {
    needle.is_empty()
        || issue.title.to_lowercase().contains(needle)
        || issue.description.to_lowercase().contains(needle)
}
