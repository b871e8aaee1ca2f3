//! Issue record model.
//!
//! DESIGN
//! ======
//! `Status` and `Priority` carry their lowercase wire names so select values,
//! CSS modifiers and serde all agree on a single spelling.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Error returned when a select value names no known status or priority.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} value: {value:?}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

/// Lifecycle stage of an issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Open,
    Triaged,
    Progress,
    Done,
}

impl Status {
    /// Variants in menu order.
    pub const ALL: [Self; 4] = [Self::Open, Self::Triaged, Self::Progress, Self::Done];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Triaged => "triaged",
            Self::Progress => "progress",
            Self::Done => "done",
        }
    }

    /// Menu label, e.g. `"In Progress"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Triaged => "Triaged",
            Self::Progress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// Badge text: the wire name with its first letter capitalized.
    #[must_use]
    pub fn badge(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Triaged => "Triaged",
            Self::Progress => "Progress",
            Self::Done => "Done",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseEnumError { kind: "status", value: s.to_owned() })
    }
}

/// Urgency classification of an issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    /// Variants in menu order, most urgent first.
    pub const ALL: [Self; 4] = [Self::Critical, Self::High, Self::Medium, Self::Low];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|priority| priority.as_str() == s)
            .ok_or_else(|| ParseEnumError { kind: "priority", value: s.to_owned() })
    }
}

/// A reporter or assignee.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Person {
    pub fn new(name: &str, avatar: Option<&str>) -> Self {
        Self { name: name.to_owned(), avatar: avatar.map(str::to_owned) }
    }

    /// Avatar fallback text: the first character of each name word.
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

/// A trackable unit of work.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Unique `ISS-NNN` identifier.
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: Status,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<Person>,
    pub reporter: Person,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Issue {
    /// Update date as `M/D/YYYY`.
    #[must_use]
    pub fn updated_label(&self) -> String {
        format_short_date(self.updated_at)
    }
}

/// Format a timestamp's calendar date as `M/D/YYYY`.
#[must_use]
pub fn format_short_date(ts: OffsetDateTime) -> String {
    format!("{}/{}/{}", u8::from(ts.month()), ts.day(), ts.year())
}
