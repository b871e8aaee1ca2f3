//! CSS class helpers for status and priority badges.

#[cfg(test)]
#[path = "badge_test.rs"]
mod badge_test;

use issues::{Priority, Status};

pub fn status_badge_class(status: Status) -> String {
    format!("badge badge--status status-{}", status.as_str())
}

pub fn priority_badge_class(priority: Priority) -> String {
    format!("badge badge--outline priority-{}", priority.as_str())
}
