//! Issue-list filter state.
//!
//! DESIGN
//! ======
//! The filter is the only mutable input. The visible list is re-derived from
//! the full mock inventory on every change rather than cached.

#[cfg(test)]
#[path = "issue_list_test.rs"]
mod issue_list_test;

use std::str::FromStr;

use issues::model::ParseEnumError;
use issues::{Choice, Issue, IssueFilter, mock_issues};

/// Search query plus status and priority choices for the issues page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IssueListState {
    pub filter: IssueFilter,
}

impl IssueListState {
    pub fn set_query(&mut self, query: String) {
        self.filter.query = query;
    }

    /// Apply a status `<select>` value.
    pub fn set_status_value(&mut self, raw: &str) {
        self.filter.status = parse_choice(raw);
    }

    /// Apply a priority `<select>` value.
    pub fn set_priority_value(&mut self, raw: &str) {
        self.filter.priority = parse_choice(raw);
    }

    /// Issues passing the current filter, in inventory order.
    pub fn visible(&self) -> Vec<&'static Issue> {
        self.filter.apply(mock_issues())
    }

    /// Badge text, e.g. `"2 of 4 issues"`.
    pub fn summary(&self) -> String {
        summary_label(self.visible().len(), mock_issues().len())
    }
}

pub fn summary_label(shown: usize, total: usize) -> String {
    format!("{shown} of {total} issues")
}

/// Unknown values fall back to `All`; rendered options never produce one.
fn parse_choice<T: FromStr<Err = ParseEnumError>>(raw: &str) -> Choice<T> {
    match raw.parse() {
        Ok(choice) => choice,
        Err(e) => {
            log::warn!("ignoring filter value: {e}");
            Choice::All
        }
    }
}
