use issues::{Priority, Status};

use super::*;

fn ids(state: &IssueListState) -> Vec<&'static str> {
    state.visible().into_iter().map(|i| i.id.as_str()).collect()
}

#[test]
fn default_state_shows_every_issue() {
    let state = IssueListState::default();
    assert_eq!(ids(&state), ["ISS-001", "ISS-002", "ISS-003", "ISS-004"]);
    assert_eq!(state.summary(), "4 of 4 issues");
}

#[test]
fn select_values_drive_filters() {
    let mut state = IssueListState::default();
    state.set_status_value("done");
    assert_eq!(state.filter.status, Choice::Only(Status::Done));
    assert_eq!(ids(&state), ["ISS-004"]);

    state.set_status_value("all");
    state.set_priority_value("critical");
    assert_eq!(state.filter.priority, Choice::Only(Priority::Critical));
    assert_eq!(ids(&state), ["ISS-002"]);
    assert_eq!(state.summary(), "1 of 4 issues");
}

#[test]
fn query_updates_visible_list() {
    let mut state = IssueListState::default();
    state.set_query("login".to_owned());
    assert_eq!(ids(&state), ["ISS-001"]);
    state.set_query(String::new());
    assert_eq!(state.visible().len(), 4);
}

#[test]
fn conflicting_filters_yield_empty_summary() {
    let mut state = IssueListState::default();
    state.set_status_value("open");
    state.set_priority_value("low");
    assert!(state.visible().is_empty());
    assert_eq!(state.summary(), "0 of 4 issues");
}

#[test]
fn unknown_select_value_falls_back_to_all() {
    let mut state = IssueListState::default();
    state.set_status_value("done");
    state.set_status_value("archived");
    assert_eq!(state.filter.status, Choice::All);
    state.set_priority_value("");
    assert_eq!(state.filter.priority, Choice::All);
}

#[test]
fn summary_label_formats_counts() {
    assert_eq!(summary_label(0, 0), "0 of 0 issues");
    assert_eq!(summary_label(3, 10), "3 of 10 issues");
}
