use super::*;

fn filled() -> CreateIssueState {
    let mut state = CreateIssueState::default();
    state.show();
    state.set_title("Broken link".to_owned());
    state.set_description("Footer link 404s.".to_owned());
    state.set_priority_value("medium");
    state
}

#[test]
fn default_dialog_is_closed_and_empty() {
    let state = CreateIssueState::default();
    assert!(!state.is_open);
    assert_eq!(state.draft, IssueDraft::default());
    assert_eq!(state.priority_value(), "");
}

#[test]
fn valid_submit_returns_payload_and_resets() {
    let mut state = filled();
    let payload = state.submit().expect("valid draft");
    assert_eq!(payload.title, "Broken link");
    assert_eq!(payload.priority, Priority::Medium);
    assert!(!state.is_open);
    assert_eq!(state.draft, IssueDraft::default());
    assert_eq!(state.error, None);
}

#[test]
fn invalid_submit_keeps_dialog_open_with_error() {
    let mut state = filled();
    state.set_priority_value("");
    assert!(state.submit().is_none());
    assert!(state.is_open);
    assert_eq!(state.error, Some(DraftError::MissingPriority));
    assert_eq!(state.draft.title, "Broken link");
}

#[test]
fn dismiss_keeps_draft_but_clears_error() {
    let mut state = CreateIssueState::default();
    state.show();
    state.set_title("Half written".to_owned());
    let _ = state.submit();
    assert_eq!(state.error, Some(DraftError::MissingDescription));
    state.dismiss();
    assert!(!state.is_open);
    assert_eq!(state.error, None);
    assert_eq!(state.draft.title, "Half written");
}

#[test]
fn priority_value_round_trips_select_value() {
    let mut state = CreateIssueState::default();
    for raw in ["low", "medium", "high", "critical"] {
        state.set_priority_value(raw);
        assert_eq!(state.priority_value(), raw);
    }
    state.set_priority_value("bogus");
    assert_eq!(state.draft.priority, None);
}
