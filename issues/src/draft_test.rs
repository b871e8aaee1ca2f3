use super::*;

fn filled() -> IssueDraft {
    IssueDraft {
        title: "Crash on save".to_owned(),
        description: "Saving twice crashes the editor.".to_owned(),
        priority: Some(Priority::High),
    }
}

#[test]
fn complete_draft_submits_payload() {
    let payload = filled().submit().unwrap();
    assert_eq!(payload.title, "Crash on save");
    assert_eq!(payload.priority, Priority::High);
}

#[test]
fn missing_fields_are_reported_in_form_order() {
    assert_eq!(IssueDraft::default().submit(), Err(DraftError::MissingTitle));

    let mut draft = filled();
    draft.description.clear();
    assert_eq!(draft.submit(), Err(DraftError::MissingDescription));

    let mut draft = filled();
    draft.priority = None;
    assert_eq!(draft.submit(), Err(DraftError::MissingPriority));
}

#[test]
fn whitespace_counts_as_a_value() {
    let mut draft = filled();
    draft.title = "   ".to_owned();
    assert!(draft.submit().is_ok());
}

#[test]
fn clear_resets_every_field() {
    let mut draft = filled();
    draft.clear();
    assert_eq!(draft, IssueDraft::default());
}

#[test]
fn error_messages_are_user_facing() {
    assert_eq!(DraftError::MissingTitle.to_string(), "Title is required");
    assert_eq!(DraftError::MissingPriority.to_string(), "Priority is required");
}

#[test]
fn log_line_is_json_with_lowercase_priority() {
    let line = filled().submit().unwrap().to_log_line();
    let value: serde_json::Value = serde_json::from_str(&line).unwrap();
    assert_eq!(value["title"], "Crash on save");
    assert_eq!(value["description"], "Saving twice crashes the editor.");
    assert_eq!(value["priority"], "high");
}
