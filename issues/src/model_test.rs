use super::*;
use time::macros::datetime;

// =============================================================
// Status / Priority
// =============================================================

#[test]
fn status_round_trips_through_wire_names() {
    for status in Status::ALL {
        assert_eq!(status.as_str().parse::<Status>(), Ok(status));
    }
}

#[test]
fn status_rejects_unknown_and_all() {
    let err = "all".parse::<Status>().unwrap_err();
    assert_eq!(err.kind, "status");
    assert_eq!(err.value, "all");
    assert!("Open".parse::<Status>().is_err());
}

#[test]
fn status_labels_match_menu_text() {
    assert_eq!(Status::Progress.label(), "In Progress");
    assert_eq!(Status::Progress.badge(), "Progress");
    assert_eq!(Status::Open.label(), "Open");
}

#[test]
fn priority_menu_order_is_most_urgent_first() {
    assert_eq!(Priority::ALL[0], Priority::Critical);
    assert_eq!(Priority::ALL[3], Priority::Low);
}

#[test]
fn priority_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Priority::Critical).unwrap(), "\"critical\"");
    let parsed: Priority = serde_json::from_str("\"medium\"").unwrap();
    assert_eq!(parsed, Priority::Medium);
}

#[test]
fn parse_error_message_names_kind_and_value() {
    let err = "urgent".parse::<Priority>().unwrap_err();
    assert_eq!(err.to_string(), "unknown priority value: \"urgent\"");
}

// =============================================================
// Person
// =============================================================

#[test]
fn initials_take_first_letter_of_each_word() {
    assert_eq!(Person::new("Sarah Chen", None).initials(), "SC");
    assert_eq!(Person::new("Cher", None).initials(), "C");
    assert_eq!(Person::new("  Mary  Ann Lee ", None).initials(), "MAL");
}

// =============================================================
// Issue
// =============================================================

fn sample() -> Issue {
    Issue {
        id: "ISS-900".to_owned(),
        title: "Title".to_owned(),
        description: "Body".to_owned(),
        status: Status::Open,
        priority: Priority::Low,
        assignee: None,
        reporter: Person::new("Jo Park", Some("https://example.test/a.png")),
        created_at: datetime!(2024-01-05 08:00:00 UTC),
        updated_at: datetime!(2024-11-23 17:45:00 UTC),
    }
}

#[test]
fn updated_label_is_month_day_year() {
    assert_eq!(sample().updated_label(), "11/23/2024");
}

#[test]
fn issue_serializes_with_camel_case_and_rfc3339() {
    let value = serde_json::to_value(sample()).unwrap();
    assert_eq!(value["status"], "open");
    assert_eq!(value["createdAt"], "2024-01-05T08:00:00Z");
    assert!(value.get("assignee").is_none());
    assert_eq!(value["reporter"]["name"], "Jo Park");
}

#[test]
fn issue_deserializes_optional_assignee() {
    let raw = r#"{
        "id": "ISS-901",
        "title": "t",
        "description": "d",
        "status": "progress",
        "priority": "high",
        "assignee": { "name": "Ann" },
        "reporter": { "name": "Bo" },
        "createdAt": "2024-01-13T16:20:00Z",
        "updatedAt": "2024-01-15T09:10:00Z"
    }"#;
    let issue: Issue = serde_json::from_str(raw).unwrap();
    assert_eq!(issue.status, Status::Progress);
    assert_eq!(issue.assignee.unwrap().avatar, None);
    assert_eq!(issue.reporter.name, "Bo");
}
