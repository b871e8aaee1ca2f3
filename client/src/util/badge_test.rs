use super::*;

#[test]
fn status_class_uses_wire_name() {
    assert_eq!(status_badge_class(Status::Progress), "badge badge--status status-progress");
    assert_eq!(status_badge_class(Status::Open), "badge badge--status status-open");
}

#[test]
fn priority_class_uses_wire_name() {
    assert_eq!(priority_badge_class(Priority::Critical), "badge badge--outline priority-critical");
}
