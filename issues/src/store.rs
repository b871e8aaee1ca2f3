//! Fixed in-memory issue inventory.
//!
//! The set is built once on first access and never mutated afterwards.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::LazyLock;

use time::macros::datetime;

use crate::model::{Issue, Person, Priority, Status};

static MOCK_ISSUES: LazyLock<Vec<Issue>> = LazyLock::new(build_mock_issues);

/// All issues known to the desk, in display order.
#[must_use]
pub fn mock_issues() -> &'static [Issue] {
    &MOCK_ISSUES
}

/// Look up an issue by its `ISS-NNN` id.
#[must_use]
pub fn find(id: &str) -> Option<&'static Issue> {
    mock_issues().iter().find(|issue| issue.id == id)
}

fn build_mock_issues() -> Vec<Issue> {
    vec![
        Issue {
            id: "ISS-001".to_owned(),
            title: "Login page not responsive on mobile devices".to_owned(),
            description: "The login form breaks on screens smaller than 768px. The submit button is cut off and form fields overlap.".to_owned(),
            status: Status::Open,
            priority: Priority::High,
            assignee: Some(Person::new(
                "Sarah Chen",
                Some("https://images.unsplash.com/photo-1494790108755-2616b612b786?w=32&h=32&fit=crop&crop=face"),
            )),
            reporter: Person::new(
                "John Doe",
                Some("https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=32&h=32&fit=crop&crop=face"),
            ),
            created_at: datetime!(2024-01-15 10:30:00 UTC),
            updated_at: datetime!(2024-01-15 14:22:00 UTC),
        },
        Issue {
            id: "ISS-002".to_owned(),
            title: "Database connection timeout in production".to_owned(),
            description: "Users experiencing slow page loads and timeouts during peak hours. Connection pool may need adjustment.".to_owned(),
            status: Status::Triaged,
            priority: Priority::Critical,
            assignee: Some(Person::new("Mike Johnson", None)),
            reporter: Person::new(
                "Emily Davis",
                Some("https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=32&h=32&fit=crop&crop=face"),
            ),
            created_at: datetime!(2024-01-14 09:15:00 UTC),
            updated_at: datetime!(2024-01-15 11:45:00 UTC),
        },
        Issue {
            id: "ISS-003".to_owned(),
            title: "Email notifications not sending".to_owned(),
            description: "Users report not receiving password reset emails. SMTP configuration needs review.".to_owned(),
            status: Status::Progress,
            priority: Priority::Medium,
            assignee: Some(Person::new(
                "Alex Rivera",
                Some("https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=32&h=32&fit=crop&crop=face"),
            )),
            reporter: Person::new("Lisa Wong", None),
            created_at: datetime!(2024-01-13 16:20:00 UTC),
            updated_at: datetime!(2024-01-15 09:10:00 UTC),
        },
        Issue {
            id: "ISS-004".to_owned(),
            title: "Add dark mode toggle to settings".to_owned(),
            description: "Feature request to add a dark mode option for better user experience during night time usage.".to_owned(),
            status: Status::Done,
            priority: Priority::Low,
            assignee: Some(Person::new("David Kim", None)),
            reporter: Person::new(
                "Tom Wilson",
                Some("https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=32&h=32&fit=crop&crop=face"),
            ),
            created_at: datetime!(2024-01-10 14:30:00 UTC),
            updated_at: datetime!(2024-01-14 17:45:00 UTC),
        },
    ]
}
