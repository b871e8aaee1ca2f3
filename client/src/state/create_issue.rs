//! Create-issue dialog state.
//!
//! Submissions are validated and logged, then discarded. The dialog keeps its
//! draft across cancel so reopening resumes where the user left off.

#[cfg(test)]
#[path = "create_issue_test.rs"]
mod create_issue_test;

use issues::{DraftError, IssueDraft, NewIssue, Priority};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CreateIssueState {
    pub is_open: bool,
    pub draft: IssueDraft,
    pub error: Option<DraftError>,
}

impl CreateIssueState {
    pub fn show(&mut self) {
        self.is_open = true;
    }

    pub fn dismiss(&mut self) {
        self.is_open = false;
        self.error = None;
    }

    pub fn set_title(&mut self, title: String) {
        self.draft.title = title;
    }

    pub fn set_description(&mut self, description: String) {
        self.draft.description = description;
    }

    /// Apply a priority `<select>` value; the empty placeholder clears it.
    pub fn set_priority_value(&mut self, raw: &str) {
        self.draft.priority = raw.parse::<Priority>().ok();
    }

    pub fn priority_value(&self) -> &'static str {
        self.draft.priority.map_or("", Priority::as_str)
    }

    /// Validate and log the draft.
    ///
    /// On success the payload is logged, the draft is cleared and the dialog
    /// closes. On failure the dialog stays open with the error set.
    pub fn submit(&mut self) -> Option<NewIssue> {
        match self.draft.submit() {
            Ok(payload) => {
                log::info!("create issue: {}", payload.to_log_line());
                self.draft.clear();
                self.error = None;
                self.is_open = false;
                Some(payload)
            }
            Err(e) => {
                self.error = Some(e);
                None
            }
        }
    }
}
