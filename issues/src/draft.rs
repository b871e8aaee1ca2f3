//! Create-issue form draft and required-field validation.
//!
//! A submitted draft becomes a [`NewIssue`] payload. Nothing inserts that
//! payload into the store; callers log it and drop it.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use serde::{Deserialize, Serialize};

use crate::model::Priority;

/// Validation failure for a create-issue submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("Title is required")]
    MissingTitle,
    #[error("Description is required")]
    MissingDescription,
    #[error("Priority is required")]
    MissingPriority,
}

/// Controlled-input values of the create-issue dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IssueDraft {
    pub title: String,
    pub description: String,
    pub priority: Option<Priority>,
}

/// Validated create-issue payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewIssue {
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

impl IssueDraft {
    /// Validate the draft and build its payload.
    ///
    /// Only empty values fail, matching a browser's `required` check, so a
    /// whitespace-only title is accepted. The first missing field in form
    /// order is reported.
    ///
    /// # Errors
    ///
    /// Returns the [`DraftError`] for the first empty required field.
    pub fn submit(&self) -> Result<NewIssue, DraftError> {
        if self.title.is_empty() {
            return Err(DraftError::MissingTitle);
        }
        if self.description.is_empty() {
            return Err(DraftError::MissingDescription);
        }
        let priority = self.priority.ok_or(DraftError::MissingPriority)?;
        Ok(NewIssue { title: self.title.clone(), description: self.description.clone(), priority })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl NewIssue {
    /// JSON form written to the console log.
    #[must_use]
    pub fn to_log_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{self:?}"))
    }
}
