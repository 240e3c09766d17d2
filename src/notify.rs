//! Output surface for submit results
//!
//! The form store only produces outcomes; a `Notifier` decides how the user
//! hears about them. The terminal app queues modal notices.

use crate::registration::{ErrorSet, FormFields, SubmitOutcome};
use std::collections::VecDeque;

/// Generic notice shown when a submit is rejected
pub const REJECTED_MESSAGE: &str = "Please fill in all fields correctly.";

/// Receiver of submit outcomes
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    /// A submit passed validation; `snapshot` is the submitted data
    fn submitted(&mut self, snapshot: &FormFields);

    /// A submit failed validation
    fn rejected(&mut self, errors: &ErrorSet);
}

/// Route a submit outcome to the matching notifier call
pub fn dispatch(notifier: &mut dyn Notifier, outcome: &SubmitOutcome) {
    match outcome {
        SubmitOutcome::Accepted(snapshot) => notifier.submitted(snapshot),
        SubmitOutcome::Rejected(errors) => notifier.rejected(errors),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// A modal message waiting to be acknowledged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

/// Queue of notices rendered one at a time as dialogs
#[derive(Debug, Clone, Default)]
pub struct NoticeQueue {
    notices: VecDeque<Notice>,
    compact_snapshot: bool,
}

impl NoticeQueue {
    pub fn new(compact_snapshot: bool) -> Self {
        Self {
            notices: VecDeque::new(),
            compact_snapshot,
        }
    }

    pub fn has_notice(&self) -> bool {
        !self.notices.is_empty()
    }

    /// The notice currently on screen
    pub fn current(&self) -> Option<&Notice> {
        self.notices.front()
    }

    pub fn dismiss(&mut self) {
        self.notices.pop_front();
    }

    fn push(&mut self, notice: Notice) {
        self.notices.push_back(notice);
    }

    fn render_snapshot(&self, snapshot: &FormFields) -> String {
        let json = if self.compact_snapshot {
            serde_json::to_string(snapshot)
        } else {
            serde_json::to_string_pretty(snapshot)
        };
        json.unwrap_or_else(|err| {
            tracing::warn!("Failed to serialize snapshot: {err}");
            format!("{snapshot:?}")
        })
    }
}

impl Notifier for NoticeQueue {
    fn submitted(&mut self, snapshot: &FormFields) {
        let mut message = format!(
            "Data stored successfully:\n{}",
            self.render_snapshot(snapshot)
        );
        if let Some(date) = snapshot.dob_date() {
            message.push_str(&format!("\n\nBorn {}", date.format("%A, %-d %B %Y")));
        }
        self.push(Notice {
            kind: NoticeKind::Success,
            title: "Registration Complete".to_string(),
            message,
        });
    }

    fn rejected(&mut self, errors: &ErrorSet) {
        tracing::debug!(
            fields = ?errors.fields().map(|f| f.as_str()).collect::<Vec<_>>(),
            "notifying rejected submit"
        );
        self.push(Notice {
            kind: NoticeKind::Failure,
            title: "Registration Failed".to_string(),
            message: REJECTED_MESSAGE.to_string(),
        });
    }
}
