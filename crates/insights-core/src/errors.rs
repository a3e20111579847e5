//! Validation fault raised at the request boundary.
//!
//! Storage faults live in `insights-db`; the two kinds never share a type so
//! callers branch on the variant instead of inspecting messages.

use serde::Serialize;
use thiserror::Error;

/// One field that failed validation.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldIssue {
    /// Field name, or `"(root)"` when the whole input had the wrong shape.
    pub field: String,
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Client input did not match the command shape. Lists every failing field.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid request body: {}", render_issues(.issues))]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    #[must_use]
    pub const fn new(issues: Vec<FieldIssue>) -> Self {
        Self { issues }
    }

    /// Whether `field` is among the failing fields.
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.issues.iter().any(|issue| issue.field == field)
    }
}

fn render_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("{}: {}", issue.field, issue.message))
        .collect::<Vec<_>>()
        .join("; ")
}
