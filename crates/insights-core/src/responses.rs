//! JSON bodies returned by the HTTP API.
//!
//! Successful reads return `Insight` (or a list of them) directly; these
//! types cover acknowledgements and faults.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::FieldIssue;

/// Acknowledgement for a successful mutation, e.g. `{"message": "Insight created"}`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error body. `issues` is only present for validation faults.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<FieldIssue>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            issues: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_issues(mut self, issues: Vec<FieldIssue>) -> Self {
        self.issues = issues;
        self
    }
}
