//! Validated command types for the two mutations.
//!
//! Construct these through [`crate::validation`] when the input is untrusted.
//! Both fields are already range-checked by the time a command exists.

use serde::{Deserialize, Serialize};

/// Request to persist a new insight. `id` and `createdAt` are server-assigned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateInsight {
    pub brand: i64,
    pub text: String,
}

/// Request to remove an insight by id. A missing row is not an error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteInsight {
    pub id: i64,
}
