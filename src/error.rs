//! Error types for input validation and exit-scenario lookup

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single violated input constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Name of the offending input field
    pub field: String,

    /// What the field must satisfy
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Invalid analysis input
///
/// Validation inspects every field before reporting, so `issues` holds the
/// complete list of violations rather than just the first one found.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("invalid analysis input: {} issue(s)", .issues.len())]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationError {
    pub fn new(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }

    /// One issue per line, for CLI and log output
    pub fn describe(&self) -> String {
        self.issues
            .iter()
            .map(|i| format!("{}: {}", i.field, i.message))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Errors from exit-scenario calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExitError {
    /// The requested exit year is 0 or beyond the projected horizon
    #[error("exit year {requested} is outside the projected horizon 1..={horizon}")]
    InvalidExitYear { requested: u32, horizon: u32 },
}
