// 🚫 Error Taxonomy - what can go wrong when validating an amount

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// ISSUE CODES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueCode {
    /// Input is not a number
    WrongType,
    /// NaN or ±Infinity
    NotFinite,
    BelowMinimum,
    AboveMaximum,
    TooManyDecimals,
    /// Whole amounts only
    NotAWholeNumber,
}

impl IssueCode {
    pub fn name(&self) -> &str {
        match self {
            IssueCode::WrongType => "WrongType",
            IssueCode::NotFinite => "NotFinite",
            IssueCode::BelowMinimum => "BelowMinimum",
            IssueCode::AboveMaximum => "AboveMaximum",
            IssueCode::TooManyDecimals => "TooManyDecimals",
            IssueCode::NotAWholeNumber => "NotAWholeNumber",
        }
    }
}

// ============================================================================
// VALIDATION ISSUE / ERROR
// ============================================================================

/// A single violated rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub code: IssueCode,
    pub message: String,

    /// The bound that was violated (minimum, maximum or decimal count)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bound: Option<f64>,
}

impl ValidationIssue {
    pub fn new(code: IssueCode, message: impl Into<String>) -> Self {
        ValidationIssue {
            code,
            message: message.into(),
            bound: None,
        }
    }

    pub fn with_bound(mut self, bound: f64) -> Self {
        self.bound = Some(bound);
        self
    }
}

/// Structured failure returned by `parse`, carrying every issue found in one call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[error("{}", join_messages(.issues))]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationError {
    pub fn new(issues: Vec<ValidationIssue>) -> Self {
        ValidationError { issues }
    }

    pub fn single(issue: ValidationIssue) -> Self {
        ValidationError { issues: vec![issue] }
    }

    /// Whether any issue has the given code
    pub fn has(&self, code: IssueCode) -> bool {
        self.issues.iter().any(|issue| issue.code == code)
    }

    pub fn codes(&self) -> Vec<IssueCode> {
        self.issues.iter().map(|issue| issue.code).collect()
    }

    pub fn first(&self) -> Option<&ValidationIssue> {
        self.issues.first()
    }
}

fn join_messages(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(|issue| issue.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

// ============================================================================
// FLAT ERRORS
// ============================================================================

/// Raised by the `get_*` helpers. Keeps only a flat summary of the failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {label}: {value}")]
pub struct InvalidAmount {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown validator kind: {0}")]
pub struct UnknownKind(pub String);

// ============================================================================
// TESTS
// ============================================================================
