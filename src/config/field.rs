//! Field-addressed validation errors.
//!
//! A [`FieldError`] names the offending field with a [`FieldPath`] such as
//! `Hosts[0].Interfaces[1].macAddress`, so one report can point at every
//! problem in the document at once.

use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

// ============================================================================
// Field Paths
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Field(String),
    Index(usize),
}

/// Location of a field inside the configuration document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<Segment>,
}

impl FieldPath {
    /// Creates a path rooted at the named field.
    #[must_use]
    pub fn new(root: &str) -> Self {
        Self {
            segments: vec![Segment::Field(root.to_string())],
        }
    }

    /// Returns a new path with `name` appended as a child field.
    #[must_use]
    pub fn child(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::Field(name.to_string()));
        Self { segments }
    }

    /// Returns a new path addressing element `idx` of this sequence.
    #[must_use]
    pub fn index(&self, idx: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::Index(idx));
        Self { segments }
    }

    /// Returns the last field name in the path, skipping trailing indices.
    #[must_use]
    pub fn leaf(&self) -> Option<&str> {
        self.segments.iter().rev().find_map(|s| match s {
            Segment::Field(name) => Some(name.as_str()),
            Segment::Index(_) => None,
        })
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Field(name) if i == 0 => write!(f, "{name}")?,
                Segment::Field(name) => write!(f, ".{name}")?,
                Segment::Index(idx) => write!(f, "[{idx}]")?,
            }
        }
        Ok(())
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ============================================================================
// Field Errors
// ============================================================================

/// Category of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A required value is missing.
    Required,
    /// A value is present but malformed or conflicting.
    Invalid,
    /// A value is well-formed but disallowed by policy.
    Forbidden,
}

impl ErrorKind {
    const fn describe(self) -> &'static str {
        match self {
            Self::Required => "Required value",
            Self::Invalid => "Invalid value",
            Self::Forbidden => "Forbidden",
        }
    }
}

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Field that failed validation.
    pub path: FieldPath,
    /// Kind of failure.
    pub kind: ErrorKind,
    /// The rejected value, for `Invalid` errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bad_value: Option<String>,
    /// Human-readable explanation.
    pub detail: String,
}

impl FieldError {
    /// A required value is missing at `path`.
    #[must_use]
    pub fn required(path: FieldPath, detail: &str) -> Self {
        Self {
            path,
            kind: ErrorKind::Required,
            bad_value: None,
            detail: detail.to_string(),
        }
    }

    /// `value` at `path` is malformed.
    #[must_use]
    pub fn invalid(path: FieldPath, value: &str, detail: &str) -> Self {
        Self {
            path,
            kind: ErrorKind::Invalid,
            bad_value: Some(value.to_string()),
            detail: detail.to_string(),
        }
    }

    /// The field at `path` is disallowed.
    #[must_use]
    pub fn forbidden(path: FieldPath, detail: &str) -> Self {
        Self {
            path,
            kind: ErrorKind::Forbidden,
            bad_value: None,
            detail: detail.to_string(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.kind.describe())?;
        if let Some(value) = &self.bad_value {
            write!(f, ": {value:?}")?;
        }
        if !self.detail.is_empty() {
            write!(f, ": {}", self.detail)?;
        }
        Ok(())
    }
}

/// Ordered list of violations collected in one validation pass.
pub type ErrorList = Vec<FieldError>;

/// Wraps a non-empty [`ErrorList`] as a single error value.
///
/// Returns `None` when the list is empty (the document is valid).
#[must_use]
pub fn to_aggregate(errors: ErrorList) -> Option<AggregateError> {
    if errors.is_empty() {
        None
    } else {
        Some(AggregateError::new(errors))
    }
}

// ============================================================================
// Aggregate Error
// ============================================================================

/// Every violation from one validation pass, reported together.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid agent config: {}", render(.errors))]
pub struct AggregateError {
    errors: ErrorList,
}

impl AggregateError {
    /// Wraps `errors`; callers should pass a non-empty list.
    #[must_use]
    pub const fn new(errors: ErrorList) -> Self {
        Self { errors }
    }

    /// The individual violations, in detection order.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Consumes the aggregate and returns the underlying list.
    #[must_use]
    pub fn into_errors(self) -> ErrorList {
        self.errors
    }
}

fn render(errors: &[FieldError]) -> String {
    match errors {
        [single] => single.to_string(),
        many => {
            let joined: Vec<String> = many.iter().map(ToString::to_string).collect();
            format!("[{}]", joined.join(", "))
        }
    }
}
