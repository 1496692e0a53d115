use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Result type alias for todo operations
pub type Result<T> = std::result::Result<T, TodoError>;

/// Field-level validation failures, keyed by field name.
///
/// Serializes as `{"field": ["reason", ...]}`, the shape clients receive in
/// the 400 validation envelope. A `BTreeMap` keeps field order stable for
/// assertions and log output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    messages: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure reason against a field
    pub fn push(&mut self, field: &str, reason: impl Into<String>) {
        self.messages
            .entry(field.to_string())
            .or_default()
            .push(reason.into());
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Reasons recorded for one field, if any
    pub fn field(&self, field: &str) -> Option<&[String]> {
        self.messages.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, reasons) in &self.messages {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, reasons.join(", "))?;
            first = false;
        }
        Ok(())
    }
}

/// Error taxonomy for the todo API.
///
/// Every layer reports failures through this enum; the HTTP boundary maps
/// each variant to a status code exactly once. Client input problems carry
/// structured detail, store and internal faults carry a message that is
/// logged but never sent to clients verbatim.
///
/// # Examples
///
/// ```rust
/// use todo_core::error::TodoError;
///
/// let not_found = TodoError::not_found_id(42);
/// assert!(not_found.is_not_found());
/// assert_eq!(not_found.status_code(), 404);
/// assert_eq!(TodoError::EmptyPayload.status_code(), 400);
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// Todo not found by the given identifier
    #[error("{0}")]
    NotFound(String),

    /// Request body was missing, unparseable, or an empty object
    #[error("No input data provided")]
    EmptyPayload,

    /// Field-level validation failures
    #[error("Validation error: {0}")]
    Validation(ValidationErrors),

    /// Database operation error
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal system error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TodoError {
    /// Create a not found error for a todo ID
    pub fn not_found_id(id: i32) -> Self {
        Self::NotFound(format!("Todo with id {id} not found"))
    }

    /// Create a not found error for a raw, possibly non-numeric path segment
    pub fn not_found_raw(raw: &str) -> Self {
        Self::NotFound(format!("Todo with id '{raw}' not found"))
    }

    /// Create a validation error with a single reason for one field
    pub fn invalid_field(field: &str, reason: impl Into<String>) -> Self {
        let mut errors = ValidationErrors::new();
        errors.push(field, reason);
        Self::Validation(errors)
    }

    /// Check if this error indicates a not found condition
    pub fn is_not_found(&self) -> bool {
        matches!(self, TodoError::NotFound(_))
    }

    /// Check if this error indicates a client input problem
    pub fn is_validation(&self) -> bool {
        matches!(self, TodoError::Validation(_) | TodoError::EmptyPayload)
    }

    /// Check if this error indicates a database problem
    pub fn is_database(&self) -> bool {
        matches!(self, TodoError::Database(_))
    }

    /// HTTP status code this error maps to at the API boundary
    pub fn status_code(&self) -> u16 {
        match self {
            TodoError::NotFound(_) => 404,
            TodoError::EmptyPayload => 400,
            TodoError::Validation(_) => 400,
            TodoError::Database(_) => 500,
            TodoError::Configuration(_) => 500,
            TodoError::Internal(_) => 500,
        }
    }
}

impl From<ValidationErrors> for TodoError {
    fn from(errors: ValidationErrors) -> Self {
        TodoError::Validation(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let error = TodoError::not_found_id(42);
        assert_eq!(
            error,
            TodoError::NotFound("Todo with id 42 not found".to_string())
        );
        assert!(error.is_not_found());
        assert_eq!(error.status_code(), 404);

        let error = TodoError::invalid_field("title", "Title must not be empty.");
        assert!(error.is_validation());
        assert_eq!(error.status_code(), 400);
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(TodoError::EmptyPayload.status_code(), 400);
        assert_eq!(TodoError::Database("boom".to_string()).status_code(), 500);
        assert_eq!(TodoError::Internal("boom".to_string()).status_code(), 500);
        assert_eq!(
            TodoError::Configuration("bad".to_string()).status_code(),
            500
        );
    }

    #[test]
    fn test_error_display() {
        let error = TodoError::NotFound("Todo with id 1 not found".to_string());
        assert_eq!(format!("{error}"), "Todo with id 1 not found");

        assert_eq!(format!("{}", TodoError::EmptyPayload), "No input data provided");

        let error = TodoError::invalid_field("title", "Missing data for required field.");
        assert_eq!(
            format!("{error}"),
            "Validation error: title: Missing data for required field."
        );
    }

    #[test]
    fn test_error_predicates() {
        assert!(TodoError::EmptyPayload.is_validation());
        assert!(!TodoError::EmptyPayload.is_not_found());

        assert!(TodoError::Database("x".to_string()).is_database());
        assert!(!TodoError::Database("x".to_string()).is_validation());
    }

    #[test]
    fn test_validation_errors_accumulate() {
        let mut errors = ValidationErrors::new();
        assert!(errors.is_empty());

        errors.push("title", "Missing data for required field.");
        errors.push("completed", "Not a valid boolean.");
        errors.push("completed", "Second reason");

        assert!(!errors.is_empty());
        assert_eq!(errors.field("completed").unwrap().len(), 2);
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["completed", "title"]);
    }

    #[test]
    fn test_validation_errors_serialize_as_map() {
        let mut errors = ValidationErrors::new();
        errors.push("title", "Missing data for required field.");

        let value = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            value["title"][0],
            serde_json::json!("Missing data for required field.")
        );
    }
}
