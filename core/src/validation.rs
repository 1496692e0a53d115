use serde_json::{Map, Value};

use crate::{
    error::{Result, TodoError, ValidationErrors},
    models::{NewTodo, TodoPatch},
};

/// Reason reported when a required field is absent in full mode
pub const MISSING_FIELD: &str = "Missing data for required field.";
/// Reason reported when a field carries the wrong JSON type
pub const NOT_A_STRING: &str = "Not a valid string.";
/// Reason reported when `completed` is not a JSON boolean
pub const NOT_A_BOOLEAN: &str = "Not a valid boolean.";
/// Reason reported when a title is empty or whitespace after trimming
pub const EMPTY_TITLE: &str = "Title must not be empty.";

/// Validation mode, selecting which rule set applies.
///
/// `Full` is the creation rule set where `title` is mandatory and
/// `completed` falls back to its default; `Partial` is the update rule set
/// where every field is optional but present fields must still satisfy
/// their individual rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    Full,
    Partial,
}

/// Sanitized output of a successful validation pass
#[derive(Debug, Clone, PartialEq)]
pub enum ValidatedPayload {
    /// Full-mode result, ready for the create operation
    Create(NewTodo),
    /// Partial-mode result, ready for the update operation
    Patch(TodoPatch),
}

/// Payload validation for todo create and update requests.
///
/// Works on the raw JSON object so wrong-typed fields can be reported per
/// field instead of failing the whole deserialization, and so unknown
/// fields are silently ignored.
pub struct TodoValidator;

impl TodoValidator {
    /// Parse a request body into a raw payload object.
    ///
    /// An absent body, malformed JSON, a JSON null, a non-object value, and
    /// an empty object are all rejected as `TodoError::EmptyPayload`; this
    /// is the payload-level error distinct from per-field validation.
    pub fn parse_payload(body: &[u8]) -> Result<Map<String, Value>> {
        if body.is_empty() {
            return Err(TodoError::EmptyPayload);
        }

        let value: Value = serde_json::from_slice(body).map_err(|_| TodoError::EmptyPayload)?;

        match value {
            Value::Object(map) if !map.is_empty() => Ok(map),
            _ => Err(TodoError::EmptyPayload),
        }
    }

    /// Validate a raw payload under the given mode.
    ///
    /// Returns the sanitized field set on success, or every field-level
    /// failure at once so clients see the complete picture in one response.
    pub fn validate(
        payload: &Map<String, Value>,
        mode: ValidationMode,
    ) -> std::result::Result<ValidatedPayload, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let title = match payload.get("title") {
            Some(Value::String(raw)) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    errors.push("title", EMPTY_TITLE);
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            Some(_) => {
                errors.push("title", NOT_A_STRING);
                None
            }
            None => {
                if mode == ValidationMode::Full {
                    errors.push("title", MISSING_FIELD);
                }
                None
            }
        };

        let description = match payload.get("description") {
            Some(Value::String(raw)) => Some(Some(raw.clone())),
            Some(Value::Null) => Some(None),
            Some(_) => {
                errors.push("description", NOT_A_STRING);
                None
            }
            None => None,
        };

        let completed = match payload.get("completed") {
            Some(Value::Bool(flag)) => Some(*flag),
            Some(_) => {
                errors.push("completed", NOT_A_BOOLEAN);
                None
            }
            None => None,
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        match mode {
            ValidationMode::Full => {
                // A missing or invalid title was recorded above, so in full
                // mode reaching this point means the title is present.
                let title = match title {
                    Some(title) => title,
                    None => unreachable!("full mode requires a valid title"),
                };
                Ok(ValidatedPayload::Create(NewTodo {
                    title,
                    description: description.flatten(),
                    completed: completed.unwrap_or(false),
                }))
            }
            ValidationMode::Partial => Ok(ValidatedPayload::Patch(TodoPatch {
                title,
                description,
                completed,
            })),
        }
    }

    /// Full-mode validation, producing the create field set
    pub fn validate_create(
        payload: &Map<String, Value>,
    ) -> std::result::Result<NewTodo, ValidationErrors> {
        match Self::validate(payload, ValidationMode::Full)? {
            ValidatedPayload::Create(new_todo) => Ok(new_todo),
            ValidatedPayload::Patch(_) => unreachable!("full mode always yields a create payload"),
        }
    }

    /// Partial-mode validation, producing the update field set
    pub fn validate_update(
        payload: &Map<String, Value>,
    ) -> std::result::Result<TodoPatch, ValidationErrors> {
        match Self::validate(payload, ValidationMode::Partial)? {
            ValidatedPayload::Patch(patch) => Ok(patch),
            ValidatedPayload::Create(_) => unreachable!("partial mode always yields a patch"),
        }
    }
}
