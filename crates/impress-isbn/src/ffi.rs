//! Flat validation record for Swift/Kotlin callers.

use crate::identifier::IsbnType;
use crate::validate::ValidationResult;
use serde::Serialize;

/// [`ValidationResult`] flattened into optional fields, since UniFFI
/// records cannot carry enum payloads with private fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct IsbnValidation {
    pub is_valid: bool,
    pub normalized_value: Option<String>,
    pub display_value: Option<String>,
    pub isbn_type: Option<IsbnType>,
    pub reason: Option<String>,
}

impl From<ValidationResult> for IsbnValidation {
    fn from(result: ValidationResult) -> Self {
        match result {
            ValidationResult::Valid(id) => Self {
                is_valid: true,
                normalized_value: Some(id.normalized_value().to_string()),
                display_value: Some(id.display_value().to_string()),
                isbn_type: Some(id.isbn_type()),
                reason: None,
            },
            ValidationResult::Invalid { reason } => Self {
                is_valid: false,
                normalized_value: None,
                display_value: None,
                isbn_type: None,
                reason: Some(reason),
            },
        }
    }
}

#[cfg(feature = "native")]
#[uniffi::export]
pub fn validate_isbn_ffi(raw_value: String) -> IsbnValidation {
    crate::validate::validate(&raw_value).into()
}
