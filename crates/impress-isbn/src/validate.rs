//! ISBN sanitization and checksum validation.

use crate::error::{IsbnError, Result};
use crate::identifier::{Identifier, IsbnType};
use serde::Serialize;

/// ISBN-13 prefixes assigned to books (EAN "Bookland").
const ISBN13_PREFIXES: [&str; 2] = ["978", "979"];

/// Outcome of [`validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ValidationResult {
    Valid(Identifier),
    Invalid { reason: String },
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// The identifier, if validation succeeded.
    pub fn identifier(&self) -> Option<&Identifier> {
        match self {
            Self::Valid(id) => Some(id),
            Self::Invalid { .. } => None,
        }
    }

    /// The failure reason, if validation failed.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid { reason } => Some(reason),
        }
    }

    pub fn into_result(self) -> std::result::Result<Identifier, String> {
        match self {
            Self::Valid(id) => Ok(id),
            Self::Invalid { reason } => Err(reason),
        }
    }
}

impl From<Result<Identifier>> for ValidationResult {
    fn from(result: Result<Identifier>) -> Self {
        match result {
            Ok(id) => Self::Valid(id),
            Err(e) => Self::Invalid {
                reason: e.to_string(),
            },
        }
    }
}

/// Validate free-form text as an ISBN-10 or ISBN-13.
///
/// Everything except ASCII digits and `X`/`x` is discarded first, so
/// hyphens, spaces and an `ISBN:` label are all tolerated. Never panics;
/// every failure comes back as [`ValidationResult::Invalid`].
///
/// # Examples
/// ```
/// use impress_isbn::validate;
///
/// let id = validate("978-3-16-148410-0").into_result().unwrap();
/// assert_eq!(id.display_value(), "978-3-16148-410-0");
///
/// assert_eq!(
///     validate("1234567890123").reason(),
///     Some("Not a recognized prefix")
/// );
/// ```
pub fn validate(raw_value: &str) -> ValidationResult {
    let result = validate_internal(raw_value);
    match &result {
        Ok(id) => tracing::debug!(
            isbn_type = %id.isbn_type(),
            normalized = id.normalized_value(),
            "ISBN accepted"
        ),
        Err(e) => tracing::debug!(reason = %e, "ISBN rejected"),
    }
    result.into()
}

pub(crate) fn validate_internal(raw_value: &str) -> Result<Identifier> {
    let cleaned = sanitize(raw_value);
    tracing::trace!(cleaned_len = cleaned.len(), "sanitized ISBN candidate");

    match cleaned.len() {
        10 => validate_isbn10(&cleaned),
        13 => validate_isbn13(&cleaned),
        n => Err(IsbnError::InvalidLength(n)),
    }
}

/// Keep only ASCII digits and `X`/`x`.
fn sanitize(raw_value: &str) -> String {
    raw_value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == 'X' || *c == 'x')
        .collect()
}

/// Validate ISBN-10 checksum (weights 1..=10, sum divisible by 11)
fn validate_isbn10(candidate: &str) -> Result<Identifier> {
    let normalized = candidate.to_ascii_uppercase();
    let chars: Vec<char> = normalized.chars().collect();

    let mut sum: u32 = 0;
    for (i, c) in chars.iter().take(9).enumerate() {
        let digit = c.to_digit(10).ok_or(IsbnError::InvalidCharacter10)?;
        sum += (i as u32 + 1) * digit;
    }

    let check = match chars.get(9) {
        Some('X') => 10,
        Some(c) => c.to_digit(10).ok_or(IsbnError::InvalidCheckDigit10)?,
        None => return Err(IsbnError::InvalidLength(chars.len())),
    };
    sum += 10 * check;

    if sum % 11 != 0 {
        return Err(IsbnError::ChecksumFailed10);
    }

    Ok(Identifier::new(normalized, IsbnType::Isbn10))
}

/// Validate ISBN-13 prefix and checksum (alternating weights 1 and 3)
fn validate_isbn13(candidate: &str) -> Result<Identifier> {
    if !ISBN13_PREFIXES.iter().any(|p| candidate.starts_with(p)) {
        return Err(IsbnError::UnrecognizedPrefix);
    }

    let digits: Vec<u32> = candidate.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() != 13 {
        return Err(IsbnError::InvalidCharacter13);
    }

    let sum: u32 = digits
        .iter()
        .take(12)
        .enumerate()
        .map(|(i, &d)| if i % 2 == 0 { d } else { d * 3 })
        .sum();
    let expected = (10 - sum % 10) % 10;

    if expected != digits[12] {
        return Err(IsbnError::ChecksumFailed13);
    }

    Ok(Identifier::new(candidate.to_string(), IsbnType::Isbn13))
}
