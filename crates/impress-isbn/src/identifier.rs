//! Validated ISBN values.

use crate::error::IsbnError;
use crate::validate::validate_internal;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// ISBN format, decided by the cleaned length alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[cfg_attr(feature = "native", derive(uniffi::Enum))]
pub enum IsbnType {
    #[serde(rename = "ISBN-10")]
    Isbn10,
    #[serde(rename = "ISBN-13")]
    Isbn13,
}

impl IsbnType {
    /// Number of characters in a normalized value of this type.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        match self {
            Self::Isbn10 => 10,
            Self::Isbn13 => 13,
        }
    }

    /// Display name for UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Isbn10 => "ISBN-10",
            Self::Isbn13 => "ISBN-13",
        }
    }

    /// Lengths of the hyphen-separated display groups.
    fn segments(&self) -> &'static [usize] {
        match self {
            Self::Isbn10 => &[1, 4, 4, 1],
            Self::Isbn13 => &[3, 1, 5, 3, 1],
        }
    }
}

impl fmt::Display for IsbnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A validated ISBN.
///
/// Only produced by [`crate::validate`] (or the checked `FromStr` /
/// `TryFrom` impls), so `normalized_value` always passed its checksum and
/// is exactly `isbn_type.len()` characters of digits plus an optional
/// trailing uppercase `X` for ISBN-10.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Identifier {
    normalized_value: String,
    display_value: String,
    isbn_type: IsbnType,
}

impl Identifier {
    pub(crate) fn new(normalized_value: String, isbn_type: IsbnType) -> Self {
        debug_assert_eq!(normalized_value.len(), isbn_type.len());
        let display_value = format_display(&normalized_value, isbn_type);
        Self {
            normalized_value,
            display_value,
            isbn_type,
        }
    }

    /// Digits and check character with all separators removed.
    pub fn normalized_value(&self) -> &str {
        &self.normalized_value
    }

    /// Hyphenated form for display, e.g. `978-3-16148-410-0`.
    pub fn display_value(&self) -> &str {
        &self.display_value
    }

    pub fn isbn_type(&self) -> IsbnType {
        self.isbn_type
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_value)
    }
}

impl FromStr for Identifier {
    type Err = IsbnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_internal(s)
    }
}

impl TryFrom<&str> for Identifier {
    type Error = IsbnError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        validate_internal(value)
    }
}

/// Join the fixed-width groups of a normalized value with hyphens.
fn format_display(normalized: &str, isbn_type: IsbnType) -> String {
    let mut groups = Vec::with_capacity(isbn_type.segments().len());
    let mut start = 0;
    for &len in isbn_type.segments() {
        groups.push(&normalized[start..start + len]);
        start += len;
    }
    groups.join("-")
}
