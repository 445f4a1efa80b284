//! ISBN validation failures.

use thiserror::Error;

/// Why a candidate string is not a usable ISBN.
///
/// The `Display` text of each variant is the reason string reported by
/// [`crate::validate`]; callers match on or log it verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IsbnError {
    /// Cleaned input is neither 10 nor 13 characters long.
    #[error("Invalid length: {0}")]
    InvalidLength(usize),

    /// Non-digit among the first nine ISBN-10 characters.
    #[error("Invalid character in ISBN-10")]
    InvalidCharacter10,

    /// Tenth ISBN-10 character is neither a digit nor `X`.
    #[error("Invalid check digit in ISBN-10")]
    InvalidCheckDigit10,

    #[error("Checksum failed for ISBN-10")]
    ChecksumFailed10,

    /// ISBN-13 does not start with `978` or `979`.
    #[error("Not a recognized prefix")]
    UnrecognizedPrefix,

    /// Non-digit anywhere in an ISBN-13 (a stray `X` ends up here).
    #[error("Invalid character in ISBN-13")]
    InvalidCharacter13,

    #[error("Checksum failed for ISBN-13")]
    ChecksumFailed13,
}

/// Result type for ISBN operations.
pub type Result<T> = std::result::Result<T, IsbnError>;
