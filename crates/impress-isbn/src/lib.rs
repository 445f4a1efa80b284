// Allow manual modulo checks since .is_multiple_of() is nightly-only
#![allow(clippy::manual_is_multiple_of)]

//! impress-isbn: ISBN validation and normalization for book tracking.
//!
//! Free-form text (typed, pasted, or scanned) goes in, and either a
//! normalized [`Identifier`] or a human-readable reason comes out:
//!
//! ```
//! use impress_isbn::{validate, IsbnType, ValidationResult};
//!
//! match validate("0-306-40615-2") {
//!     ValidationResult::Valid(id) => {
//!         assert_eq!(id.isbn_type(), IsbnType::Isbn10);
//!         assert_eq!(id.normalized_value(), "0306406152");
//!         assert_eq!(id.display_value(), "0-3064-0615-2");
//!     }
//!     ValidationResult::Invalid { reason } => panic!("{reason}"),
//! }
//!
//! assert_eq!(validate("").reason(), Some("Invalid length: 0"));
//! ```
//!
//! # Hyphenation
//!
//! Display values use a fixed positional grouping, not registrant-group
//! boundaries:
//! - ISBN-10: `1-4-4-1` (`0-3064-0615-2`)
//! - ISBN-13: `3-1-5-3-1` (`978-3-16148-410-0`)

#[cfg(feature = "native")]
uniffi::setup_scaffolding!();

pub mod error;
pub mod ffi;
pub mod identifier;
pub mod validate;

pub use error::*;
pub use ffi::*;
pub use identifier::*;
pub use validate::*;
