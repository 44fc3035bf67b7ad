//! Error types for the strict accessors and serde interop.
//!
//! The typed accessors ([`get`](crate::get), [`try_get`](crate::try_get), ...)
//! and the comparator ([`equal`](crate::equal)) never fail: a type mismatch is
//! reported as `None` or the caller's default, and a shape mismatch as `false`.
//! This module only matters for the *strict* companions
//! ([`require`](crate::require), [`require_member`](crate::require_member) and
//! the `TryFrom<&Value>` impls), which keep the reason a lookup failed.
//!
//! ## Examples
//!
//! ```rust
//! use json_access::{require, require_member, value, Error};
//!
//! let doc = value!({ "name": "Alice" });
//!
//! let err = require::<bool>(&doc).unwrap_err();
//! assert!(matches!(err, Error::TypeMismatch { .. }));
//!
//! let err = require_member::<String>(&doc, "age").unwrap_err();
//! assert_eq!(err.to_string(), "missing member \"age\"");
//! ```

use crate::value::Kind;
use std::fmt;
use thiserror::Error;

/// Represents the reasons a strict lookup or a serde conversion can fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The node exists but its variant is not compatible with the requested type
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: Kind },

    /// A member lookup was attempted on a node that is not an object
    #[error("expected object, found {found}")]
    NotAnObject { found: Kind },

    /// The object has no member with the requested key
    #[error("missing member {key:?}")]
    MissingMember { key: String },

    /// Custom error
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates a type mismatch error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_access::{Error, Kind};
    ///
    /// let err = Error::type_mismatch("int32", Kind::String);
    /// assert_eq!(err.to_string(), "type mismatch: expected int32, found string");
    /// ```
    pub fn type_mismatch(expected: &str, found: Kind) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            found,
        }
    }

    /// Creates an error for a member lookup on a non-object node.
    pub fn not_an_object(found: Kind) -> Self {
        Error::NotAnObject { found }
    }

    /// Creates a missing member error.
    pub fn missing_member(key: &str) -> Self {
        Error::MissingMember {
            key: key.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
