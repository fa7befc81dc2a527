//! Error types for element conversion and the text codec.
//!
//! Every failure in this crate is reported as an [`Error`] value. Nothing here
//! aborts the process and nothing leaves a [`Value`](crate::Value) half-built.
//!
//! ## Error Categories
//!
//! - **Parse errors**: malformed text, with the byte offset of the failure
//! - **Type mismatches**: a value's tag does not fit the requested type or operation
//! - **Strict lookups**: [`Error::KeyNotFound`] and [`Error::IndexOutOfRange`]
//! - **Conversion errors**: a nested failure, wrapped with the field/index path
//!   that leads to it
//!
//! ## Examples
//!
//! ```rust
//! use serde_element::{from_str, Error};
//!
//! #[derive(serde::Deserialize, Debug)]
//! struct Reading { values: Vec<u32> }
//!
//! let err = from_str::<Reading>(r#"{"values":[1,2,"three"]}"#).unwrap_err();
//! assert!(matches!(err, Error::Conversion { .. }));
//! assert_eq!(err.path().unwrap().to_string(), ".values[2]");
//! ```

use std::fmt;
use thiserror::Error;

/// One step in the path to a nested value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// An object member.
    Key(String),
    /// An array element.
    Index(usize),
}

/// The location of a nested value, outermost segment first.
///
/// Displays as `.field[3].other`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path(Vec<PathSegment>);

impl Path {
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn prepend(&mut self, segment: PathSegment) {
        self.0.insert(0, segment);
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.0 {
            match segment {
                PathSegment::Key(key) => write!(f, ".{}", key)?,
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

/// Represents all possible errors of the value, conversion and codec layers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Malformed input text.
    #[error("Parse error at offset {offset}: {msg}")]
    Parse { offset: usize, msg: String },

    /// The active tag is incompatible with the requested type or operation.
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// Strict key lookup on an object that lacks the key.
    #[error("Key not found: \"{0}\"")]
    KeyNotFound(String),

    /// Strict index lookup past the end of an array.
    #[error("Index {index} out of range for array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A failure while converting a nested field or element.
    #[error("at `{path}`: {source}")]
    Conversion { path: Path, source: Box<Error> },

    /// IO error while writing to a sink or reading from a source.
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error raised by a `Serialize`/`Deserialize` implementation.
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates a parse error at a byte offset.
    ///
    /// ```rust
    /// use serde_element::Error;
    ///
    /// let err = Error::parse(5, "unexpected '}'");
    /// assert_eq!(err.offset(), Some(5));
    /// ```
    pub fn parse(offset: usize, msg: impl Into<String>) -> Self {
        Error::Parse {
            offset,
            msg: msg.into(),
        }
    }

    /// Creates a type mismatch error.
    ///
    /// ```rust
    /// use serde_element::Error;
    ///
    /// let err = Error::type_mismatch("integer", "string");
    /// assert!(err.to_string().contains("expected integer"));
    /// ```
    pub fn type_mismatch(expected: impl fmt::Display, found: impl fmt::Display) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    pub fn key_not_found(key: &str) -> Self {
        Error::KeyNotFound(key.to_string())
    }

    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Error::IndexOutOfRange { index, len }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    pub fn io(err: &std::io::Error) -> Self {
        Error::Io(err.to_string())
    }

    /// Wraps this error as having happened inside object member `key`.
    ///
    /// Wrapping an existing [`Error::Conversion`] extends its path instead of
    /// nesting, so the innermost cause stays one `source()` away.
    #[must_use]
    pub fn at_key(self, key: &str) -> Self {
        self.within(PathSegment::Key(key.to_string()))
    }

    /// Wraps this error as having happened inside array element `index`.
    #[must_use]
    pub fn at_index(self, index: usize) -> Self {
        self.within(PathSegment::Index(index))
    }

    fn within(self, segment: PathSegment) -> Self {
        match self {
            Error::Conversion { mut path, source } => {
                path.prepend(segment);
                Error::Conversion { path, source }
            }
            other => Error::Conversion {
                path: Path(vec![segment]),
                source: Box::new(other),
            },
        }
    }

    /// The byte offset of a parse error.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::Parse { offset, .. } => Some(*offset),
            Error::Conversion { source, .. } => source.offset(),
            _ => None,
        }
    }

    /// The path of a conversion error.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Error::Conversion { path, .. } => Some(path),
            _ => None,
        }
    }

    /// The innermost error, with any conversion context stripped.
    #[must_use]
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::Conversion { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Returns `true` if the innermost error is a type mismatch.
    #[must_use]
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self.root_cause(), Error::TypeMismatch { .. })
    }

    /// Returns `true` if the innermost error is a parse error.
    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(self.root_cause(), Error::Parse { .. })
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

    fn invalid_type(unexp: serde::de::Unexpected<'_>, exp: &dyn serde::de::Expected) -> Self {
        Error::type_mismatch(exp, unexp)
    }

    fn invalid_value(unexp: serde::de::Unexpected<'_>, exp: &dyn serde::de::Expected) -> Self {
        Error::type_mismatch(exp, unexp)
    }

    fn invalid_length(len: usize, exp: &dyn serde::de::Expected) -> Self {
        Error::type_mismatch(exp, format_args!("sequence of length {}", len))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
