//! # serde_element
//!
//! A dynamically-typed element value, serde-based conversion between that
//! value and native Rust types, and a canonical text codec.
//!
//! ## Layers
//!
//! - **[`Value`]**: a tree of null, boolean, signed and unsigned integers,
//!   floats, strings, arrays and objects, with deep-copy semantics and
//!   numeric-aware equality and ordering
//! - **Conversion**: [`encode`] turns any `Serialize` type into a [`Value`],
//!   [`decode`] turns a [`Value`] into any `DeserializeOwned` type. Structs
//!   can list their fields through [`Describe`] and the [`describe!`] macro
//!   to get tolerant decoding
//! - **Text codec**: [`Value::parse`] and [`Value::write`] read and write
//!   canonical JSON text
//!
//! Decoding flows text → [`Value`] → native, encoding flows native →
//! [`Value`] → text.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_element::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Meter {
//!     active: bool,
//!     id: u32,
//!     name: String,
//! }
//!
//! let meter = Meter { active: true, id: 7, name: "p1/main".to_string() };
//!
//! let text = to_string(&meter).unwrap();
//! assert_eq!(text, r#"{"active":true,"id":7,"name":"p1\/main"}"#);
//!
//! let back: Meter = from_str(&text).unwrap();
//! assert_eq!(meter, back);
//! ```
//!
//! ### Dynamic Values
//!
//! ```rust
//! use serde_element::{value, Value};
//!
//! let mut data = value!({
//!     "name": "Alice",
//!     "tags": ["rust", "serde"]
//! });
//!
//! data["tags"][2] = Value::from("json");
//! data["visits"] = Value::from(3u32);
//!
//! assert_eq!(data["tags"].len(), 3);
//! assert_eq!(data["visits"], 3);
//! ```
//!
//! ### Tolerant decoding
//!
//! ```rust
//! use serde_element::{describe, from_str};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Sample { id: String, score: f64 }
//! describe!(Sample { id, score });
//!
//! let s: Sample = from_str(r#"{"id":"x"}"#).unwrap();
//! assert_eq!(s, Sample { id: "x".to_string(), score: 0.0 });
//! ```
//!
//! ## Features
//!
//! - `preserve_order`: objects keep insertion order instead of key order
//! - `tracing`: emit `tracing` events from the reader and decoder
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - round-tripping a derived struct through text
//! - **`describe.rs`** - listing fields with `describe!`
//! - **`dynamic_values.rs`** - building and inspecting values
//!
//! Run any example with: `cargo run --example <name>`

/// Trace-level logging macro that forwards to `tracing::trace!` when the `tracing` feature is enabled.
#[cfg(feature = "tracing")]
#[allow(unused_macros)]
macro_rules! trace {
    ($($arg:tt)*) => {
        ::tracing::trace!($($arg)*)
    };
}

/// Trace-level logging macro (no-op when `tracing` feature is disabled).
#[cfg(not(feature = "tracing"))]
#[allow(unused_macros)]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

/// Debug-level logging macro that forwards to `tracing::debug!` when the `tracing` feature is enabled.
#[cfg(feature = "tracing")]
#[allow(unused_macros)]
macro_rules! debug {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Debug-level logging macro (no-op when `tracing` feature is disabled).
#[cfg(not(feature = "tracing"))]
#[allow(unused_macros)]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[allow(unused_imports)]
pub(crate) use debug;
#[allow(unused_imports)]
pub(crate) use trace;

mod cmp;
pub mod de;
pub mod describe;
pub mod error;
mod index;
mod lexer;
pub mod macros;
pub mod map;
pub mod options;
mod parser;
pub mod ser;
pub mod value;
mod writer;

pub use de::ValueDeserializer;
pub use describe::{Archive, ArchiveMut, Describe};
pub use error::{Error, Path, PathSegment, Result};
pub use index::ValueIndex;
pub use map::Map;
pub use options::{ControlEscape, ParseOptions, WriteOptions};
pub use ser::ValueSerializer;
pub use value::{Value, ValueKind};

#[doc(hidden)]
pub use serde as __serde;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;

/// Converts any `T: Serialize` into a [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde_element::{encode, Value};
///
/// let v = encode(&vec![(1u8, "a")]).unwrap();
/// assert_eq!(v[0][0], Value::Uint(1));
/// assert_eq!(v[0][1], "a");
/// ```
///
/// # Errors
///
/// Fails only if the `Serialize` implementation fails, an integer wider than
/// 64 bits is out of range, or a map key is not a string, integer, boolean or
/// char.
pub fn encode<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    ser::to_value(value)
}

/// Converts a [`Value`] into any `T: DeserializeOwned`.
///
/// # Examples
///
/// ```rust
/// use serde_element::{decode, value};
///
/// let v = value!([1, 2.0, 3]);
/// let nums: Vec<i64> = decode(&v).unwrap();
/// assert_eq!(nums, vec![1, 2, 3]);
/// ```
///
/// # Errors
///
/// Returns a type mismatch when the value does not fit `T`; failures inside
/// arrays and objects carry the path to the offending element.
pub fn decode<T>(value: &Value) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(ValueDeserializer::new(value)).map_err(|err| {
        debug!("decode into {} failed: {}", std::any::type_name::<T>(), err);
        err
    })
}

/// Alias of [`encode`].
///
/// # Errors
///
/// See [`encode`].
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    encode(value)
}

/// Alias of [`decode`] taking the value by reference.
///
/// # Errors
///
/// See [`decode`].
pub fn from_value<T>(value: &Value) -> Result<T>
where
    T: DeserializeOwned,
{
    decode(value)
}

/// Serializes any `T: Serialize` to compact canonical text.
///
/// # Examples
///
/// ```rust
/// use serde_element::to_string;
///
/// assert_eq!(to_string(&Some(1.0)).unwrap(), "1.0");
/// assert_eq!(to_string(&"tab\there").unwrap(), r#""tab\there""#);
/// ```
///
/// # Errors
///
/// See [`encode`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, &WriteOptions::default())
}

/// Serializes any `T: Serialize` to indented text.
///
/// # Errors
///
/// See [`encode`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_pretty<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, &WriteOptions::pretty())
}

/// Serializes any `T: Serialize` to text with custom options.
///
/// # Errors
///
/// See [`encode`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: &WriteOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    Ok(encode(value)?.write_with_options(options))
}

/// Serializes any `T: Serialize` to a writer as compact canonical text.
///
/// # Examples
///
/// ```rust
/// use serde_element::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &[1, 2]).unwrap();
/// assert_eq!(buffer, b"[1,2]");
/// ```
///
/// # Errors
///
/// Returns an error if encoding fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    encode(value)?.write_to(writer)
}

/// Deserializes an instance of type `T` from canonical text.
///
/// # Examples
///
/// ```rust
/// use serde_element::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str(r#"{"x":1,"y":2}"#).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns [`Error::Parse`] for malformed text, otherwise the errors of
/// [`decode`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    decode(&Value::parse(s)?)
}

/// Deserializes an instance of type `T` from UTF-8 bytes of canonical text.
///
/// # Errors
///
/// Invalid UTF-8 is a parse error at the offset of the first bad byte.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::parse(e.valid_up_to(), "invalid UTF-8"))?;
    from_str(s)
}

/// Deserializes an instance of type `T` from an I/O stream of canonical text.
///
/// # Errors
///
/// Returns an error if reading fails, the input is not valid UTF-8 text, or
/// the data cannot be decoded to `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(|e| Error::io(&e))?;
    from_slice(&bytes)
}

/// Decodes a raw request parameter.
///
/// The raw text is read as canonical text first, so `42`, `true` or
/// `[1,2]` become numbers, booleans and arrays. When that does not produce a
/// `T`, the raw text itself is decoded as a string value.
///
/// # Examples
///
/// ```rust
/// use serde_element::decode_param;
///
/// assert_eq!(decode_param::<u32>("42").unwrap(), 42);
/// assert_eq!(decode_param::<String>("42").unwrap(), "42");
/// assert_eq!(decode_param::<String>("hello world").unwrap(), "hello world");
/// assert_eq!(decode_param::<Vec<u8>>("[1,2]").unwrap(), vec![1, 2]);
/// assert!(decode_param::<u32>("many").is_err());
/// ```
///
/// # Errors
///
/// Returns the error of decoding the raw text as a string value.
pub fn decode_param<T>(raw: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    if let Ok(parsed) = Value::parse(raw) {
        if let Ok(native) = decode(&parsed) {
            return Ok(native);
        }
    }
    trace!("parameter {:?} decoded as a string", raw);
    decode(&Value::String(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct User {
        id: u32,
        name: String,
        active: bool,
        tags: Vec<String>,
    }

    fn user() -> User {
        User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["admin".to_string(), "user".to_string()],
        }
    }

    #[test]
    fn test_serialize_deserialize_point() {
        let point = Point { x: 1, y: -2 };
        let text = to_string(&point).unwrap();
        assert_eq!(text, r#"{"x":1,"y":-2}"#);
        let point_back: Point = from_str(&text).unwrap();
        assert_eq!(point, point_back);
    }

    #[test]
    fn test_serialize_deserialize_user() {
        let text = to_string(&user()).unwrap();
        let user_back: User = from_str(&text).unwrap();
        assert_eq!(user(), user_back);
    }

    #[test]
    fn test_pretty_printing() {
        let text = to_string_pretty(&user()).unwrap();
        assert!(text.contains("\n  \"id\": 123"));
        let user_back: User = from_str(&text).unwrap();
        assert_eq!(user(), user_back);
    }

    #[test]
    fn test_to_value() {
        let value = to_value(&Point { x: 1, y: 2 }).unwrap();

        match value {
            Value::Object(obj) => {
                assert_eq!(obj.get("x"), Some(&Value::Int(1)));
                assert_eq!(obj.get("y"), Some(&Value::Int(2)));
            }
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_derived_struct_is_strict_about_missing_fields() {
        let err = from_str::<Point>(r#"{"x":1}"#).unwrap_err();
        assert!(err.to_string().contains("missing field"));
    }

    #[test]
    fn test_from_slice_reports_utf8_offset() {
        let err = from_slice::<String>(b"\"ab\xff\"").unwrap_err();
        assert_eq!(err.offset(), Some(3));
    }

    #[test]
    fn test_from_reader() {
        let point: Point = from_reader(&b"{\"x\":1,\"y\":2}"[..]).unwrap();
        assert_eq!(point, Point { x: 1, y: 2 });
    }

    #[test]
    fn test_to_writer_reports_io_errors() {
        struct Broken;
        impl io::Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "sink closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = to_writer(Broken, &1).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_decode_param_prefers_parsed_text() {
        assert_eq!(decode_param::<f64>("2.5").unwrap(), 2.5);
        assert!(decode_param::<bool>("true").unwrap());
        assert_eq!(decode_param::<Option<u8>>("null").unwrap(), None);
        assert_eq!(decode_param::<String>("\"quoted\"").unwrap(), "quoted");
        assert_eq!(decode_param::<String>("null").unwrap(), "null");
    }
}
