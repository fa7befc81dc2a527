//! Dynamic value representation.
//!
//! This module provides the [`Value`] enum, a JSON-like tree that holds
//! exactly one of null, boolean, signed integer, unsigned integer, float,
//! string, array or object at a time.
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use serde_element::{value, Value};
//!
//! let null = Value::Null;
//! let boolean = Value::from(true);
//! let signed = Value::from(-42);
//! let unsigned = Value::from(42u64);
//! let text = Value::from("hello");
//!
//! let obj = value!({
//!     "name": "Alice",
//!     "tags": ["a", "b"]
//! });
//! assert!(obj.is_object());
//! ```
//!
//! ### Building in place
//!
//! Indexing into a `Null` value promotes it to an array or object:
//!
//! ```rust
//! use serde_element::Value;
//!
//! let mut v = Value::Null;
//! v["a"] = Value::from(1);
//! assert!(v.is_object());
//!
//! let mut w = Value::Null;
//! w[2] = Value::from("x");
//! assert_eq!(w.len(), 3);
//! ```
//!
//! ### Converting to and from Rust types
//!
//! ```rust
//! use serde_element::Value;
//!
//! let v = Value::from_native(&vec![1, 2, 3]).unwrap();
//! let back: Vec<u8> = v.to_native().unwrap();
//! assert_eq!(back, vec![1, 2, 3]);
//! ```

use crate::{Error, Map, ParseOptions, Result, WriteOptions};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::io;

/// The tag of a [`Value`]: which alternative it currently holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Uint,
    Float,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// The name used in diagnostics.
    ///
    /// ```rust
    /// use serde_element::{Value, ValueKind};
    ///
    /// assert_eq!(Value::from(1u8).kind().type_name(), "number_uint");
    /// assert_eq!(ValueKind::Object.type_name(), "object");
    /// ```
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Int => "number_int",
            ValueKind::Uint => "number_uint",
            ValueKind::Float => "number_float",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A dynamically-typed element value.
///
/// Each variant owns its payload; cloning deep-copies the tree and
/// [`Value::take`] moves it out, leaving `Null` behind.
///
/// `Int` and `Uint` are distinct: unsigned Rust integers always become
/// `Uint`, and the parser only produces `Uint` for literals above `i64::MAX`.
/// Equality and ordering compare the three numeric variants by value, see
/// the [`PartialEq`] implementation.
///
/// # Examples
///
/// ```rust
/// use serde_element::Value;
///
/// let null = Value::Null;
/// let num = Value::Int(42);
/// let text = Value::String("hello".to_string());
///
/// assert!(null.is_null());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    Object(Map),
}

impl Value {
    /// Creates an empty value of the given kind: `false`, `0`, `0.0`, `""`,
    /// `[]` or `{}`.
    ///
    /// ```rust
    /// use serde_element::{Value, ValueKind};
    ///
    /// let v = Value::with_kind(ValueKind::Array);
    /// assert!(v.is_array());
    /// assert!(v.is_empty());
    /// ```
    #[must_use]
    pub fn with_kind(kind: ValueKind) -> Self {
        match kind {
            ValueKind::Null => Value::Null,
            ValueKind::Bool => Value::Bool(false),
            ValueKind::Int => Value::Int(0),
            ValueKind::Uint => Value::Uint(0),
            ValueKind::Float => Value::Float(0.0),
            ValueKind::String => Value::String(String::new()),
            ValueKind::Array => Value::Array(Vec::new()),
            ValueKind::Object => Value::Object(Map::new()),
        }
    }

    /// Encodes any serializable Rust value. Same as [`crate::encode`].
    ///
    /// # Errors
    ///
    /// Fails only when the `Serialize` implementation itself reports an error
    /// or a map key cannot be turned into a string.
    pub fn from_native<T>(native: &T) -> Result<Self>
    where
        T: ?Sized + Serialize,
    {
        crate::encode(native)
    }

    /// Decodes this value into a Rust type. Same as [`crate::decode`].
    ///
    /// ```rust
    /// use serde_element::{Error, Value};
    ///
    /// assert_eq!(Value::from(3).to_native::<i32>().unwrap(), 3);
    /// assert!(Value::from("3").to_native::<i32>().unwrap_err().is_type_mismatch());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a type mismatch, possibly wrapped with the path to the
    /// offending element, when the value does not fit `T`.
    pub fn to_native<T>(&self) -> Result<T>
    where
        T: DeserializeOwned,
    {
        crate::decode(self)
    }

    /// Parses canonical text into a value.
    ///
    /// ```rust
    /// use serde_element::Value;
    ///
    /// let v = Value::parse(r#"{"a":[1,2.5,"x"]}"#).unwrap();
    /// assert_eq!(v["a"][1], Value::Float(2.5));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] with the byte offset of the first problem.
    pub fn parse(text: &str) -> Result<Self> {
        crate::parser::parse(text, &ParseOptions::default())
    }

    /// Parses canonical text with explicit limits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] on malformed input or when a limit is exceeded.
    pub fn parse_with_options(text: &str, options: &ParseOptions) -> Result<Self> {
        crate::parser::parse(text, options)
    }

    /// Writes this value as compact canonical text.
    ///
    /// ```rust
    /// use serde_element::value;
    ///
    /// let v = value!({"a": "x/y", "b": 1.0});
    /// assert_eq!(v.write(), r#"{"a":"x\/y","b":1.0}"#);
    /// ```
    #[must_use]
    pub fn write(&self) -> String {
        self.write_with_options(&WriteOptions::default())
    }

    #[must_use]
    pub fn write_with_options(&self, options: &WriteOptions) -> String {
        let mut output = String::new();
        crate::writer::write_value(&mut output, self, options, 0);
        output
    }

    /// Writes this value as compact canonical text into a byte sink.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the sink fails.
    pub fn write_to<W>(&self, mut writer: W) -> Result<()>
    where
        W: io::Write,
    {
        writer
            .write_all(self.write().as_bytes())
            .map_err(|e| Error::io(&e))
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Uint(_) => ValueKind::Uint,
            Value::Float(_) => ValueKind::Float,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.kind().type_name()
    }

    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_boolean(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_true(&self) -> bool {
        matches!(self, Value::Bool(true))
    }

    #[inline]
    #[must_use]
    pub const fn is_false(&self) -> bool {
        matches!(self, Value::Bool(false))
    }

    /// Returns `true` for any of the three numeric variants.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Uint(_) | Value::Float(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_number_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_number_uint(&self) -> bool {
        matches!(self, Value::Uint(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_number_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the value as an `i64` if it is an integer that fits.
    ///
    /// ```rust
    /// use serde_element::Value;
    ///
    /// assert_eq!(Value::Uint(7).as_i64(), Some(7));
    /// assert_eq!(Value::Uint(u64::MAX).as_i64(), None);
    /// assert_eq!(Value::Float(7.0).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            Value::Uint(u) => i64::try_from(*u).ok(),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Int(i) => u64::try_from(*i).ok(),
            Value::Uint(u) => Some(*u),
            _ => None,
        }
    }

    /// Returns any numeric value widened to `f64`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Uint(u) => Some(*u as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    #[inline]
    pub fn as_object_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Number of elements or members. `Null` counts as 0 and every scalar as 1.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Value::Null => 0,
            Value::Array(arr) => arr.len(),
            Value::Object(obj) => obj.len(),
            _ => 1,
        }
    }

    /// `Null`, `[]` and `{}` are empty; scalars never are.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Array(arr) => arr.is_empty(),
            Value::Object(obj) => obj.is_empty(),
            _ => false,
        }
    }

    /// Moves the value out, leaving `Null` in its place.
    ///
    /// ```rust
    /// use serde_element::Value;
    ///
    /// let mut v = Value::from("owned");
    /// let moved = v.take();
    /// assert!(v.is_null());
    /// assert_eq!(moved.as_str(), Some("owned"));
    /// ```
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }

    /// Appends to an array, promoting `Null` to an empty array first.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch for any other variant; the value is unchanged.
    pub fn push(&mut self, element: impl Into<Value>) -> Result<()> {
        if self.is_null() {
            *self = Value::Array(Vec::new());
        }
        match self {
            Value::Array(arr) => {
                arr.push(element.into());
                Ok(())
            }
            other => Err(Error::type_mismatch(ValueKind::Array, other.kind())),
        }
    }

    /// Inserts an object member, promoting `Null` to an empty object first.
    ///
    /// Returns the previous value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch for any other variant; the value is unchanged.
    pub fn insert(&mut self, key: impl Into<String>, member: impl Into<Value>) -> Result<Option<Value>> {
        if self.is_null() {
            *self = Value::Object(Map::new());
        }
        match self {
            Value::Object(obj) => Ok(obj.insert(key.into(), member.into())),
            other => Err(Error::type_mismatch(ValueKind::Object, other.kind())),
        }
    }

    /// Iterates the members of an object in map order. Other variants yield nothing.
    pub fn items(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.as_object().into_iter().flat_map(Map::iter)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options = if f.alternate() {
            WriteOptions::pretty()
        } else {
            WriteOptions::default()
        };
        f.write_str(&self.write_with_options(&options))
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Uint(u) => serializer.serialize_u64(*u),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid element value")
            }

            fn visit_bool<E>(self, value: bool) -> std::result::Result<Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Value, E> {
                Ok(Value::Int(value))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Value, E> {
                Ok(Value::Uint(value))
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<Value, E> {
                Ok(Value::Float(value))
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> std::result::Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> std::result::Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> std::result::Result<Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_newtype_struct<D>(self, deserializer: D) -> std::result::Result<Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(Value::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = Map::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(Value::Object(values))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl TryFrom<Value> for i64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        crate::decode(&value)
    }
}

impl TryFrom<Value> for u64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        crate::decode(&value)
    }
}

impl TryFrom<Value> for f64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        crate::decode(&value)
    }
}

impl TryFrom<Value> for bool {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        crate::decode(&value)
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(Error::type_mismatch(ValueKind::String, other.kind())),
        }
    }
}

macro_rules! from_signed {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Int(value as i64)
                }
            }
        )*
    };
}

macro_rules! from_unsigned {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Uint(value as u64)
                }
            }
        )*
    };
}

from_signed! { i8 i16 i32 i64 isize }
from_unsigned! { u8 u16 u32 u64 usize }

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl<'a> From<Cow<'a, str>> for Value {
    fn from(value: Cow<'a, str>) -> Self {
        Value::String(value.into_owned())
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Value::Null
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::Array(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Value>> From<&[T]> for Value {
    fn from(value: &[T]) -> Self {
        Value::Array(value.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Object(value)
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::Array(iter.into_iter().map(Into::into).collect())
    }
}
