//! Indexing into arrays and objects.
//!
//! There are three flavours of access, all keyed by anything implementing
//! [`ValueIndex`] (`usize` for arrays, `str`/`String` for objects):
//!
//! - `value[i]` is forgiving on read: anything absent yields a shared `Null`.
//!   On write it promotes `Null` to an array or object and grows arrays with
//!   `Null` padding. Writing through the wrong tag panics.
//! - [`Value::get`] / [`Value::get_mut`] return `Option`.
//! - [`Value::at`] and [`Value::entry`] are the strict, fallible forms and
//!   report [`Error::IndexOutOfRange`], [`Error::KeyNotFound`] or
//!   [`Error::TypeMismatch`].
//!
//! ```rust
//! use serde_element::{value, Error, Value};
//!
//! let v = value!({"list": [10, 20]});
//! assert_eq!(v["list"][1], 20);
//! assert!(v["missing"][3].is_null());
//!
//! assert!(matches!(v.at("missing"), Err(Error::KeyNotFound(_))));
//! assert!(matches!(v["list"].at(5), Err(Error::IndexOutOfRange { index: 5, len: 2 })));
//! ```

use crate::{Error, Map, Result, Value, ValueKind};
use std::ops;

/// A type that can index into a [`Value`].
///
/// This trait is sealed; it is implemented for `usize`, `str`, `String` and
/// references to those.
pub trait ValueIndex: private::Sealed {
    #[doc(hidden)]
    fn index_into<'v>(&self, v: &'v Value) -> Option<&'v Value>;

    #[doc(hidden)]
    fn index_into_mut<'v>(&self, v: &'v mut Value) -> Option<&'v mut Value>;

    #[doc(hidden)]
    fn index_strict<'v>(&self, v: &'v Value) -> Result<&'v Value>;

    /// Writable slot, promoting `Null` and growing arrays.
    #[doc(hidden)]
    fn index_or_insert<'v>(&self, v: &'v mut Value) -> Result<&'v mut Value>;
}

impl ValueIndex for usize {
    fn index_into<'v>(&self, v: &'v Value) -> Option<&'v Value> {
        match v {
            Value::Array(vec) => vec.get(*self),
            _ => None,
        }
    }

    fn index_into_mut<'v>(&self, v: &'v mut Value) -> Option<&'v mut Value> {
        match v {
            Value::Array(vec) => vec.get_mut(*self),
            _ => None,
        }
    }

    fn index_strict<'v>(&self, v: &'v Value) -> Result<&'v Value> {
        match v {
            Value::Array(vec) => vec
                .get(*self)
                .ok_or_else(|| Error::index_out_of_range(*self, vec.len())),
            other => Err(Error::type_mismatch(ValueKind::Array, other.kind())),
        }
    }

    fn index_or_insert<'v>(&self, v: &'v mut Value) -> Result<&'v mut Value> {
        if v.is_null() {
            *v = Value::Array(Vec::new());
        }
        match v {
            Value::Array(vec) => {
                if vec.len() <= *self {
                    vec.resize(*self + 1, Value::Null);
                }
                Ok(&mut vec[*self])
            }
            other => Err(Error::type_mismatch(ValueKind::Array, other.kind())),
        }
    }
}

impl ValueIndex for str {
    fn index_into<'v>(&self, v: &'v Value) -> Option<&'v Value> {
        match v {
            Value::Object(map) => map.get(self),
            _ => None,
        }
    }

    fn index_into_mut<'v>(&self, v: &'v mut Value) -> Option<&'v mut Value> {
        match v {
            Value::Object(map) => map.get_mut(self),
            _ => None,
        }
    }

    fn index_strict<'v>(&self, v: &'v Value) -> Result<&'v Value> {
        match v {
            Value::Object(map) => map.get(self).ok_or_else(|| Error::key_not_found(self)),
            other => Err(Error::type_mismatch(ValueKind::Object, other.kind())),
        }
    }

    fn index_or_insert<'v>(&self, v: &'v mut Value) -> Result<&'v mut Value> {
        if v.is_null() {
            *v = Value::Object(Map::new());
        }
        match v {
            Value::Object(map) => Ok(map.entry_or_null(self.to_owned())),
            other => Err(Error::type_mismatch(ValueKind::Object, other.kind())),
        }
    }
}

impl ValueIndex for String {
    fn index_into<'v>(&self, v: &'v Value) -> Option<&'v Value> {
        self[..].index_into(v)
    }

    fn index_into_mut<'v>(&self, v: &'v mut Value) -> Option<&'v mut Value> {
        self[..].index_into_mut(v)
    }

    fn index_strict<'v>(&self, v: &'v Value) -> Result<&'v Value> {
        self[..].index_strict(v)
    }

    fn index_or_insert<'v>(&self, v: &'v mut Value) -> Result<&'v mut Value> {
        self[..].index_or_insert(v)
    }
}

impl<T> ValueIndex for &T
where
    T: ?Sized + ValueIndex,
{
    fn index_into<'v>(&self, v: &'v Value) -> Option<&'v Value> {
        (**self).index_into(v)
    }

    fn index_into_mut<'v>(&self, v: &'v mut Value) -> Option<&'v mut Value> {
        (**self).index_into_mut(v)
    }

    fn index_strict<'v>(&self, v: &'v Value) -> Result<&'v Value> {
        (**self).index_strict(v)
    }

    fn index_or_insert<'v>(&self, v: &'v mut Value) -> Result<&'v mut Value> {
        (**self).index_or_insert(v)
    }
}

mod private {
    pub trait Sealed {}
    impl Sealed for usize {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl<T> Sealed for &T where T: ?Sized + Sealed {}
}

impl Value {
    /// Looks up an element or member, returning `None` if absent or if the
    /// tag does not match the index type.
    pub fn get<I: ValueIndex>(&self, index: I) -> Option<&Value> {
        index.index_into(self)
    }

    pub fn get_mut<I: ValueIndex>(&mut self, index: I) -> Option<&mut Value> {
        index.index_into_mut(self)
    }

    /// Strict read access.
    ///
    /// ```rust
    /// use serde_element::{value, Error};
    ///
    /// let v = value!({"a": [true]});
    /// assert_eq!(*v.at("a").unwrap().at(0).unwrap(), true);
    /// assert!(v.at(0).unwrap_err().is_type_mismatch());
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] past the end of an array,
    /// [`Error::KeyNotFound`] for an absent member, and a type mismatch when
    /// the value is not an array (for `usize`) or an object (for strings).
    pub fn at<I: ValueIndex>(&self, index: I) -> Result<&Value> {
        index.index_strict(self)
    }

    /// Fallible write access.
    ///
    /// Same promotion and growth rules as `value[i] = ...`, but reports a
    /// type mismatch instead of panicking.
    ///
    /// ```rust
    /// use serde_element::Value;
    ///
    /// let mut v = Value::Null;
    /// *v.entry("n").unwrap() = Value::from(1);
    /// assert_eq!(v["n"], 1);
    ///
    /// let mut s = Value::from("text");
    /// assert!(s.entry(0).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// A type mismatch when the value is neither `Null` nor of the matching
    /// container kind.
    pub fn entry<I: ValueIndex>(&mut self, index: I) -> Result<&mut Value> {
        index.index_or_insert(self)
    }
}

static NULL: Value = Value::Null;

impl<I> ops::Index<I> for Value
where
    I: ValueIndex,
{
    type Output = Value;

    fn index(&self, index: I) -> &Value {
        index.index_into(self).unwrap_or(&NULL)
    }
}

impl<I> ops::IndexMut<I> for Value
where
    I: ValueIndex,
{
    /// # Panics
    ///
    /// Panics when the value is neither `Null` nor of the container kind the
    /// index type addresses. Use [`Value::entry`] for a non-panicking form.
    fn index_mut(&mut self, index: I) -> &mut Value {
        match index.index_or_insert(self) {
            Ok(slot) => slot,
            Err(err) => panic!("cannot index into value: {}", err),
        }
    }
}
