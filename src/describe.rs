//! Field-listing contract for native aggregates.
//!
//! A type implementing [`Describe`] visits its fields, in declaration order,
//! through an archive. One listing drives both directions: [`serialize`] hands
//! each field to a `serde` struct serializer, and [`deserialize`] routes each
//! incoming object member to the field with the same name.
//!
//! Decoding a described type is tolerant. It starts from `Default::default()`,
//! so members missing from the input leave their field untouched, and
//! members the type does not list are skipped.
//!
//! The [`describe!`](crate::describe!) macro writes the `Describe`,
//! `Serialize` and `Deserialize` impls for a struct:
//!
//! ```rust
//! use serde_element::{describe, from_str, to_value, value};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Reading {
//!     sensor: String,
//!     watts: f64,
//!     total: u64,
//! }
//!
//! describe!(Reading { sensor, watts as "power", total });
//!
//! let r = Reading { sensor: "p1".into(), watts: 230.5, total: 7 };
//! assert_eq!(to_value(&r).unwrap(), value!({"sensor": "p1", "power": 230.5, "total": 7}));
//!
//! let partial: Reading = from_str(r#"{"sensor":"p2","extra":true}"#).unwrap();
//! assert_eq!(partial, Reading { sensor: "p2".into(), ..Default::default() });
//! ```

use serde::de::{DeserializeOwned, IgnoredAny, MapAccess, Visitor};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserializer, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// Receives read-only views of the fields of a described value.
pub trait Archive {
    type Error;

    fn field<T>(&mut self, name: &'static str, value: &T) -> Result<(), Self::Error>
    where
        T: ?Sized + Serialize;
}

/// Receives writable views of the fields of a described value.
pub trait ArchiveMut {
    type Error;

    fn field<T>(&mut self, name: &'static str, value: &mut T) -> Result<(), Self::Error>
    where
        T: DeserializeOwned;
}

/// A native aggregate that lists its fields by name.
///
/// Implementations visit every field exactly once, in the same order in
/// [`describe`](Describe::describe) and [`describe_mut`](Describe::describe_mut),
/// and with the names given in [`FIELDS`](Describe::FIELDS). Usually written
/// by the [`describe!`](crate::describe!) macro.
pub trait Describe: Default {
    const NAME: &'static str;
    const FIELDS: &'static [&'static str];

    fn describe<A: Archive>(&self, archive: &mut A) -> Result<(), A::Error>;

    fn describe_mut<A: ArchiveMut>(&mut self, archive: &mut A) -> Result<(), A::Error>;
}

struct StructArchive<'a, S> {
    state: &'a mut S,
}

impl<'a, S> Archive for StructArchive<'a, S>
where
    S: SerializeStruct,
{
    type Error = S::Error;

    fn field<T>(&mut self, name: &'static str, value: &T) -> Result<(), S::Error>
    where
        T: ?Sized + Serialize,
    {
        self.state.serialize_field(name, value)
    }
}

/// Serializes a described value as a struct, fields in declaration order.
///
/// # Errors
///
/// Propagates the serializer's errors.
pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Describe,
    S: Serializer,
{
    let mut state = serializer.serialize_struct(T::NAME, T::FIELDS.len())?;
    value.describe(&mut StructArchive { state: &mut state })?;
    state.end()
}

/// Fills the field whose name matches the current map key.
struct KeyMatcher<'a, 'de, M> {
    key: &'a str,
    map: &'a mut M,
    matched: bool,
    marker: PhantomData<&'de ()>,
}

impl<'a, 'de, M> ArchiveMut for KeyMatcher<'a, 'de, M>
where
    M: MapAccess<'de>,
{
    type Error = M::Error;

    fn field<T>(&mut self, name: &'static str, value: &mut T) -> Result<(), M::Error>
    where
        T: DeserializeOwned,
    {
        if !self.matched && name == self.key {
            *value = self.map.next_value()?;
            self.matched = true;
        }
        Ok(())
    }
}

struct DescribeVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for DescribeVisitor<T>
where
    T: Describe,
{
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "struct {}", T::NAME)
    }

    fn visit_map<M>(self, mut map: M) -> Result<T, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut out = T::default();
        while let Some(key) = map.next_key::<String>()? {
            let mut matcher = KeyMatcher {
                key: &key,
                map: &mut map,
                matched: false,
                marker: PhantomData,
            };
            out.describe_mut(&mut matcher)?;
            if !matcher.matched {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(out)
    }
}

/// Deserializes a described value from a map, starting from its default.
///
/// # Errors
///
/// Fails when the input is not a map or when a listed field fails to decode.
pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: Describe,
    D: Deserializer<'de>,
{
    deserializer.deserialize_struct(T::NAME, T::FIELDS, DescribeVisitor(PhantomData))
}

/// Implements [`Describe`], `Serialize` and `Deserialize` for a struct with
/// named fields.
///
/// Each field is listed by name, optionally followed by `as "name"` to use a
/// different member name. The struct must implement `Default`, and every
/// listed field must implement `Serialize` and `DeserializeOwned`.
///
/// ```rust
/// use serde_element::{decode, describe, encode, value};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Tariff {
///     name: String,
///     cents: u32,
/// }
/// describe!(Tariff { name, cents as "price" });
///
/// let t = Tariff { name: "peak".into(), cents: 31 };
/// let v = encode(&t).unwrap();
/// assert_eq!(v, value!({"name": "peak", "price": 31}));
/// assert_eq!(decode::<Tariff>(&v).unwrap(), t);
/// ```
#[macro_export]
macro_rules! describe {
    ($ty:ident { $($field:ident $(as $name:literal)?),* $(,)? }) => {
        impl $crate::Describe for $ty {
            const NAME: &'static str = ::core::stringify!($ty);
            const FIELDS: &'static [&'static str] = &[$($crate::__field_name!($field $(as $name)?)),*];

            fn describe<A: $crate::describe::Archive>(
                &self,
                archive: &mut A,
            ) -> ::core::result::Result<(), A::Error> {
                $(
                    $crate::describe::Archive::field(
                        archive,
                        $crate::__field_name!($field $(as $name)?),
                        &self.$field,
                    )?;
                )*
                ::core::result::Result::Ok(())
            }

            fn describe_mut<A: $crate::describe::ArchiveMut>(
                &mut self,
                archive: &mut A,
            ) -> ::core::result::Result<(), A::Error> {
                $(
                    $crate::describe::ArchiveMut::field(
                        archive,
                        $crate::__field_name!($field $(as $name)?),
                        &mut self.$field,
                    )?;
                )*
                ::core::result::Result::Ok(())
            }
        }

        impl $crate::__serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__serde::Serializer,
            {
                $crate::describe::serialize(self, serializer)
            }
        }

        impl<'de> $crate::__serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__serde::Deserializer<'de>,
            {
                $crate::describe::deserialize(deserializer)
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_name {
    ($field:ident) => {
        ::core::stringify!($field)
    };
    ($field:ident as $name:literal) => {
        $name
    };
}
