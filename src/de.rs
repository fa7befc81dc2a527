//! Decoding of [`Value`] into native Rust types.
//!
//! [`ValueDeserializer`] walks a borrowed [`Value`] and drives any
//! `Deserialize` implementation from it. It is what
//! [`decode`](crate::decode) and [`Value::to_native`] run.
//!
//! ## Coercions
//!
//! - integer targets accept `Int`, `Uint`, and `Float` values that are
//!   integral; the result is range checked
//! - float targets accept any numeric variant
//! - string targets accept only `String`
//! - `Option` targets map `Null` to `None`
//! - sequence targets require `Array`, struct and map targets require `Object`
//! - enums are externally tagged: a `String` for unit variants, a
//!   single-member `Object` for the others
//!
//! A failure inside an element or member is reported with the path that
//! leads to it:
//!
//! ```rust
//! use serde_element::{decode, value};
//! use std::collections::BTreeMap;
//!
//! let v = value!({"a": [1, 2], "b": [3, 4.5]});
//! let err = decode::<BTreeMap<String, Vec<u8>>>(&v).unwrap_err();
//! assert_eq!(err.path().unwrap().to_string(), ".b[1]");
//! assert!(err.is_type_mismatch());
//! ```

use crate::{Error, Map, Result, Value};
use serde::de::value::BorrowedStrDeserializer;
use serde::de::{self, IntoDeserializer};
use serde::forward_to_deserialize_any;

/// Deserializer reading from a borrowed [`Value`].
pub struct ValueDeserializer<'de> {
    value: &'de Value,
}

impl<'de> ValueDeserializer<'de> {
    pub fn new(value: &'de Value) -> Self {
        ValueDeserializer { value }
    }

    fn mismatch(&self, expected: &str) -> Error {
        Error::type_mismatch(expected, self.value.kind())
    }

    fn out_of_range(&self, expected: &str) -> Error {
        Error::type_mismatch(expected, format_args!("{} {}", self.value.kind(), self.value))
    }

    fn integer<T>(&self, expected: &str) -> Result<T>
    where
        T: TryFrom<i64> + TryFrom<u64>,
    {
        let converted = match *self.value {
            Value::Int(i) => <T as TryFrom<i64>>::try_from(i).ok(),
            Value::Uint(u) => <T as TryFrom<u64>>::try_from(u).ok(),
            Value::Float(f) if f.is_finite() && f.fract() == 0.0 => {
                if f >= 0.0 && f < 18_446_744_073_709_551_616.0 {
                    <T as TryFrom<u64>>::try_from(f as u64).ok()
                } else if f < 0.0 && f >= -9_223_372_036_854_775_808.0 {
                    <T as TryFrom<i64>>::try_from(f as i64).ok()
                } else {
                    None
                }
            }
            _ => return Err(self.mismatch(expected)),
        };
        converted.ok_or_else(|| self.out_of_range(expected))
    }

    fn float(&self, expected: &str) -> Result<f64> {
        match *self.value {
            Value::Int(i) => Ok(i as f64),
            Value::Uint(u) => Ok(u as f64),
            Value::Float(f) => Ok(f),
            _ => Err(self.mismatch(expected)),
        }
    }
}

impl<'de> IntoDeserializer<'de, Error> for &'de Value {
    type Deserializer = ValueDeserializer<'de>;

    fn into_deserializer(self) -> Self::Deserializer {
        ValueDeserializer::new(self)
    }
}

macro_rules! deserialize_integer {
    ($($method:ident => $visit:ident: $ty:ty),* $(,)?) => {
        $(
            fn $method<V>(self, visitor: V) -> Result<V::Value>
            where
                V: de::Visitor<'de>,
            {
                visitor.$visit(self.integer::<$ty>(stringify!($ty))?)
            }
        )*
    };
}

impl<'de> de::Deserializer<'de> for ValueDeserializer<'de> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Null => visitor.visit_unit(),
            Value::Bool(b) => visitor.visit_bool(*b),
            Value::Int(i) => visitor.visit_i64(*i),
            Value::Uint(u) => visitor.visit_u64(*u),
            Value::Float(f) => visitor.visit_f64(*f),
            Value::String(s) => visitor.visit_borrowed_str(s),
            Value::Array(arr) => visit_array(arr, visitor),
            Value::Object(obj) => visitor.visit_map(MapDeserializer::new(obj)),
        }
    }

    fn deserialize_bool<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Bool(b) => visitor.visit_bool(*b),
            _ => Err(self.mismatch("bool")),
        }
    }

    deserialize_integer! {
        deserialize_i8 => visit_i8: i8,
        deserialize_i16 => visit_i16: i16,
        deserialize_i32 => visit_i32: i32,
        deserialize_i64 => visit_i64: i64,
        deserialize_u8 => visit_u8: u8,
        deserialize_u16 => visit_u16: u16,
        deserialize_u32 => visit_u32: u32,
        deserialize_u64 => visit_u64: u64,
    }

    fn deserialize_i128<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match *self.value {
            Value::Int(i) => visitor.visit_i128(i as i128),
            Value::Uint(u) => visitor.visit_i128(u as i128),
            _ => visitor.visit_i128(self.integer::<i64>("i128")? as i128),
        }
    }

    fn deserialize_u128<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_u128(self.integer::<u64>("u128")? as u128)
    }

    fn deserialize_f32<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_f32(self.float("f32")? as f32)
    }

    fn deserialize_f64<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_f64(self.float("f64")?)
    }

    fn deserialize_char<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        if let Value::String(s) = self.value {
            let mut chars = s.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                return visitor.visit_char(c);
            }
        }
        Err(self.mismatch("char"))
    }

    fn deserialize_str<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::String(s) => visitor.visit_borrowed_str(s),
            _ => Err(self.mismatch("string")),
        }
    }

    fn deserialize_string<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_str(visitor)
    }

    fn deserialize_bytes<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::String(s) => visitor.visit_borrowed_bytes(s.as_bytes()),
            Value::Array(arr) => visit_array(arr, visitor),
            _ => Err(self.mismatch("bytes")),
        }
    }

    fn deserialize_byte_buf<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_bytes(visitor)
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Null => visitor.visit_none(),
            _ => visitor.visit_some(self),
        }
    }

    fn deserialize_unit<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Null => visitor.visit_unit(),
            _ => Err(self.mismatch("null")),
        }
    }

    fn deserialize_unit_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_unit(visitor)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Array(arr) => visit_array(arr, visitor),
            _ => Err(self.mismatch("array")),
        }
    }

    fn deserialize_tuple<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_tuple_struct<V>(
        self,
        _name: &'static str,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_map<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Object(obj) => visitor.visit_map(MapDeserializer::new(obj)),
            _ => Err(self.mismatch("object")),
        }
    }

    fn deserialize_struct<V>(
        self,
        _name: &'static str,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_map(visitor)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::String(variant) => visitor.visit_enum(EnumDeserializer {
                variant: variant.as_str(),
                value: None,
            }),
            Value::Object(obj) if obj.len() == 1 => {
                let (variant, value) = obj
                    .iter()
                    .next()
                    .ok_or_else(|| self.mismatch("enum"))?;
                visitor.visit_enum(EnumDeserializer {
                    variant: variant.as_str(),
                    value: Some(value),
                })
            }
            _ => Err(self.mismatch("enum")),
        }
    }

    fn deserialize_identifier<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_str(visitor)
    }

    fn deserialize_ignored_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_unit()
    }
}

fn visit_array<'de, V>(arr: &'de [Value], visitor: V) -> Result<V::Value>
where
    V: de::Visitor<'de>,
{
    let mut seq = SeqDeserializer::new(arr);
    let result = visitor.visit_seq(&mut seq)?;
    if seq.iter.len() == 0 {
        Ok(result)
    } else {
        Err(<Error as de::Error>::invalid_length(
            arr.len(),
            &"fewer elements in array",
        ))
    }
}

struct SeqDeserializer<'de> {
    iter: std::iter::Enumerate<std::slice::Iter<'de, Value>>,
}

impl<'de> SeqDeserializer<'de> {
    fn new(arr: &'de [Value]) -> Self {
        SeqDeserializer {
            iter: arr.iter().enumerate(),
        }
    }
}

impl<'de> de::SeqAccess<'de> for SeqDeserializer<'de> {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((index, value)) => seed
                .deserialize(ValueDeserializer::new(value))
                .map(Some)
                .map_err(|e| e.at_index(index)),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct MapDeserializer<'de> {
    iter: <&'de Map as IntoIterator>::IntoIter,
    remaining: usize,
    current: Option<(&'de str, &'de Value)>,
}

impl<'de> MapDeserializer<'de> {
    fn new(map: &'de Map) -> Self {
        MapDeserializer {
            iter: map.into_iter(),
            remaining: map.len(),
            current: None,
        }
    }
}

impl<'de> de::MapAccess<'de> for MapDeserializer<'de> {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, value)) => {
                self.remaining -= 1;
                let key = key.as_str();
                self.current = Some((key, value));
                seed.deserialize(MapKeyDeserializer { key })
                    .map(Some)
                    .map_err(|e| e.at_key(key))
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.current.take() {
            Some((key, value)) => seed
                .deserialize(ValueDeserializer::new(value))
                .map_err(|e| e.at_key(key)),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.remaining)
    }
}

/// Deserializes an object member name, parsing it when the target is a
/// number or boolean.
struct MapKeyDeserializer<'de> {
    key: &'de str,
}

impl<'de> MapKeyDeserializer<'de> {
    fn parse<T: std::str::FromStr>(&self, expected: &str) -> Result<T> {
        self.key
            .parse()
            .map_err(|_| Error::type_mismatch(expected, format_args!("key \"{}\"", self.key)))
    }
}

macro_rules! deserialize_parsed_key {
    ($($method:ident => $visit:ident: $ty:ty),* $(,)?) => {
        $(
            fn $method<V>(self, visitor: V) -> Result<V::Value>
            where
                V: de::Visitor<'de>,
            {
                visitor.$visit(self.parse::<$ty>(stringify!($ty))?)
            }
        )*
    };
}

impl<'de> de::Deserializer<'de> for MapKeyDeserializer<'de> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_borrowed_str(self.key)
    }

    deserialize_parsed_key! {
        deserialize_bool => visit_bool: bool,
        deserialize_i8 => visit_i8: i8,
        deserialize_i16 => visit_i16: i16,
        deserialize_i32 => visit_i32: i32,
        deserialize_i64 => visit_i64: i64,
        deserialize_i128 => visit_i128: i128,
        deserialize_u8 => visit_u8: u8,
        deserialize_u16 => visit_u16: u16,
        deserialize_u32 => visit_u32: u32,
        deserialize_u64 => visit_u64: u64,
        deserialize_u128 => visit_u128: u128,
        deserialize_char => visit_char: char,
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_some(self)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_enum(BorrowedStrDeserializer::<Error>::new(self.key))
    }

    forward_to_deserialize_any! {
        f32 f64 str string bytes byte_buf unit unit_struct seq tuple
        tuple_struct map struct identifier ignored_any
    }
}

struct EnumDeserializer<'de> {
    variant: &'de str,
    value: Option<&'de Value>,
}

impl<'de> de::EnumAccess<'de> for EnumDeserializer<'de> {
    type Error = Error;
    type Variant = VariantDeserializer<'de>;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let variant = seed.deserialize(BorrowedStrDeserializer::<Error>::new(self.variant))?;
        Ok((
            variant,
            VariantDeserializer {
                name: self.variant,
                value: self.value,
            },
        ))
    }
}

struct VariantDeserializer<'de> {
    name: &'de str,
    value: Option<&'de Value>,
}

impl<'de> VariantDeserializer<'de> {
    fn payload(&self, expected: &str) -> Result<&'de Value> {
        self.value
            .ok_or_else(|| Error::type_mismatch(expected, "unit variant"))
    }
}

impl<'de> de::VariantAccess<'de> for VariantDeserializer<'de> {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        match self.value {
            None | Some(Value::Null) => Ok(()),
            Some(other) => {
                Err(Error::type_mismatch("unit variant", other.kind()).at_key(self.name))
            }
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        let value = self.payload("newtype variant")?;
        seed.deserialize(ValueDeserializer::new(value))
            .map_err(|e| e.at_key(self.name))
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let value = self.payload("tuple variant")?;
        de::Deserializer::deserialize_seq(ValueDeserializer::new(value), visitor)
            .map_err(|e| e.at_key(self.name))
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let value = self.payload("struct variant")?;
        de::Deserializer::deserialize_map(ValueDeserializer::new(value), visitor)
            .map_err(|e| e.at_key(self.name))
    }
}
