//! Encoding of native Rust values into [`Value`].
//!
//! [`ValueSerializer`] is a `serde::Serializer` whose output is a [`Value`]
//! tree. It is what [`encode`](crate::encode) and [`Value::from_native`] run.
//!
//! ## Mapping
//!
//! | Rust | Value |
//! |---|---|
//! | `bool` | `Bool` |
//! | `i8`..`i64`, `isize` | `Int` |
//! | `u8`..`u64`, `usize` | `Uint` |
//! | `f32`, `f64` | `Float` |
//! | `char`, `&str`, `String` | `String` |
//! | `None`, `()`, unit structs | `Null` |
//! | sequences, tuples, byte slices | `Array` |
//! | maps, structs | `Object` |
//! | unit variant | `String` with the variant name |
//! | other variants | single-member `Object` keyed by the variant name |
//!
//! Map keys must be strings, integers, booleans or chars; the latter three are
//! stringified.
//!
//! ```rust
//! use serde::Serialize;
//! use serde_element::{encode, value};
//!
//! #[derive(Serialize)]
//! enum Shape { Point, Circle { r: f64 } }
//!
//! assert_eq!(encode(&Shape::Point).unwrap(), value!("Point"));
//! assert_eq!(encode(&Shape::Circle { r: 1.5 }).unwrap(), value!({"Circle": {"r": 1.5}}));
//! ```

use crate::{Error, Map, Result, Value};
use serde::{ser, Serialize};

/// Serializer producing a [`Value`].
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
}

pub struct SerializeTupleVariant {
    name: &'static str,
    vec: Vec<Value>,
}

pub struct SerializeMap {
    map: Map,
    current_key: Option<String>,
}

pub struct SerializeStructVariant {
    name: &'static str,
    map: Map,
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeStructVariant;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::Int(v as i64))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::Int(v as i64))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::Int(v as i64))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Int(v))
    }

    fn serialize_i128(self, v: i128) -> Result<Value> {
        if let Ok(i) = i64::try_from(v) {
            Ok(Value::Int(i))
        } else if let Ok(u) = u64::try_from(v) {
            Ok(Value::Uint(u))
        } else {
            Err(Error::custom(format!("integer {} out of range", v)))
        }
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::Uint(v as u64))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::Uint(v as u64))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::Uint(v as u64))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        Ok(Value::Uint(v))
    }

    fn serialize_u128(self, v: u128) -> Result<Value> {
        u64::try_from(v)
            .map(Value::Uint)
            .map_err(|_| Error::custom(format!("integer {} out of range", v)))
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Float(v as f64))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Float(v))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::Array(v.iter().map(|&b| Value::Uint(b as u64)).collect()))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        let inner = to_value(value).map_err(|e| e.at_key(variant))?;
        Ok(tagged(variant, inner))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::with_capacity(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::with_capacity(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::with_capacity(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeTupleVariant> {
        Ok(SerializeTupleVariant {
            name: variant,
            vec: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeStructVariant> {
        Ok(SerializeStructVariant {
            name: variant,
            map: Map::new(),
        })
    }
}

impl SerializeVec {
    fn with_capacity(len: usize) -> Self {
        SerializeVec {
            vec: Vec::with_capacity(len),
        }
    }

    fn push<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let index = self.vec.len();
        self.vec.push(to_value(value).map_err(|e| e.at_index(index))?);
        Ok(())
    }
}

impl SerializeMap {
    fn new() -> Self {
        SerializeMap {
            map: Map::new(),
            current_key: None,
        }
    }

    fn insert<T>(&mut self, key: String, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let value = to_value(value).map_err(|e| e.at_key(&key))?;
        self.map.insert(key, value);
        Ok(())
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTupleVariant for SerializeTupleVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let index = self.vec.len();
        let value = to_value(value).map_err(|e| e.at_index(index).at_key(self.name))?;
        self.vec.push(value);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(tagged(self.name, Value::Array(self.vec)))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.current_key = Some(key.serialize(MapKeySerializer)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.insert(key, value)
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.insert(key.to_string(), value)
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStructVariant for SerializeStructVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let value = to_value(value).map_err(|e| e.at_key(key).at_key(self.name))?;
        self.map.insert(key.to_string(), value);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(tagged(self.name, Value::Object(self.map)))
    }
}

fn tagged(variant: &str, inner: Value) -> Value {
    let mut map = Map::new();
    map.insert(variant.to_string(), inner);
    Value::Object(map)
}

pub(crate) fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}

/// Turns a map key into an object member name.
struct MapKeySerializer;

fn key_must_be_a_string(found: &str) -> Error {
    Error::type_mismatch("string key", found)
}

macro_rules! stringify_key {
    ($($method:ident: $ty:ty),* $(,)?) => {
        $(
            fn $method(self, v: $ty) -> Result<String> {
                Ok(v.to_string())
            }
        )*
    };
}

impl ser::Serializer for MapKeySerializer {
    type Ok = String;
    type Error = Error;

    type SerializeSeq = ser::Impossible<String, Error>;
    type SerializeTuple = ser::Impossible<String, Error>;
    type SerializeTupleStruct = ser::Impossible<String, Error>;
    type SerializeTupleVariant = ser::Impossible<String, Error>;
    type SerializeMap = ser::Impossible<String, Error>;
    type SerializeStruct = ser::Impossible<String, Error>;
    type SerializeStructVariant = ser::Impossible<String, Error>;

    stringify_key! {
        serialize_bool: bool,
        serialize_i8: i8,
        serialize_i16: i16,
        serialize_i32: i32,
        serialize_i64: i64,
        serialize_i128: i128,
        serialize_u8: u8,
        serialize_u16: u16,
        serialize_u32: u32,
        serialize_u64: u64,
        serialize_u128: u128,
        serialize_char: char,
    }

    fn serialize_str(self, v: &str) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<String> {
        Ok(variant.to_string())
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_f32(self, _v: f32) -> Result<String> {
        Err(key_must_be_a_string("number_float"))
    }

    fn serialize_f64(self, _v: f64) -> Result<String> {
        Err(key_must_be_a_string("number_float"))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<String> {
        Err(key_must_be_a_string("array"))
    }

    fn serialize_none(self) -> Result<String> {
        Err(key_must_be_a_string("null"))
    }

    fn serialize_some<T>(self, _value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        Err(key_must_be_a_string("option"))
    }

    fn serialize_unit(self) -> Result<String> {
        Err(key_must_be_a_string("null"))
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<String> {
        Err(key_must_be_a_string("null"))
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        Err(key_must_be_a_string("object"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(key_must_be_a_string("array"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(key_must_be_a_string("array"))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(key_must_be_a_string("array"))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(key_must_be_a_string("object"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(key_must_be_a_string("object"))
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(key_must_be_a_string("object"))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(key_must_be_a_string("object"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;
    use std::collections::{BTreeMap, HashMap};

    #[test]
    fn test_unsigned_sources_become_uint() {
        assert!(matches!(to_value(&7u8).unwrap(), Value::Uint(7)));
        assert!(matches!(to_value(&7usize).unwrap(), Value::Uint(7)));
        assert!(matches!(to_value(&u64::MAX).unwrap(), Value::Uint(u64::MAX)));
        assert!(matches!(to_value(&-7i16).unwrap(), Value::Int(-7)));
    }

    #[test]
    fn test_wide_integers() {
        assert!(matches!(to_value(&-5i128).unwrap(), Value::Int(-5)));
        assert!(matches!(to_value(&(u64::MAX as i128)).unwrap(), Value::Uint(u64::MAX)));
        assert!(to_value(&i128::MIN).is_err());
        assert!(to_value(&u128::MAX).is_err());
    }

    #[test]
    fn test_options_and_units() {
        assert_eq!(to_value(&None::<u8>).unwrap(), Value::Null);
        assert_eq!(to_value(&Some("x")).unwrap(), Value::from("x"));
        assert_eq!(to_value(&()).unwrap(), Value::Null);
    }

    #[test]
    fn test_sequences_and_tuples() {
        assert_eq!(to_value(&vec![1, 2]).unwrap(), value!([1, 2]));
        assert_eq!(to_value(&(1, "a", true)).unwrap(), value!([1, "a", true]));
    }

    #[test]
    fn test_map_keys_are_stringified() {
        let mut map = BTreeMap::new();
        map.insert(2, "two");
        map.insert(10, "ten");
        assert_eq!(to_value(&map).unwrap(), value!({"2": "two", "10": "ten"}));

        let mut flags = HashMap::new();
        flags.insert(true, 1);
        assert_eq!(to_value(&flags).unwrap(), value!({"true": 1}));

        let mut chars = BTreeMap::new();
        chars.insert('c', 1);
        assert_eq!(to_value(&chars).unwrap(), value!({"c": 1}));
    }

    #[test]
    fn test_non_scalar_key_is_type_mismatch() {
        let mut map = BTreeMap::new();
        map.insert(vec![1], "v");
        let err = to_value(&map).unwrap_err();
        assert!(err.is_type_mismatch());
    }

    #[test]
    fn test_variants_are_externally_tagged() {
        #[derive(Serialize)]
        enum Event {
            Started,
            Moved(i32),
            Pair(u8, u8),
            Renamed { from: String },
        }

        assert_eq!(to_value(&Event::Started).unwrap(), value!("Started"));
        assert_eq!(to_value(&Event::Moved(3)).unwrap(), value!({"Moved": 3}));
        assert_eq!(to_value(&Event::Pair(1, 2)).unwrap(), value!({"Pair": [1, 2]}));
        assert_eq!(
            to_value(&Event::Renamed { from: "a".into() }).unwrap(),
            value!({"Renamed": {"from": "a"}})
        );
    }

    #[test]
    fn test_failure_carries_path() {
        let mut bad = BTreeMap::new();
        bad.insert(vec![0u8], 1);
        let nested = vec![BTreeMap::new(), bad];
        let err = to_value(&nested).unwrap_err();
        assert_eq!(err.path().map(ToString::to_string), Some("[1]".to_string()));
    }
}
