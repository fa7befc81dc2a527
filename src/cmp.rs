//! Equality and ordering for [`Value`].
//!
//! Two values of the same tag compare by payload. Across tags, only the three
//! numeric variants are comparable: `Int` against `Uint` is exact, and any
//! integer against a `Float` widens the integer to `f64` first. Any other pair
//! of differing tags is unequal and unordered.

use crate::{Map, Value};
use std::cmp::Ordering;

fn cmp_int_uint(i: i64, u: u64) -> Ordering {
    if i < 0 {
        Ordering::Less
    } else {
        (i as u64).cmp(&u)
    }
}

fn numeric_cmp(lhs: &Value, rhs: &Value) -> Option<Ordering> {
    match (lhs, rhs) {
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::Uint(a), Value::Uint(b)) => Some(a.cmp(b)),
        (Value::Int(a), Value::Uint(b)) => Some(cmp_int_uint(*a, *b)),
        (Value::Uint(a), Value::Int(b)) => Some(cmp_int_uint(*b, *a).reverse()),
        (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
        (Value::Float(a), Value::Int(b)) => a.partial_cmp(&(*b as f64)),
        (Value::Float(a), Value::Uint(b)) => a.partial_cmp(&(*b as f64)),
        (Value::Int(a), Value::Float(b)) => (*a as f64).partial_cmp(b),
        (Value::Uint(a), Value::Float(b)) => (*a as f64).partial_cmp(b),
        _ => None,
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            _ => numeric_cmp(self, other) == Some(Ordering::Equal),
        }
    }
}

impl PartialOrd for Value {
    /// Orders values of the same tag, and numbers across numeric tags.
    ///
    /// Arrays compare element-wise, objects compare their `(key, value)`
    /// pairs in key order. Returns `None` for differing non-numeric
    /// tags and whenever a NaN is involved.
    ///
    /// ```rust
    /// use serde_element::Value;
    ///
    /// assert!(Value::Int(-1) < Value::Uint(0));
    /// assert!(Value::Uint(2) > Value::Float(1.5));
    /// assert!(Value::from("a") < Value::from("b"));
    /// assert_eq!(Value::from("a").partial_cmp(&Value::from(1)), None);
    /// ```
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Value::Null, Value::Null) => Some(Ordering::Equal),
            (Value::Bool(a), Value::Bool(b)) => a.partial_cmp(b),
            (Value::String(a), Value::String(b)) => a.partial_cmp(b),
            (Value::Array(a), Value::Array(b)) => a.partial_cmp(b),
            (Value::Object(a), Value::Object(b)) => cmp_maps(a, b),
            _ => numeric_cmp(self, other),
        }
    }
}

/// Compares members in key order, whatever order the map iterates in.
fn cmp_maps(lhs: &Map, rhs: &Map) -> Option<Ordering> {
    #[cfg(not(feature = "preserve_order"))]
    {
        cmp_members(lhs.iter(), rhs.iter())
    }
    #[cfg(feature = "preserve_order")]
    {
        cmp_members(sorted_members(lhs).into_iter(), sorted_members(rhs).into_iter())
    }
}

#[cfg(feature = "preserve_order")]
fn sorted_members(map: &Map) -> Vec<(&String, &Value)> {
    let mut members: Vec<_> = map.iter().collect();
    members.sort_unstable_by(|a, b| a.0.cmp(b.0));
    members
}

fn cmp_members<'a, L, R>(mut lhs: L, mut rhs: R) -> Option<Ordering>
where
    L: Iterator<Item = (&'a String, &'a Value)>,
    R: Iterator<Item = (&'a String, &'a Value)>,
{
    loop {
        match (lhs.next(), rhs.next()) {
            (None, None) => return Some(Ordering::Equal),
            (None, Some(_)) => return Some(Ordering::Less),
            (Some(_), None) => return Some(Ordering::Greater),
            (Some((ka, va)), Some((kb, vb))) => match ka.cmp(kb) {
                Ordering::Equal => match va.partial_cmp(vb)? {
                    Ordering::Equal => {}
                    unequal => return Some(unequal),
                },
                unequal => return Some(unequal),
            },
        }
    }
}

macro_rules! partial_eq_num {
    ($($ty:ty => $variant:ident as $wide:ty),* $(,)?) => {
        $(
            impl PartialEq<$ty> for Value {
                fn eq(&self, other: &$ty) -> bool {
                    *self == Value::$variant(*other as $wide)
                }
            }

            impl PartialEq<Value> for $ty {
                fn eq(&self, other: &Value) -> bool {
                    *other == *self
                }
            }
        )*
    };
}

partial_eq_num! {
    i8 => Int as i64, i16 => Int as i64, i32 => Int as i64, i64 => Int as i64, isize => Int as i64,
    u8 => Uint as u64, u16 => Uint as u64, u32 => Uint as u64, u64 => Uint as u64, usize => Uint as u64,
    f32 => Float as f64, f64 => Float as f64,
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        self.as_str() == Some(other.as_str())
    }
}
