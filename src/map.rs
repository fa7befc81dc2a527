//! Map type for object members.
//!
//! [`Map`] keeps member keys unique. By default it is backed by a
//! [`BTreeMap`] and iterates **in key order**, which is what the text writer
//! relies on to produce canonical output.
//!
//! With the `preserve_order` feature the map is backed by
//! [`indexmap::IndexMap`] instead and iterates in insertion order. Equality is
//! unaffected (it never depends on member order); the writer output and
//! [`Value`](crate::Value) ordering follow the iteration order.
//!
//! ## Examples
//!
//! ```rust
//! use serde_element::{Map, Value};
//!
//! let mut map = Map::new();
//! map.insert("twee".to_string(), Value::from(2));
//! map.insert("een".to_string(), Value::from(1));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("een").and_then(|v| v.as_i64()), Some(1));
//! ```

use crate::Value;
use std::borrow::Borrow;
use std::collections::HashMap;

#[cfg(not(feature = "preserve_order"))]
type MapImpl = std::collections::BTreeMap<String, Value>;
#[cfg(feature = "preserve_order")]
type MapImpl = indexmap::IndexMap<String, Value>;

#[cfg(not(feature = "preserve_order"))]
mod iter {
    use std::collections::btree_map;
    pub type Iter<'a, K, V> = btree_map::Iter<'a, K, V>;
    pub type IterMut<'a, K, V> = btree_map::IterMut<'a, K, V>;
    pub type Keys<'a, K, V> = btree_map::Keys<'a, K, V>;
    pub type Values<'a, K, V> = btree_map::Values<'a, K, V>;
    pub type IntoIter<K, V> = btree_map::IntoIter<K, V>;
}

#[cfg(feature = "preserve_order")]
mod iter {
    use indexmap::map;
    pub type Iter<'a, K, V> = map::Iter<'a, K, V>;
    pub type IterMut<'a, K, V> = map::IterMut<'a, K, V>;
    pub type Keys<'a, K, V> = map::Keys<'a, K, V>;
    pub type Values<'a, K, V> = map::Values<'a, K, V>;
    pub type IntoIter<K, V> = map::IntoIter<K, V>;
}

/// A map of string keys to element values.
///
/// # Examples
///
/// ```rust
/// use serde_element::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("b".to_string(), Value::from(2));
/// map.insert("a".to_string(), Value::from(1));
///
/// # #[cfg(not(feature = "preserve_order"))]
/// # {
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["a", "b"]);
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Map(MapImpl);

impl Map {
    #[must_use]
    pub fn new() -> Self {
        Map(MapImpl::new())
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned.
    ///
    /// ```rust
    /// use serde_element::{Map, Value};
    ///
    /// let mut map = Map::new();
    /// assert!(map.insert("key".to_string(), Value::from(42)).is_none());
    /// assert!(map.insert("key".to_string(), Value::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&Value>
    where
        String: Borrow<Q>,
        Q: ?Sized + Ord + Eq + std::hash::Hash,
    {
        self.0.get(key)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut Value>
    where
        String: Borrow<Q>,
        Q: ?Sized + Ord + Eq + std::hash::Hash,
    {
        self.0.get_mut(key)
    }

    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        String: Borrow<Q>,
        Q: ?Sized + Ord + Eq + std::hash::Hash,
    {
        self.0.contains_key(key)
    }

    /// Removes a key from the map, returning its value if it was present.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<Value>
    where
        String: Borrow<Q>,
        Q: ?Sized + Ord + Eq + std::hash::Hash,
    {
        #[cfg(not(feature = "preserve_order"))]
        {
            self.0.remove(key)
        }
        #[cfg(feature = "preserve_order")]
        {
            self.0.shift_remove(key)
        }
    }

    /// Returns the value for `key`, inserting `Null` first when it is absent.
    pub fn entry_or_null(&mut self, key: String) -> &mut Value {
        self.0.entry(key).or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Returns an iterator over the keys of the map, in iteration order.
    pub fn keys(&self) -> iter::Keys<'_, String, Value> {
        self.0.keys()
    }

    pub fn values(&self) -> iter::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in iteration order.
    pub fn iter(&self) -> iter::Iter<'_, String, Value> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> iter::IterMut<'_, String, Value> {
        self.0.iter_mut()
    }
}

impl From<HashMap<String, Value>> for Map {
    fn from(map: HashMap<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

impl From<Map> for HashMap<String, Value> {
    fn from(map: Map) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for Map {
    type Item = (String, Value);
    type IntoIter = iter::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a String, &'a Value);
    type IntoIter = iter::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Map {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Map(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl Extend<(String, Value)> for Map {
    fn extend<T: IntoIterator<Item = (String, Value)>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_insert_replaces() {
        let mut map = Map::new();
        map.insert("a".to_string(), Value::from(1));
        let old = map.insert("a".to_string(), Value::from(2));

        assert_eq!(old, Some(Value::from(1)));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("a"), Some(&Value::from(2)));
    }

    #[cfg(not(feature = "preserve_order"))]
    #[test]
    fn test_iterates_in_key_order() {
        let map: Map = vec![
            ("noot".to_string(), Value::Null),
            ("aap".to_string(), Value::Null),
            ("mies".to_string(), Value::Null),
        ]
        .into_iter()
        .collect();

        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["aap", "mies", "noot"]);
    }

    #[test]
    fn test_entry_or_null_inserts_once() {
        let mut map = Map::new();
        *map.entry_or_null("k".to_string()) = Value::from(true);
        assert!(map.entry_or_null("k".to_string()).is_boolean());
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut map = Map::new();
        map.insert("k".to_string(), Value::from("v"));
        assert_eq!(map.remove("k"), Some(Value::from("v")));
        assert!(map.is_empty());
    }
}
