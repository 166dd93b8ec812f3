//! `Object`: an insertion-ordered, key-unique mapping from strings to values.
//!
//! Backed by `IndexMap` so iteration, serialization, and equality all follow
//! insertion order. Overwriting a key keeps its original slot; removing a key
//! shifts later entries down rather than swapping.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::access::FromValue;
use crate::array::Array;
use crate::error::{JsonError, Locator, Result, SyntaxError};
use crate::value::Value;

#[derive(Debug, Clone, Default)]
pub struct Object {
    entries: IndexMap<String, Value>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Look up a member, failing with `NotFound` if the key is absent.
    pub fn get(&self, key: &str) -> Result<&Value> {
        self.entries
            .get(key)
            .ok_or_else(|| JsonError::NotFound(Locator::Key(key.to_string())))
    }

    pub fn get_mut(&mut self, key: &str) -> Result<&mut Value> {
        self.entries
            .get_mut(key)
            .ok_or_else(|| JsonError::NotFound(Locator::Key(key.to_string())))
    }

    /// Look up a member and convert it with [`FromValue`].
    pub fn get_as<'v, T: FromValue<'v>>(&'v self, key: &str) -> Result<T> {
        T::from_value(self.get(key)?)
    }

    pub fn get_str(&self, key: &str) -> Result<&str> {
        self.get_as(key)
    }

    pub fn get_bool(&self, key: &str) -> Result<bool> {
        self.get_as(key)
    }

    /// Reads an `Int` that must also fit in 32 bits.
    pub fn get_i32(&self, key: &str) -> Result<i32> {
        self.get_as(key)
    }

    pub fn get_i64(&self, key: &str) -> Result<i64> {
        self.get_as(key)
    }

    pub fn get_f64(&self, key: &str) -> Result<f64> {
        self.get_as(key)
    }

    pub fn get_object(&self, key: &str) -> Result<&Object> {
        self.get_as(key)
    }

    pub fn get_array(&self, key: &str) -> Result<&Array> {
        self.get_as(key)
    }

    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Map `key` to `value`, replacing any existing mapping in place.
    ///
    /// ```
    /// use jsondom_core::Object;
    ///
    /// let mut obj = Object::new();
    /// obj.put("a", 1).put("b", true).put("a", "again");
    /// assert_eq!(obj.to_string(), r#"{"a":"again","b":true}"#);
    /// ```
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Remove a member and return it. Later members keep their relative order.
    pub fn remove(&mut self, key: &str) -> Result<Value> {
        self.entries
            .shift_remove(key)
            .ok_or_else(|| JsonError::NotFound(Locator::Key(key.to_string())))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// Copy the member values, in order, into a new array.
    pub fn values_array(&self) -> Array {
        self.entries.values().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

// Order-sensitive: two objects with the same members in a different order differ.
impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len() && self.entries.iter().eq(other.entries.iter())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Object {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut obj = Object::new();
        for (k, v) in iter {
            obj.put(k, v);
        }
        obj
    }
}

impl IntoIterator for Object {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        crate::serializer::write_object(self, &mut out);
        f.write_str(&out)
    }
}

impl FromStr for Object {
    type Err = JsonError;

    /// Parse text whose top-level value must be an object.
    fn from_str(s: &str) -> Result<Self> {
        match crate::parser::parse_expecting(s, Some(SyntaxError::ExpectedObject))? {
            Value::Object(obj) => Ok(obj),
            // parse_expecting rejects every other top-level kind
            other => Err(JsonError::mismatch(crate::value::Kind::Object, other.kind())),
        }
    }
}
