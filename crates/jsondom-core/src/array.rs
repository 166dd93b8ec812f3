//! `Array`: an ordered sequence of values with 0-based, contiguous indices.

use std::fmt;
use std::str::FromStr;

use crate::access::FromValue;
use crate::error::{JsonError, Locator, Result, SyntaxError};
use crate::object::Object;
use crate::value::{Kind, Value};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Array {
    items: Vec<Value>,
}

impl Array {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn get(&self, index: usize) -> Result<&Value> {
        self.items
            .get(index)
            .ok_or(JsonError::NotFound(Locator::Index(index)))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Value> {
        self.items
            .get_mut(index)
            .ok_or(JsonError::NotFound(Locator::Index(index)))
    }

    pub fn get_as<'v, T: FromValue<'v>>(&'v self, index: usize) -> Result<T> {
        T::from_value(self.get(index)?)
    }

    pub fn get_str(&self, index: usize) -> Result<&str> {
        self.get_as(index)
    }

    pub fn get_bool(&self, index: usize) -> Result<bool> {
        self.get_as(index)
    }

    pub fn get_i32(&self, index: usize) -> Result<i32> {
        self.get_as(index)
    }

    pub fn get_i64(&self, index: usize) -> Result<i64> {
        self.get_as(index)
    }

    pub fn get_f64(&self, index: usize) -> Result<f64> {
        self.get_as(index)
    }

    pub fn get_object(&self, index: usize) -> Result<&Object> {
        self.get_as(index)
    }

    pub fn get_array(&self, index: usize) -> Result<&Array> {
        self.get_as(index)
    }

    /// Whether the element at `index` is `Null`.
    pub fn is_null(&self, index: usize) -> Result<bool> {
        self.get(index).map(Value::is_null)
    }

    /// Append a value.
    pub fn push(&mut self, value: impl Into<Value>) -> &mut Self {
        self.items.push(value.into());
        self
    }

    /// Insert a value before `index`, shifting later elements up.
    /// `index == len()` appends.
    pub fn insert(&mut self, index: usize, value: impl Into<Value>) -> Result<&mut Self> {
        if index > self.items.len() {
            return Err(JsonError::NotFound(Locator::Index(index)));
        }
        self.items.insert(index, value.into());
        Ok(self)
    }

    pub fn remove(&mut self, index: usize) -> Result<Value> {
        if index >= self.items.len() {
            return Err(JsonError::NotFound(Locator::Index(index)));
        }
        Ok(self.items.remove(index))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn values(&self) -> &[Value] {
        &self.items
    }
}

impl<V: Into<Value>> FromIterator<V> for Array {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Vec<Value>> for Array {
    fn from(items: Vec<Value>) -> Self {
        Self { items }
    }
}

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        crate::serializer::write_array(self, &mut out);
        f.write_str(&out)
    }
}

impl FromStr for Array {
    type Err = JsonError;

    /// Parse text whose top-level value must be an array.
    fn from_str(s: &str) -> Result<Self> {
        match crate::parser::parse_expecting(s, Some(SyntaxError::ExpectedArray))? {
            Value::Array(arr) => Ok(arr),
            other => Err(JsonError::mismatch(Kind::Array, other.kind())),
        }
    }
}
