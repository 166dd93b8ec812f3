//! Lookup and typed-extraction seams shared by `Value`, `Object`, and `Array`.
//!
//! - [`Index`] lets `Value::get` take either a key (`&str`, `String`) or an
//!   array index (`usize`).
//! - [`FromValue`] is the single checked conversion behind every typed getter
//!   (`get_str`, `get_i64`, ...). It never converts between variants: an `Int`
//!   read as `f64` is a `TypeMismatch`, not a widening.

use crate::array::Array;
use crate::error::{JsonError, Result};
use crate::object::Object;
use crate::value::{Kind, Value};

/// Something that can address a child of a container value.
pub trait Index {
    fn index_into<'v>(&self, value: &'v Value) -> Result<&'v Value>;
    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value>;
}

impl Index for usize {
    fn index_into<'v>(&self, value: &'v Value) -> Result<&'v Value> {
        match value {
            Value::Array(arr) => arr.get(*self),
            other => Err(JsonError::mismatch(Kind::Array, other.kind())),
        }
    }

    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value> {
        match value {
            Value::Array(arr) => arr.get_mut(*self),
            other => Err(JsonError::mismatch(Kind::Array, other.kind())),
        }
    }
}

impl Index for str {
    fn index_into<'v>(&self, value: &'v Value) -> Result<&'v Value> {
        match value {
            Value::Object(obj) => obj.get(self),
            other => Err(JsonError::mismatch(Kind::Object, other.kind())),
        }
    }

    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value> {
        match value {
            Value::Object(obj) => obj.get_mut(self),
            other => Err(JsonError::mismatch(Kind::Object, other.kind())),
        }
    }
}

impl Index for String {
    fn index_into<'v>(&self, value: &'v Value) -> Result<&'v Value> {
        self.as_str().index_into(value)
    }

    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value> {
        self.as_str().index_into_mut(value)
    }
}

impl<T: Index + ?Sized> Index for &T {
    fn index_into<'v>(&self, value: &'v Value) -> Result<&'v Value> {
        (**self).index_into(value)
    }

    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value> {
        (**self).index_into_mut(value)
    }
}

/// Checked conversion out of a borrowed [`Value`].
pub trait FromValue<'v>: Sized {
    fn from_value(value: &'v Value) -> Result<Self>;
}

impl<'v> FromValue<'v> for &'v Value {
    fn from_value(value: &'v Value) -> Result<Self> {
        Ok(value)
    }
}

impl<'v> FromValue<'v> for &'v str {
    fn from_value(value: &'v Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(JsonError::mismatch(Kind::String, other.kind())),
        }
    }
}

impl FromValue<'_> for String {
    fn from_value(value: &Value) -> Result<Self> {
        <&str>::from_value(value).map(str::to_string)
    }
}

impl FromValue<'_> for bool {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Bool(b) => Ok(*b),
            other => Err(JsonError::mismatch(Kind::Bool, other.kind())),
        }
    }
}

impl FromValue<'_> for i64 {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Int(n) => Ok(*n),
            other => Err(JsonError::mismatch(Kind::Int, other.kind())),
        }
    }
}

impl FromValue<'_> for i32 {
    fn from_value(value: &Value) -> Result<Self> {
        let n = i64::from_value(value)?;
        i32::try_from(n).map_err(|_| JsonError::OutOfRange {
            value: n,
            target: "i32",
        })
    }
}

impl FromValue<'_> for f64 {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Float(f) => Ok(*f),
            other => Err(JsonError::mismatch(Kind::Float, other.kind())),
        }
    }
}

impl<'v> FromValue<'v> for &'v Object {
    fn from_value(value: &'v Value) -> Result<Self> {
        match value {
            Value::Object(obj) => Ok(obj),
            other => Err(JsonError::mismatch(Kind::Object, other.kind())),
        }
    }
}

impl<'v> FromValue<'v> for &'v Array {
    fn from_value(value: &'v Value) -> Result<Self> {
        match value {
            Value::Array(arr) => Ok(arr),
            other => Err(JsonError::mismatch(Kind::Array, other.kind())),
        }
    }
}
