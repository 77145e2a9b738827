//! The `Value` sum type — a tagged representation of the six JSON types.
//!
//! A `Value` is exactly one variant at a time. Trees are exclusively owned:
//! arrays and objects hold their children by value, `Clone` deep-copies the
//! subtree, and no sharing between trees is possible.
//!
//! # Key design decisions
//!
//! - **Checked access**: the `as_*` accessors return `Result` and fail with
//!   [`JsonError::TypeMismatch`] on the wrong variant, so embedding
//!   applications can recover instead of crashing.
//! - **Destructive retyping**: [`Value::entry`] and [`Value::push`] reset a
//!   wrongly-typed value to an empty container before operating, discarding
//!   its previous payload. [`Value::try_entry`] and [`Value::try_push`] are
//!   the fail-instead-of-coerce alternatives.
//! - **Key-sorted objects**: `Object` is a `BTreeMap`, so object iteration
//!   (and serialized key order) is lexicographic, not insertion order.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::decoder;
use crate::encoder::{self, Indent};
use crate::error::{JsonError, Result};

/// An ordered sequence of values — the array payload.
pub type Array = Vec<Value>;

/// A key-sorted map from string keys to values — the object payload.
///
/// Iteration order is lexicographic by key. Callers must not expect
/// insertion order to survive a parse/dump roundtrip.
pub type Object = BTreeMap<String, Value>;

/// A JSON datum: null, bool, number, string, array, or object.
///
/// All numbers are stored as `f64`; integers and floats are unified.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Array),
    Object(Object),
}

impl Value {
    /// Create an empty array value.
    pub fn array() -> Value {
        Value::Array(Array::new())
    }

    /// Create an empty object value.
    pub fn object() -> Value {
        Value::Object(Object::new())
    }

    /// Name of the currently held variant, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    fn mismatch(&self, expected: &'static str) -> JsonError {
        JsonError::TypeMismatch {
            expected,
            actual: self.type_name(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// The boolean payload, or `TypeMismatch` for any other variant.
    pub fn as_bool(&self) -> Result<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(other.mismatch("bool")),
        }
    }

    pub fn as_bool_mut(&mut self) -> Result<&mut bool> {
        match self {
            Value::Bool(b) => Ok(b),
            other => Err(other.mismatch("bool")),
        }
    }

    /// The numeric payload, or `TypeMismatch` for any other variant.
    pub fn as_number(&self) -> Result<f64> {
        match self {
            Value::Number(n) => Ok(*n),
            other => Err(other.mismatch("number")),
        }
    }

    pub fn as_number_mut(&mut self) -> Result<&mut f64> {
        match self {
            Value::Number(n) => Ok(n),
            other => Err(other.mismatch("number")),
        }
    }

    /// The string payload, or `TypeMismatch` for any other variant.
    pub fn as_str(&self) -> Result<&str> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(other.mismatch("string")),
        }
    }

    pub fn as_string_mut(&mut self) -> Result<&mut String> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(other.mismatch("string")),
        }
    }

    /// The array payload, or `TypeMismatch` for any other variant.
    pub fn as_array(&self) -> Result<&Array> {
        match self {
            Value::Array(arr) => Ok(arr),
            other => Err(other.mismatch("array")),
        }
    }

    pub fn as_array_mut(&mut self) -> Result<&mut Array> {
        match self {
            Value::Array(arr) => Ok(arr),
            other => Err(other.mismatch("array")),
        }
    }

    /// The object payload, or `TypeMismatch` for any other variant.
    pub fn as_object(&self) -> Result<&Object> {
        match self {
            Value::Object(map) => Ok(map),
            other => Err(other.mismatch("object")),
        }
    }

    pub fn as_object_mut(&mut self) -> Result<&mut Object> {
        match self {
            Value::Object(map) => Ok(map),
            other => Err(other.mismatch("object")),
        }
    }

    /// Mutable keyed access, inserting a fresh `Null` entry for absent keys.
    ///
    /// **Data-loss trap**: if this value is not currently an object, it is
    /// reset to an empty object first and its previous payload is discarded.
    /// Use [`Value::try_entry`] to fail instead of coercing.
    pub fn entry(&mut self, key: &str) -> &mut Value {
        if !self.is_object() {
            *self = Value::object();
        }
        let Value::Object(map) = self else {
            unreachable!()
        };
        map.entry(key.to_string()).or_insert(Value::Null)
    }

    /// Keyed access that requires the object variant.
    ///
    /// Inserts `Null` for an absent key like [`Value::entry`], but fails with
    /// `TypeMismatch` instead of retyping a non-object value.
    pub fn try_entry(&mut self, key: &str) -> Result<&mut Value> {
        match self {
            Value::Object(map) => Ok(map.entry(key.to_string()).or_insert(Value::Null)),
            other => Err(other.mismatch("object")),
        }
    }

    /// Read-only keyed lookup. Requires the object variant (`TypeMismatch`
    /// otherwise) and a present key (`KeyNotFound` otherwise).
    pub fn at(&self, key: &str) -> Result<&Value> {
        match self {
            Value::Object(map) => map.get(key).ok_or_else(|| JsonError::KeyNotFound {
                key: key.to_string(),
            }),
            other => Err(other.mismatch("object")),
        }
    }

    /// Whether this value is an object containing `key`.
    /// Never errors: a missing key and a non-object value both yield `false`.
    pub fn contains(&self, key: &str) -> bool {
        matches!(self, Value::Object(map) if map.contains_key(key))
    }

    /// Append a value, preserving existing element order.
    ///
    /// **Data-loss trap**: if this value is not currently an array, it is
    /// reset to an empty array first and its previous payload is discarded.
    /// Use [`Value::try_push`] to fail instead of coercing.
    pub fn push(&mut self, value: impl Into<Value>) {
        if !self.is_array() {
            *self = Value::array();
        }
        let Value::Array(arr) = self else {
            unreachable!()
        };
        arr.push(value.into());
    }

    /// Append that requires the array variant, failing with `TypeMismatch`
    /// instead of retyping a non-array value.
    pub fn try_push(&mut self, value: impl Into<Value>) -> Result<()> {
        match self {
            Value::Array(arr) => {
                arr.push(value.into());
                Ok(())
            }
            other => Err(other.mismatch("array")),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<Object> for Value {
    fn from(map: Object) -> Self {
        Value::Object(map)
    }
}

impl fmt::Display for Value {
    /// Renders compact JSON.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encoder::dump(self, Indent::Compact))
    }
}

impl FromStr for Value {
    type Err = JsonError;

    fn from_str(s: &str) -> Result<Value> {
        decoder::parse(s)
    }
}
