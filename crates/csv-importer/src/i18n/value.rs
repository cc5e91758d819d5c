use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Interpolation values keyed by placeholder name.
pub type Params = HashMap<String, Value>;

/// A runtime value substituted into a `{name}` placeholder.
///
/// Every variant except [`Value::Unset`] renders through [`Display`] the way
/// a plain string conversion would: `42`, `1.5`, `true`, or the string itself.
/// `Unset` stands for a value that was named but not provided; placeholders
/// bound to it are left untouched.
///
/// # Example
///
/// ```
/// use csv_importer::Value;
///
/// let count: Value = 42.into();
/// let name: Value = "Alice".into();
/// let flag: Value = true.into();
/// let missing: Value = None::<i64>.into();
///
/// assert_eq!(count.to_string(), "42");
/// assert_eq!(name.to_string(), "Alice");
/// assert_eq!(flag.to_string(), "true");
/// assert!(missing.is_unset());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An integer number.
    Number(i64),

    /// A floating-point number.
    Float(f64),

    /// A string value.
    String(String),

    /// A boolean value.
    Bool(bool),

    /// An explicitly absent value. Never substituted.
    Unset,
}

impl Value {
    /// Get this value as a number, if it is one.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this value as a float, if it is numeric.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Number(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Get this value as a string, if it is one.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get this value as a boolean, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Whether this value is [`Value::Unset`].
    pub fn is_unset(&self) -> bool {
        matches!(self, Value::Unset)
    }

    /// Parse a command-line style literal.
    ///
    /// Integers become `Number`, other finite numbers `Float`, `true`/`false`
    /// become `Bool`; anything else is kept as a `String`.
    pub fn parse_literal(raw: &str) -> Value {
        if let Ok(n) = raw.parse::<i64>() {
            return Value::Number(n);
        }
        match raw.parse::<f64>() {
            Ok(f) if f.is_finite() => return Value::Float(f),
            _ => {}
        }
        match raw {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            _ => Value::String(raw.to_string()),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Unset => Ok(()),
        }
    }
}

// From implementations for common types

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<u64> for Value {
    /// Values beyond `i64::MAX` are kept as their decimal string.
    fn from(n: u64) -> Self {
        i64::try_from(n).map_or_else(|_| Value::String(n.to_string()), Value::Number)
    }
}

impl From<usize> for Value {
    /// Values beyond `i64::MAX` are kept as their decimal string.
    fn from(n: usize) -> Self {
        i64::try_from(n).map_or_else(|_| Value::String(n.to_string()), Value::Number)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Unset, Into::into)
    }
}
