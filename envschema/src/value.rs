//! Typed configuration values

use std::fmt;

use serde::{Deserialize, Serialize};

/// A parsed configuration value.
///
/// Resolution produces one `Value` per schema key, either parsed from the
/// environment source or taken verbatim from the schema's default.
///
/// Serializes without a tag, so a resolved config dumps as a plain JSON
/// object (`{"PORT": 8080, "DEBUG": true}`), and schema defaults can be
/// written as plain JSON literals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Raw string
    Str(String),
    /// Base-10 signed integer
    Int(i64),
    /// Decimal floating point
    Float(f64),
    /// Boolean
    Bool(bool),
}

impl Value {
    /// String slice if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Integer if this is an integer value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Float if this is a float value.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Boolean if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_match_variant() {
        assert_eq!(Value::Str("x".to_string()).as_str(), Some("x"));
        assert_eq!(Value::Int(7).as_int(), Some(7));
        assert_eq!(Value::Float(1.5).as_float(), Some(1.5));
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
    }

    #[test]
    fn test_accessors_reject_other_variants() {
        assert_eq!(Value::Int(7).as_str(), None);
        assert_eq!(Value::Str("7".to_string()).as_int(), None);
        assert_eq!(Value::Bool(false).as_float(), None);
        assert_eq!(Value::Float(0.0).as_bool(), None);
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Value::from("x"), Value::Str("x".to_string()));
        assert_eq!(Value::from("x".to_string()), Value::Str("x".to_string()));
        assert_eq!(Value::from(7), Value::Int(7));
        assert_eq!(Value::from(1.5), Value::Float(1.5));
        assert_eq!(Value::from(true), Value::Bool(true));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Str("hello".to_string()).to_string(), "hello");
        assert_eq!(Value::Int(-3).to_string(), "-3");
        assert_eq!(Value::Float(2.5).to_string(), "2.5");
        assert_eq!(Value::Bool(false).to_string(), "false");
    }

    #[test]
    fn test_untagged_json_representation() {
        assert_eq!(
            serde_json::to_string(&Value::Int(8080)).unwrap(),
            "8080"
        );
        assert_eq!(
            serde_json::from_str::<Value>("\"hello\"").unwrap(),
            Value::Str("hello".to_string())
        );
        assert_eq!(serde_json::from_str::<Value>("8080").unwrap(), Value::Int(8080));
        assert_eq!(serde_json::from_str::<Value>("1.2").unwrap(), Value::Float(1.2));
        assert_eq!(serde_json::from_str::<Value>("true").unwrap(), Value::Bool(true));
    }
}
