//! Schema declarations for configuration keys

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EnvSchemaError;
use crate::value::Value;

/// The closed set of value types a configuration key can declare.
///
/// Each variant carries exactly one parser ([`ValueType::parse`]); there is
/// no runtime parser registration. Extending the supported set means adding
/// a variant and a parsing arm.
///
/// The `FromStr` implementation accepts the lowercase identifiers
/// `"string"`, `"integer"`, `"float"`, and `"boolean"`, and rejects anything
/// else with [`EnvSchemaError::UnsupportedType`], so unknown types fail at
/// declaration time, never during resolution. Serde uses the same
/// identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// Raw string, passed through unchanged
    String,
    /// Base-10 signed integer (`i64`)
    Integer,
    /// Decimal floating point (`f64`)
    Float,
    /// Case-insensitive `true`/`false`/`1`/`0`
    Boolean,
}

impl ValueType {
    /// Identifier used in schema declarations and error messages.
    pub fn name(self) -> &'static str {
        match self {
            ValueType::String => "string",
            ValueType::Integer => "integer",
            ValueType::Float => "float",
            ValueType::Boolean => "boolean",
        }
    }

    /// Parse a raw environment string as this type.
    ///
    /// Returns `None` when the string is not a valid literal for the type;
    /// the resolver attaches the key context to the failure. Integer parsing
    /// accepts an optional leading sign and digits only; float parsing
    /// follows the standard decimal literal rules of `f64`; boolean parsing
    /// is a case-insensitive match over `true`/`false`/`1`/`0`.
    pub fn parse(self, raw: &str) -> Option<Value> {
        match self {
            ValueType::String => Some(Value::Str(raw.to_string())),
            ValueType::Integer => raw.parse::<i64>().ok().map(Value::Int),
            ValueType::Float => raw.parse::<f64>().ok().map(Value::Float),
            ValueType::Boolean => match raw.to_ascii_lowercase().as_str() {
                "true" | "1" => Some(Value::Bool(true)),
                "false" | "0" => Some(Value::Bool(false)),
                _ => None,
            },
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValueType {
    type Err = EnvSchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(ValueType::String),
            "integer" => Ok(ValueType::Integer),
            "float" => Ok(ValueType::Float),
            "boolean" => Ok(ValueType::Boolean),
            _ => Err(EnvSchemaError::UnsupportedType {
                value_type: s.to_string(),
            }),
        }
    }
}

/// Typing contract for a single configuration key.
///
/// A `Schema` is a pure data descriptor: a [`ValueType`] plus an optional
/// default. Default presence is tracked explicitly: a schema with no
/// default stays distinguishable from one whose default happens to be
/// empty, zero, or false.
///
/// No cross-check between the default's type and `value_type` is performed
/// at declaration time; defaults are used verbatim during resolution.
///
/// Schemas deserialize from plain JSON objects, so a whole schema map can
/// be declared as data:
///
/// ```rust
/// use envschema::Schema;
///
/// let schema: Schema = serde_json::from_str(
///     r#"{"value_type": "integer", "default": 8080}"#,
/// ).unwrap();
/// assert_eq!(schema.default().unwrap().as_int(), Some(8080));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    value_type: ValueType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    default: Option<Value>,
}

impl Schema {
    /// Declare a key of the given type with no default.
    pub fn new(value_type: ValueType) -> Self {
        Self {
            value_type,
            default: None,
        }
    }

    /// Attach a default value, used verbatim when the key is absent from
    /// the environment source. Defaults are already typed and are never
    /// parsed.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// The declared value type.
    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// The declared default, if any.
    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }
}
