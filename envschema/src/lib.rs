//! Schema-driven configuration loading from environment variables
//!
//! `envschema` resolves a declared configuration schema against an
//! environment-like source of raw strings, validating presence, applying
//! defaults, and parsing values into typed form. The caller builds a map of
//! key names to [`Schema`] descriptors, hands it to [`get_config`] together
//! with a string-to-string source, and receives a read-only
//! [`ResolvedConfig`] or a single error naming the offending key.
//!
//! # Features
//!
//! - **Schema-driven**: declare keys as a map of [`Schema`] descriptors,
//!   each with a [`ValueType`] and an optional typed default
//! - **Typed values**: strings, integers, floats, and booleans ([`Value`])
//! - **Explicit sources**: resolution reads any string-to-string map; the
//!   real process environment is opt-in via [`get_config_from_env`]
//! - **All-or-nothing**: the first failing key aborts the whole resolution,
//!   so no partially-resolved config ever escapes
//! - **Precise errors**: every failure names the key and, for parse
//!   failures, the raw value and the target type ([`EnvSchemaError`])
//! - **Data-declarable**: schema maps deserialize from JSON and resolved
//!   configs serialize back to plain JSON objects
//!
//! # Value Parsing
//!
//! The supported types form a closed set:
//!
//! - `string`: raw value passed through unchanged
//! - `integer`: base-10 signed integer, optional leading sign only
//! - `float`: standard decimal floating-point literal
//! - `boolean`: case-insensitive `true`/`false`/`1`/`0`
//!
//! Defaults are already typed values and are never parsed.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use envschema::{get_config, Schema, ValueType};
//!
//! # fn main() -> anyhow::Result<()> {
//! let schema_map = HashMap::from([
//!     ("DATABASE_URL".to_string(), Schema::new(ValueType::String)),
//!     (
//!         "MAX_CONNECTIONS".to_string(),
//!         Schema::new(ValueType::Integer).with_default(10),
//!     ),
//!     (
//!         "DEBUG_MODE".to_string(),
//!         Schema::new(ValueType::Boolean).with_default(false),
//!     ),
//! ]);
//!
//! let env_source = HashMap::from([
//!     (
//!         "DATABASE_URL".to_string(),
//!         "postgres://localhost/db".to_string(),
//!     ),
//!     ("DEBUG_MODE".to_string(), "true".to_string()),
//! ]);
//!
//! let config = get_config(&schema_map, &env_source)?;
//! assert_eq!(config.get_str("DATABASE_URL"), Some("postgres://localhost/db"));
//! assert_eq!(config.get_int("MAX_CONNECTIONS"), Some(10));
//! assert_eq!(config.get_bool("DEBUG_MODE"), Some(true));
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! Failures are distinguishable by kind, so callers can report a missing
//! key differently from a malformed value:
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use envschema::{get_config, EnvSchemaError, Schema, ValueType};
//!
//! let schema_map = HashMap::from([
//!     ("PORT".to_string(), Schema::new(ValueType::Integer)),
//! ]);
//! let env_source = HashMap::from([
//!     ("PORT".to_string(), "eight-thousand".to_string()),
//! ]);
//!
//! match get_config(&schema_map, &env_source) {
//!     Err(EnvSchemaError::Parse { name, value, .. }) => {
//!         assert_eq!(name, "PORT");
//!         assert_eq!(value, "eight-thousand");
//!     }
//!     other => panic!("expected a parse failure, got {:?}", other),
//! }
//! ```
//!
//! Unknown value types are rejected when the schema is declared, before any
//! environment value is read:
//!
//! ```rust
//! use envschema::{EnvSchemaError, ValueType};
//!
//! let err = "datetime".parse::<ValueType>().unwrap_err();
//! assert!(matches!(err, EnvSchemaError::UnsupportedType { .. }));
//! ```

mod error;
mod resolve;
mod schema;
mod value;

pub use error::EnvSchemaError;
pub use resolve::{get_config, get_config_from_env, ResolvedConfig};
pub use schema::{Schema, ValueType};
pub use value::Value;
