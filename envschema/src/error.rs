//! Error types for schema declaration and configuration resolution

use crate::schema::ValueType;

/// Errors that can occur when declaring a schema or resolving configuration.
///
/// This error type covers three failure scenarios:
/// - Value type identifiers outside the supported set at declaration time
/// - Missing required configuration keys at resolution time
/// - Type parsing failures at resolution time
#[derive(Debug, thiserror::Error)]
pub enum EnvSchemaError {
    /// The value type identifier has no registered parser.
    ///
    /// Occurs at declaration time, when a type identifier outside the
    /// supported set is parsed into a [`ValueType`]. Resolution never
    /// produces this error; an unknown type fails before any environment
    /// value is read.
    #[error("No parser registered for value type '{value_type}'")]
    UnsupportedType {
        /// The offending type identifier
        value_type: String,
    },

    /// Required configuration key is not present in the environment source.
    ///
    /// Occurs when a key has no environment value and its schema declares
    /// no default.
    #[error("Environment variable '{name}' is required but not set")]
    Missing {
        /// Name of the missing configuration key
        name: String,
    },

    /// An environment value could not be parsed as the declared type.
    #[error("Failed to parse environment variable '{name}' as {value_type}: invalid value '{value}'")]
    Parse {
        /// Name of the configuration key being parsed
        name: String,
        /// The raw string value that failed to parse
        value: String,
        /// The declared target type
        value_type: ValueType,
    },
}
