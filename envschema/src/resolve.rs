//! Resolution of schema maps against environment sources

use std::collections::HashMap;
use std::env;

use serde::Serialize;

use crate::error::EnvSchemaError;
use crate::schema::Schema;
use crate::value::Value;

/// The immutable, fully-typed result of a resolution.
///
/// Holds exactly one parsed [`Value`] per schema key. Serializes
/// transparently as a JSON object, which is convenient for dumping the
/// effective configuration at startup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResolvedConfig {
    values: HashMap<String, Value>,
}

impl ResolvedConfig {
    /// The parsed value for `key`, or `None` for keys outside the schema.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// String value for `key`, or `None` if absent or not string-typed.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Integer value for `key`, or `None` if absent or not integer-typed.
    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_int)
    }

    /// Float value for `key`, or `None` if absent or not float-typed.
    pub fn get_float(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_float)
    }

    /// Boolean value for `key`, or `None` if absent or not boolean-typed.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    /// Number of resolved keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the schema map was empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(key, value)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Resolve a schema map against an environment source.
///
/// For each schema key, the raw string from `env_source` is parsed as the
/// declared type; an absent key falls back to the schema's default, or
/// fails with [`EnvSchemaError::Missing`] when no default is declared. A
/// present value that does not parse fails with [`EnvSchemaError::Parse`].
///
/// Resolution is all-or-nothing: the first failing key aborts the whole
/// call and no partial config is returned. Keys are checked in
/// lexicographic order, so the error reported for an input with several
/// failing keys is deterministic.
///
/// `env_source` is read but never mutated; any string-to-string map works,
/// which keeps resolution testable without touching the real process
/// environment (see [`get_config_from_env`] for that).
pub fn get_config(
    schema_map: &HashMap<String, Schema>,
    env_source: &HashMap<String, String>,
) -> Result<ResolvedConfig, EnvSchemaError> {
    let mut entries: Vec<_> = schema_map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    let mut values = HashMap::with_capacity(entries.len());
    for (key, schema) in entries {
        let value = match env_source.get(key) {
            Some(raw) => {
                schema
                    .value_type()
                    .parse(raw)
                    .ok_or_else(|| EnvSchemaError::Parse {
                        name: key.clone(),
                        value: raw.clone(),
                        value_type: schema.value_type(),
                    })?
            }
            None => match schema.default() {
                Some(default) => default.clone(),
                None => return Err(EnvSchemaError::Missing { name: key.clone() }),
            },
        };
        values.insert(key.clone(), value);
    }

    Ok(ResolvedConfig { values })
}

/// Resolve a schema map against the current process environment.
///
/// Snapshots `std::env::vars()` once and delegates to [`get_config`]. This
/// is the only place the crate reads global process state.
pub fn get_config_from_env(
    schema_map: &HashMap<String, Schema>,
) -> Result<ResolvedConfig, EnvSchemaError> {
    let env_source: HashMap<String, String> = env::vars().collect();
    get_config(schema_map, &env_source)
}
