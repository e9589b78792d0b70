//! Basic usage example

use std::collections::HashMap;

use anyhow::Context;
use envschema::{get_config, Schema, ValueType};

fn main() -> anyhow::Result<()> {
    // Declare the configuration surface
    let schema_map = HashMap::from([
        // Required key: no default, so resolution fails without it
        (
            "DATABASE_URL".to_string(),
            Schema::new(ValueType::String),
        ),
        // With default values
        (
            "SERVER_ADDR".to_string(),
            Schema::new(ValueType::String).with_default("127.0.0.1:8080"),
        ),
        (
            "MAX_CONNECTIONS".to_string(),
            Schema::new(ValueType::Integer).with_default(10),
        ),
        (
            "DEBUG_MODE".to_string(),
            Schema::new(ValueType::Boolean).with_default(false),
        ),
    ]);

    // An explicit in-memory source; see process_env.rs for the real one
    let env_source = HashMap::from([
        (
            "DATABASE_URL".to_string(),
            "postgres://localhost/mydb".to_string(),
        ),
        ("SERVER_ADDR".to_string(), "0.0.0.0:3000".to_string()),
    ]);

    let config = get_config(&schema_map, &env_source)?;

    println!("Configuration loaded:");
    println!(
        "  Database URL: {}",
        config.get_str("DATABASE_URL").context("DATABASE_URL")?
    );
    println!(
        "  Server Address: {}",
        config.get_str("SERVER_ADDR").context("SERVER_ADDR")?
    );
    println!(
        "  Max Connections: {}",
        config.get_int("MAX_CONNECTIONS").context("MAX_CONNECTIONS")?
    );
    println!(
        "  Debug Mode: {}",
        config.get_bool("DEBUG_MODE").context("DEBUG_MODE")?
    );

    Ok(())
}
