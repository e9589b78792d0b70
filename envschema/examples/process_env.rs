//! Resolving against the real process environment

use std::collections::HashMap;

use anyhow::Context;
use envschema::{get_config_from_env, Schema, ValueType};

fn main() -> anyhow::Result<()> {
    // Set environment variables for demonstration
    std::env::set_var("APP_NAME", "my-application");
    std::env::set_var("WORKER_COUNT", "4");
    // TIMEOUT_SECS not set, its default applies

    let schema_map = HashMap::from([
        ("APP_NAME".to_string(), Schema::new(ValueType::String)),
        ("WORKER_COUNT".to_string(), Schema::new(ValueType::Integer)),
        (
            "TIMEOUT_SECS".to_string(),
            Schema::new(ValueType::Float).with_default(2.5),
        ),
    ]);

    let config = get_config_from_env(&schema_map)?;

    println!("Configuration:");
    println!("  App Name: {}", config.get_str("APP_NAME").context("APP_NAME")?);
    println!(
        "  Worker Count: {}",
        config.get_int("WORKER_COUNT").context("WORKER_COUNT")?
    );
    println!(
        "  Timeout: {}s",
        config.get_float("TIMEOUT_SECS").context("TIMEOUT_SECS")?
    );

    Ok(())
}
