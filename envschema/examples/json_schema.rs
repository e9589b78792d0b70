//! Declaring a schema map as JSON and dumping the resolved config

use std::collections::HashMap;

use envschema::{get_config, Schema};

fn main() -> anyhow::Result<()> {
    // Schema maps are plain data, so they can live outside the code
    let schema_map: HashMap<String, Schema> = serde_json::from_str(
        r#"{
            "DATABASE_URL": {"value_type": "string"},
            "MAX_CONNECTIONS": {"value_type": "integer", "default": 10},
            "TIMEOUT_SECS": {"value_type": "float", "default": 2.5},
            "DEBUG_MODE": {"value_type": "boolean", "default": false}
        }"#,
    )?;

    let env_source = HashMap::from([
        (
            "DATABASE_URL".to_string(),
            "postgres://localhost/mydb".to_string(),
        ),
        ("MAX_CONNECTIONS".to_string(), "25".to_string()),
    ]);

    let config = get_config(&schema_map, &env_source)?;

    // The resolved config serializes as a plain JSON object
    println!("{}", serde_json::to_string_pretty(&config)?);

    Ok(())
}
