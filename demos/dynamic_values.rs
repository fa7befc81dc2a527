//! Working with Value for runtime flexibility.
//!
//! Run with: cargo run --example dynamic_values

use serde::{Deserialize, Serialize};
use serde_element::{decode, to_string_pretty, to_value, value, Value};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize)]
struct User {
    id: u32,
    name: String,
    roles: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut config = value!({
        "host": "localhost",
        "port": 8080,
        "features": ["auth", "logging"],
        "debug": true
    });

    // Writes promote null and grow arrays
    config["features"][2] = Value::from("metrics");
    config["limits"]["connections"] = Value::from(64u32);

    println!("Config:\n{}\n", to_string_pretty(&config)?);

    if let Some(host) = config["host"].as_str() {
        println!("Accessing field 'host': {}", host);
    }
    let port: u16 = config["port"].to_native()?;
    println!("Accessing field 'port': {}", port);
    println!("Missing field reads as: {}", config["timeout"]);
    if let Err(e) = config.at("timeout") {
        println!("Strict lookup: {}", e);
    }

    // Numbers compare by value across tags
    println!("\n8080 == 8080.0: {}", config["port"] == Value::from(8080.0));
    println!("-1 == u64::MAX: {}", Value::from(-1) == Value::from(u64::MAX));

    let user = User {
        id: 123,
        name: "Alice".to_string(),
        roles: vec!["admin".to_string(), "developer".to_string()],
    };

    let user_value = to_value(&user)?;
    println!("\nUser as Value: {}", user_value);
    println!("Type checks:");
    println!("  kind:      {}", user_value.kind());
    println!("  is_object: {}", user_value.is_object());
    println!("  id kind:   {}", user_value["id"].type_name());

    let back: User = decode(&user_value)?;
    println!("Decoded back: {:?}", back);

    Ok(())
}
