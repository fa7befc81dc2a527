//! Basic serialization and deserialization through canonical text.
//!
//! Run with: cargo run --example simple

use serde::{Deserialize, Serialize};
use serde_element::{from_str, to_string, to_string_pretty};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct User {
    id: u32,
    name: String,
    homepage: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let users = vec![
        User {
            id: 42,
            name: "Alice Johnson".to_string(),
            homepage: "https://example.com/alice".to_string(),
        },
        User {
            id: 43,
            name: "Bob \"Bobby\" Smith".to_string(),
            homepage: "https://example.com/bob".to_string(),
        },
    ];

    let text = to_string(&users)?;
    println!("Compact output:\n{}\n", text);
    println!("Pretty output:\n{}\n", to_string_pretty(&users)?);

    let users_back: Vec<User> = from_str(&text)?;
    assert_eq!(users, users_back);
    println!("✓ Round-trip successful");

    match from_str::<Vec<User>>(r#"[{"id":42,"name":}]"#) {
        Ok(_) => println!("unexpectedly parsed"),
        Err(e) => println!("Malformed input rejected: {}", e),
    }

    Ok(())
}
