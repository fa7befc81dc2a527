//! Listing struct fields with `describe!` for tolerant decoding.
//!
//! Run with: cargo run --example describe

use serde_element::{decode, describe, encode, from_str, value};
use std::error::Error;

#[derive(Debug, Default, PartialEq)]
struct Reading {
    sensor: String,
    watts: f64,
    total_kwh: f64,
}

describe!(Reading {
    sensor,
    watts as "power",
    total_kwh,
});

fn main() -> Result<(), Box<dyn Error>> {
    let reading = Reading {
        sensor: "p1".to_string(),
        watts: 230.5,
        total_kwh: 1_024.75,
    };

    let v = encode(&reading)?;
    println!("Encoded: {}", v);
    assert_eq!(decode::<Reading>(&v)?, reading);

    // Older producers send fewer members, newer ones send more.
    let old: Reading = from_str(r#"{"sensor":"p2"}"#)?;
    let new: Reading = from_str(r#"{"sensor":"p3","power":12,"phase":"L2"}"#)?;
    println!("Old producer: {:?}", old);
    println!("New producer: {:?}", new);

    let err = decode::<Reading>(&value!({"power": "high"})).unwrap_err();
    println!("Bad field: {}", err);

    Ok(())
}
