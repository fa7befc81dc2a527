//! Property-based tests for the codec and conversion round trips.

use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use serde_element::{from_str, to_string, Map, Value, WriteOptions};

fn roundtrip<T: Serialize + for<'de> Deserialize<'de> + PartialEq + std::fmt::Debug>(
    value: &T,
) -> bool {
    match to_string(value) {
        Ok(serialized) => match from_str::<T>(&serialized) {
            Ok(deserialized) => *value == deserialized,
            Err(e) => {
                eprintln!("Deserialize failed: {}", e);
                eprintln!("Serialized was: {}", serialized);
                false
            }
        },
        Err(e) => {
            eprintln!("Serialize failed: {}", e);
            false
        }
    }
}

/// Same tag and payload, recursively. Stricter than `==`, which compares
/// numbers across tags.
fn identical(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Float(x), Value::Float(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(l, r)| identical(l, r))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter().all(|(k, v)| y.get(k).map_or(false, |w| identical(v, w)))
        }
        _ => a.kind() == b.kind() && a == b,
    }
}

fn arb_value_with(floats: BoxedStrategy<f64>) -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        (i64::MAX as u64 + 1..=u64::MAX).prop_map(Value::Uint),
        floats.prop_map(Value::Float),
        any::<String>().prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec((any::<String>(), inner), 0..6)
                .prop_map(|members| Value::Object(members.into_iter().collect::<Map>())),
        ]
    })
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_value_with(any::<f64>().prop_filter("finite", |f| f.is_finite()).boxed())
}

/// Floats with short exact decimal forms, so third-party parsers agree bit for bit.
fn arb_plain_value() -> impl Strategy<Value = Value> {
    arb_value_with((-1_000_000i32..1_000_000).prop_map(|n| f64::from(n) / 8.0).boxed())
}

proptest! {
    #[test]
    fn prop_i64(n in any::<i64>()) {
        prop_assert!(roundtrip(&n));
    }

    #[test]
    fn prop_u64(n in any::<u64>()) {
        prop_assert!(roundtrip(&n));
    }

    #[test]
    fn prop_f64(f in any::<f64>().prop_filter("finite", |f| f.is_finite())) {
        prop_assert!(roundtrip(&f));
    }

    #[test]
    fn prop_string(s in any::<String>()) {
        prop_assert!(roundtrip(&s));
    }

    #[test]
    fn prop_vec_option(v in prop::collection::vec(proptest::option::of(any::<i32>()), 0..20)) {
        prop_assert!(roundtrip(&v));
    }

    #[test]
    fn prop_tuple_i32_bool(t in (any::<i32>(), any::<bool>(), any::<String>())) {
        prop_assert!(roundtrip(&t));
    }

    #[test]
    fn prop_value_text_roundtrip(v in arb_value()) {
        let text = v.write();
        let back = Value::parse(&text).unwrap();
        prop_assert!(identical(&v, &back), "{} reparsed as {:?}", text, back);

        let pretty = v.write_with_options(&WriteOptions::pretty());
        prop_assert!(identical(&v, &Value::parse(&pretty).unwrap()));
    }

    #[test]
    fn prop_serde_json_reads_unicode_escaped_output(v in arb_plain_value()) {
        let options = WriteOptions::new().with_control_escape(serde_element::ControlEscape::Unicode);
        let text = v.write_with_options(&options);
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        let back = Value::parse(&json.to_string()).unwrap();
        prop_assert_eq!(v, back);
    }

    #[test]
    fn prop_parser_never_panics(s in "\\PC{0,32}") {
        let _ = Value::parse(&s);
    }
}
