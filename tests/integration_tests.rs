use serde::{Deserialize, Serialize};
use serde_element::{
    decode, decode_param, describe, encode, from_str, to_string, to_string_pretty,
    to_string_with_options, value, ControlEscape, Error, Map, PathSegment, Value, ValueKind,
    WriteOptions,
};
use std::collections::{BTreeMap, HashMap};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct User {
    id: u32,
    name: String,
    active: bool,
    tags: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Product {
    sku: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Order {
    order_id: u32,
    customer: User,
    items: Vec<Product>,
    total: f64,
}

#[derive(Debug, Default, PartialEq, Clone)]
struct Score {
    id: String,
    score: f64,
}
describe!(Score { id, score });

fn order() -> Order {
    Order {
        order_id: 12345,
        customer: User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["vip".to_string()],
        },
        items: vec![
            Product {
                sku: "WIDGET-001".to_string(),
                price: 29.99,
                quantity: 2,
            },
            Product {
                sku: "GADGET-002".to_string(),
                price: 49.99,
                quantity: 1,
            },
        ],
        total: 109.97,
    }
}

#[test]
fn test_nested_struct() {
    let text = to_string_pretty(&order()).unwrap();
    let order_back: Order = from_str(&text).unwrap();
    assert_eq!(order(), order_back);
}

#[test]
fn test_text_to_value_to_native() {
    let v = Value::parse(&to_string(&order()).unwrap()).unwrap();
    assert!(v["customer"]["id"].is_number_uint());
    assert!(v["items"][1]["price"].is_number_float());
    assert_eq!(v["items"][1]["sku"], "GADGET-002");
    assert_eq!(decode::<Order>(&v).unwrap(), order());
}

#[test]
fn test_promotion_on_write() {
    let mut v = Value::Null;
    v["a"] = Value::from(1);
    assert!(v.is_object());
    assert_eq!(v["a"].to_native::<i32>().unwrap(), 1);

    let mut v = Value::Null;
    v[0] = Value::from(1);
    assert!(v.is_array());
    assert_eq!(v[0].to_native::<i32>().unwrap(), 1);
}

#[test]
fn test_write_past_end_grows_array() {
    let mut v = value!([1]);
    v[3] = Value::from("last");
    assert_eq!(v, value!([1, null, null, "last"]));
}

#[test]
#[should_panic]
fn test_index_write_on_scalar_panics() {
    let mut v = Value::from(true);
    v["key"] = Value::Null;
}

#[test]
fn test_forgiving_and_strict_lookup() {
    let v = value!({"present": [10]});

    assert!(v["missing"].is_null());
    assert!(v["present"][5].is_null());
    assert!(v[0].is_null());

    assert_eq!(v.at("missing").unwrap_err(), Error::key_not_found("missing"));
    assert_eq!(
        v.at("present").unwrap().at(5).unwrap_err(),
        Error::index_out_of_range(5, 1)
    );
    assert!(v.at(0).unwrap_err().is_type_mismatch());
}

#[test]
fn test_aggregate_round_trip() {
    for s in [
        Score { id: "x".to_string(), score: 1.5 },
        Score::default(),
        Score { id: "quote\"and\\slash/".to_string(), score: -1e-9 },
    ] {
        assert_eq!(decode::<Score>(&encode(&s).unwrap()).unwrap(), s);
        assert_eq!(from_str::<Score>(&to_string(&s).unwrap()).unwrap(), s);
    }
}

#[test]
fn test_tolerant_decode() {
    let s: Score = decode(&value!({"id": "x"})).unwrap();
    assert_eq!(s, Score { id: "x".to_string(), score: 0.0 });
}

#[test]
fn test_numeric_coercion() {
    assert_eq!(Value::from(1i64), Value::from(1.0f64));
    assert_ne!(Value::from(u64::MAX), Value::from(-1i64));
    assert!(Value::from(1i64) < Value::from(2.5f64));
    assert!(Value::from(-1i64) < Value::from(0u64));
    assert_eq!(
        Value::from(2u8).partial_cmp(&Value::from("2")),
        None
    );
}

#[test]
fn test_escaping() {
    let text = Value::from("a\tb\"c").write();
    assert_eq!(text, r#""a\tb\"c""#);
    assert_eq!(Value::parse(&text).unwrap(), "a\tb\"c");
}

#[test]
fn test_control_characters() {
    let raw = "bell\u{7}";
    assert_eq!(to_string(&raw).unwrap(), r#""bell\0007""#);

    let options = WriteOptions::new().with_control_escape(ControlEscape::Unicode);
    let standard = to_string_with_options(&raw, &options).unwrap();
    assert_eq!(standard, r#""bell\u0007""#);
    assert_eq!(serde_json::from_str::<String>(&standard).unwrap(), raw);
}

#[test]
fn test_malformed_input() {
    let err = Value::parse("{\"a\":}").unwrap_err();
    assert!(err.is_parse());
    assert_eq!(err.offset(), Some(5));
}

#[test]
fn test_parse_failure_leaves_no_value() {
    for input in ["[1, 2", "\"open", "[1] 2", "{\"a\" 1}", "01", "\"\\x\"", ""] {
        let err = from_str::<Value>(input).unwrap_err();
        assert!(err.is_parse(), "input {:?} gave {:?}", input, err);
    }
}

#[test]
fn test_float_tag_survives_text() {
    let v = Value::Float(3.0);
    assert_eq!(v.write(), "3.0");
    assert_eq!(Value::parse(&v.write()).unwrap().kind(), ValueKind::Float);
}

#[test]
fn test_integer_tags_from_text() {
    assert_eq!(Value::parse("-5").unwrap().kind(), ValueKind::Int);
    assert_eq!(Value::parse("18446744073709551615").unwrap(), Value::Uint(u64::MAX));
    assert_eq!(Value::parse("-18446744073709551615").unwrap().kind(), ValueKind::Float);
}

#[test]
fn test_string_target_is_strict() {
    let err = decode::<String>(&Value::from(5)).unwrap_err();
    assert_eq!(err, Error::type_mismatch("string", "number_int"));
}

#[test]
fn test_sequence_failure_reports_index() {
    let err = decode::<Vec<u8>>(&value!([1, 2, 300])).unwrap_err();
    let path = err.path().unwrap();
    assert_eq!(path.segments(), &[PathSegment::Index(2)]);
    assert!(err.to_string().starts_with("at `[2]`"));
}

#[test]
fn test_nested_failure_reports_path() {
    let err = from_str::<Order>(
        r#"{"order_id":1,"customer":{"id":1,"name":"n","active":true,"tags":[]},
            "items":[{"sku":"a","price":1,"quantity":1},{"sku":"b","price":"free","quantity":1}],
            "total":1}"#,
    )
    .unwrap_err();
    assert_eq!(err.path().unwrap().to_string(), ".items[1].price");
    assert!(err.root_cause().is_type_mismatch());
}

#[test]
fn test_mappings() {
    let mut stock = BTreeMap::new();
    stock.insert("apples".to_string(), 3u32);
    stock.insert("pears".to_string(), 0);

    let v = encode(&stock).unwrap();
    assert_eq!(v, value!({"apples": 3, "pears": 0}));
    assert_eq!(decode::<BTreeMap<String, u32>>(&v).unwrap(), stock);

    let by_id: HashMap<u16, bool> = decode(&value!({"7": true, "9": false})).unwrap();
    assert_eq!(by_id.get(&7), Some(&true));
    assert_eq!(by_id.get(&9), Some(&false));
}

#[cfg(not(feature = "preserve_order"))]
#[test]
fn test_objects_written_in_key_order() {
    let mut map = Map::new();
    map.insert("b".to_string(), Value::from(2));
    map.insert("a".to_string(), Value::from(1));
    assert_eq!(Value::Object(map).write(), r#"{"a":1,"b":2}"#);
}

#[cfg(feature = "preserve_order")]
#[test]
fn test_objects_written_in_insertion_order() {
    let mut map = Map::new();
    map.insert("b".to_string(), Value::from(2));
    map.insert("a".to_string(), Value::from(1));
    assert_eq!(Value::Object(map).write(), r#"{"b":2,"a":1}"#);
}

#[test]
fn test_copy_and_take() {
    let mut original = value!({"list": [1, 2]});
    let copy = original.clone();
    original["list"][0] = Value::from("changed");
    assert_eq!(copy["list"][0], 1);

    let moved = original.take();
    assert!(original.is_null());
    assert_eq!(moved["list"][0], "changed");
}

#[test]
fn test_decode_param() {
    #[derive(Deserialize, Debug, PartialEq)]
    struct Query {
        page: u32,
        filter: Option<String>,
    }

    assert_eq!(decode_param::<i32>("-12").unwrap(), -12);
    assert_eq!(decode_param::<String>("p1/main").unwrap(), "p1/main");
    assert_eq!(
        decode_param::<Query>(r#"{"page":2}"#).unwrap(),
        Query { page: 2, filter: None }
    );
    assert!(decode_param::<Query>("page=2").unwrap_err().is_type_mismatch());
}

#[test]
fn test_chrono_timestamps() {
    use chrono::{DateTime, TimeZone, Utc};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Sample {
        at: DateTime<Utc>,
        watts: f64,
    }

    let sample = Sample {
        at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        watts: 512.25,
    };
    let v = encode(&sample).unwrap();
    assert_eq!(v["at"], "2024-03-01T12:00:00Z");
    assert_eq!(from_str::<Sample>(&v.write()).unwrap(), sample);
}

#[test]
fn test_agrees_with_serde_json() {
    let text = to_string(&order()).unwrap();
    let via_json: Order = serde_json::from_str(&text).unwrap();
    assert_eq!(via_json, order());

    let json = serde_json::to_string(&order()).unwrap();
    assert_eq!(from_str::<Order>(&json).unwrap(), order());
}
