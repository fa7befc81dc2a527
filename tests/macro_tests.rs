use serde_element::{decode, describe, encode, from_str, to_string, value, Describe, Map, Value};

#[test]
fn test_value_macro_null() {
    let value = value!(null);
    assert_eq!(value, Value::Null);
}

#[test]
fn test_value_macro_booleans() {
    assert_eq!(value!(true), Value::Bool(true));
    assert_eq!(value!(false), Value::Bool(false));
}

#[test]
fn test_value_macro_numbers() {
    assert!(matches!(value!(42), Value::Int(42)));
    assert!(matches!(value!(42u64), Value::Uint(42)));
    assert!(matches!(value!(3.5), Value::Float(f) if f == 3.5));
    assert!(matches!(value!((-123)), Value::Int(-123)));
    assert!(matches!(value!(u64::MAX), Value::Uint(u64::MAX)));
}

#[test]
fn test_value_macro_strings() {
    assert_eq!(value!("hello world"), Value::String("hello world".to_string()));
    assert_eq!(value!(""), Value::String(String::new()));
}

#[test]
fn test_value_macro_arrays() {
    assert_eq!(value!([]), Value::Array(vec![]));

    let mixed = value!([1, "hello", true, null, [2.5]]);
    assert_eq!(
        mixed,
        Value::Array(vec![
            Value::Int(1),
            Value::String("hello".to_string()),
            Value::Bool(true),
            Value::Null,
            Value::Array(vec![Value::Float(2.5)]),
        ])
    );
}

#[test]
fn test_value_macro_objects() {
    let obj = value!({
        "name": "Alice",
        "age": 30,
        "address": {
            "city": "Utrecht",
            "zip": "3511"
        },
    });

    let mut address = Map::new();
    address.insert("city".to_string(), Value::from("Utrecht"));
    address.insert("zip".to_string(), Value::from("3511"));
    let mut expected = Map::new();
    expected.insert("name".to_string(), Value::from("Alice"));
    expected.insert("age".to_string(), Value::from(30));
    expected.insert("address".to_string(), Value::Object(address));

    assert_eq!(obj, Value::Object(expected));
}

#[test]
fn test_value_macro_expressions() {
    let readings = vec![1.5f64, 2.0];
    let label = String::from("phase");
    let v = value!({"label": label, "readings": readings, "count": (readings.len())});

    assert_eq!(v["label"], "phase");
    assert_eq!(v["readings"][1], 2.0);
    assert!(v["count"].is_number_uint());
}

#[derive(Debug, Default, PartialEq, Clone)]
struct Meter {
    serial: String,
    phases: u8,
    tariffs: Vec<f64>,
}
describe!(Meter { serial, phases, tariffs });

#[derive(Debug, Default, PartialEq)]
struct Installation {
    location: String,
    meters: Vec<Meter>,
    main: Option<Meter>,
}
describe!(Installation {
    location as "where",
    meters,
    main,
});

fn installation() -> Installation {
    let meter = Meter {
        serial: "E0031".to_string(),
        phases: 3,
        tariffs: vec![0.21, 0.31],
    };
    Installation {
        location: "basement".to_string(),
        meters: vec![meter.clone()],
        main: Some(meter),
    }
}

#[test]
fn test_describe_constants() {
    assert_eq!(Meter::NAME, "Meter");
    assert_eq!(Meter::FIELDS, &["serial", "phases", "tariffs"]);
    assert_eq!(Installation::FIELDS, &["where", "meters", "main"]);
}

#[test]
fn test_describe_encode() {
    let v = encode(&installation()).unwrap();
    assert_eq!(v["where"], "basement");
    assert_eq!(v["meters"][0]["phases"], 3);
    assert_eq!(v["main"]["tariffs"], value!([0.21, 0.31]));
    assert!(v.get("location").is_none());
}

#[test]
fn test_describe_round_trip_through_text() {
    let text = to_string(&installation()).unwrap();
    assert_eq!(from_str::<Installation>(&text).unwrap(), installation());
}

#[test]
fn test_describe_missing_and_unknown_members() {
    let partial: Installation =
        from_str(r#"{"where":"attic","firmware":"2.1","main":null}"#).unwrap();
    assert_eq!(
        partial,
        Installation {
            location: "attic".to_string(),
            ..Default::default()
        }
    );
}

#[test]
fn test_describe_field_error_is_localized() {
    let err = decode::<Installation>(&value!({
        "meters": [{"serial": "a"}, {"phases": 300}]
    }))
    .unwrap_err();
    assert_eq!(err.path().unwrap().to_string(), ".meters[1].phases");
}
