/// Builds a [`Value`](crate::Value) from literal syntax.
///
/// Arrays and objects nest; any other token tree is encoded with
/// [`encode`](crate::encode), so variables and expressions work too. Wrap
/// negative numbers and other multi-token expressions in parentheses.
///
/// An expression that fails to encode becomes `null`, for example
/// `u128::MAX` or a map with non-scalar keys. Call [`encode`](crate::encode)
/// directly to see the error.
///
/// ```rust
/// use serde_element::{value, Value};
///
/// let limit = 10u32;
/// let v = value!({
///     "name": "probe",
///     "range": [(-5), limit],
///     "tags": [],
///     "extra": null
/// });
///
/// assert_eq!(v["range"][0], -5);
/// assert!(v["range"][1].is_number_uint());
/// assert!(v["extra"].is_null());
/// ```
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(::std::vec::Vec::new())
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(::std::vec![$($crate::value!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::Map::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Map::new();
        $(
            object.insert(::std::string::ToString::to_string(&$key), $crate::value!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Any other expression
    ($other:expr) => {
        $crate::encode(&$other).unwrap_or_default()
    };
}
