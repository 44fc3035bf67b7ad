/// Builds a [`Value`](crate::Value) from JSON-like syntax.
///
/// Leaves that are not `null`, `true`, `false`, an array or an object go
/// through `Value::from`, so they keep the width of their Rust type: an
/// unsuffixed integer literal is an `Int32`, `5u64` is a `UInt64`, `1.5` is a
/// `Double`. Negative numbers inside arrays and objects need parentheses.
///
/// # Examples
///
/// ```rust
/// use json_access::{value, Value};
///
/// let doc = value!({
///     "name": "Alice",
///     "tags": ["rust", "json"],
///     "offset": (-3),
///     "id": 7u64
/// });
/// assert_eq!(doc.member("id"), Some(&Value::UInt64(7)));
/// assert_eq!(doc.member("offset"), Some(&Value::Int32(-3)));
/// ```
#[macro_export]
macro_rules! value {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::Value::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::value!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::Value::Object($crate::Map::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Map::new();
        $(
            object.insert($key.to_string(), $crate::value!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Anything convertible with Value::from
    ($e:expr) => {
        $crate::Value::from($e)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Map, Value};

    #[test]
    fn test_value_macro_primitives() {
        assert_eq!(value!(null), Value::Null);
        assert_eq!(value!(true), Value::Bool(true));
        assert_eq!(value!(false), Value::Bool(false));
        assert_eq!(value!(42), Value::Int32(42));
        assert_eq!(value!(42i64), Value::Int64(42));
        assert_eq!(value!(3.5), Value::Double(3.5));
        assert_eq!(value!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_value_macro_arrays() {
        assert_eq!(value!([]), Value::Array(vec![]));
        assert_eq!(
            value!([1, [true], null]),
            Value::Array(vec![
                Value::Int32(1),
                Value::Array(vec![Value::Bool(true)]),
                Value::Null,
            ])
        );
    }

    #[test]
    fn test_value_macro_objects() {
        assert_eq!(value!({}), Value::Object(Map::new()));

        let obj = value!({
            "name": "Alice",
            "age": 30
        });

        match obj {
            Value::Object(map) => {
                assert_eq!(map.len(), 2);
                assert_eq!(map.get("name"), Some(&Value::String("Alice".to_string())));
                assert_eq!(map.get("age"), Some(&Value::Int32(30)));
            }
            _ => panic!("Expected object"),
        }
    }
}
