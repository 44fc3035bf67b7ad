//! # json_access
//!
//! Type-checked accessors and order-insensitive deep equality for
//! dynamically-typed JSON values.
//!
//! ## Why?
//!
//! Code that consumes loosely-typed JSON has to read numbers, strings and
//! objects out of nodes whose runtime type it does not control. This crate
//! answers two questions about such nodes without ever panicking:
//!
//! - **"Give me this as a `T`"**: [`get`], [`get_or`], [`try_get`] and friends
//!   return `None` or a caller-supplied default when the node's variant does
//!   not match, instead of aborting.
//! - **"Are these the same document?"**: [`equal`] compares two trees while
//!   ignoring object member order *and* array element order (multiset
//!   equality), which `==` does not do.
//!
//! ## Key Features
//!
//! - **Strict typing**: integer accessors match the stored width exactly;
//!   float accessors accept any number that converts without loss
//! - **Total**: every accessor and comparison returns a result for every input
//! - **Zero-copy views**: [`ObjectView`] and [`ObjectViewMut`] alias the
//!   members of an object node
//! - **Serde Compatible**: [`Value`] can be produced by any serde format and
//!   converted into any `T: Deserialize`
//! - **No Unsafe Code**
//!
//! ## Quick Start
//!
//! ```rust
//! use json_access::{equal, get_or, try_get, value, Value};
//!
//! let doc: Value = serde_json::from_str(r#"{"name": "Alice", "age": 30}"#).unwrap();
//!
//! assert_eq!(try_get::<&str>(&doc, "name"), Some("Alice"));
//! assert_eq!(try_get::<i32>(&doc, "age"), Some(30));
//! assert_eq!(try_get::<bool>(&doc, "age"), None);
//! assert_eq!(get_or(&doc, 0u64), 0);
//!
//! assert!(equal(&doc, &value!({ "age": 30, "name": "Alice" })));
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Accessors**: O(1); member lookup is a hash lookup in the object's map
//! - **Equality**: O(n) for objects and scalar array elements; nested array
//!   elements are paired by bipartite matching, O(k²) comparisons for k
//!   container elements in the worst case
//! - **Memory**: accessors allocate only when returning an owned `String`
//!
//! ## Thread Safety
//!
//! [`Value`] is `Send + Sync`. Concurrent readers are fine; mutation through
//! [`ObjectViewMut`] needs exclusive access, which the borrow checker enforces.

pub mod access;
pub mod compare;
pub mod error;
pub mod macros;
pub mod map;
pub mod options;
pub mod value;

pub use access::{
    get, get_object, get_object_mut, get_or, get_or_default, require, require_member, try_get,
    try_get_object, try_get_object_mut, try_get_or, FromValue, ObjectView, ObjectViewMut,
};
pub use compare::{equal, equal_with};
pub use error::{Error, Result};
pub use map::Map;
pub use options::{ArrayOrder, CompareOptions, ObjectMatch};
pub use value::{Kind, Value, ValueDeserializer};

use serde::de::DeserializeOwned;

/// Returns an owned deep copy of `value`.
///
/// The copy shares no storage with its source, so the source can be mutated
/// or dropped independently.
///
/// # Examples
///
/// ```rust
/// use json_access::{copy_from, equal, value, Value};
///
/// let mut original = value!({ "foo": "bar" });
/// let copy = copy_from(&original);
/// assert!(equal(&original, &copy));
///
/// *original.member_mut("foo").unwrap() = Value::from(1);
/// assert_eq!(copy, value!({ "foo": "bar" }));
/// ```
#[must_use]
pub fn copy_from(value: &Value) -> Value {
    value.clone()
}

/// Converts a `Value` into any `T: Deserialize`.
///
/// # Examples
///
/// ```rust
/// use json_access::{from_value, value};
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_value(value!({ "x": 1, "y": 2 })).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// Integers reach the target through serde's visitor calls, so converting back
/// into a [`Value`] keeps `Int32`, `UInt32`, `Float` and `Double` but narrows
/// an `Int64` or `UInt64` to the smallest tag that holds the number, exactly
/// as when parsing text. Use [`copy_from`] to keep every tag.
///
/// # Errors
///
/// Returns an error if the value's shape does not match `T`.
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(ValueDeserializer::new(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct User {
        id: u32,
        name: String,
        active: bool,
        tags: Vec<String>,
    }

    #[test]
    fn test_copy_from_is_independent() {
        let mut original = Value::from(1234);
        let copy = copy_from(&original);
        assert_eq!(original, copy);
        original = Value::from(2222);
        assert_ne!(original, copy);
    }

    #[test]
    fn test_copy_from_object() {
        let original = value!({ "foo": "bar" });
        let copy = copy_from(&original);
        assert!(copy.is_object());
        assert_eq!(get_object(&copy).map(|o| o.len()), Some(1));
        assert!(get_object(&copy).unwrap().contains_key("foo"));
    }

    #[test]
    fn test_from_value_struct() {
        let doc = value!({
            "id": 123,
            "name": "Alice",
            "active": true,
            "tags": ["admin", "user"]
        });
        let user: User = from_value(doc).unwrap();
        assert_eq!(
            user,
            User {
                id: 123,
                name: "Alice".to_string(),
                active: true,
                tags: vec!["admin".to_string(), "user".to_string()],
            }
        );
    }

    #[test]
    fn test_from_value_shape_mismatch() {
        let result: Result<User> = from_value(value!([1, 2]));
        assert!(result.is_err());
    }
}
