//! Type-checked, non-panicking accessors.
//!
//! Every accessor here inspects the node's variant before reading it and
//! answers a mismatch with `None` (or the caller's default) instead of
//! panicking. The accepted variants per target type are:
//!
//! | Target            | Accepted variant                         |
//! |-------------------|------------------------------------------|
//! | `bool`            | `Bool`                                   |
//! | `String`, `&str`  | `String`                                 |
//! | `i32`             | `Int32` only                             |
//! | `i64`             | `Int64` only                             |
//! | `u32`             | `UInt32` only                            |
//! | `u64`             | `UInt64` only                            |
//! | `f32`             | any number passing `is_lossless_float`   |
//! | `f64`             | any number passing `is_lossless_double`  |
//! | [`ObjectView`]    | `Object`                                 |
//!
//! Integer targets match on the stored tag, not the numeric range: an `Int64`
//! holding `5` is not an `i32`.
//!
//! ## Examples
//!
//! ```rust
//! use json_access::{get, get_or, try_get, try_get_or, value};
//!
//! let doc = value!({ "name": "Alice", "age": 30 });
//!
//! assert_eq!(try_get::<String>(&doc, "name"), Some("Alice".to_string()));
//! assert_eq!(try_get::<i32>(&doc, "age"), Some(30));
//! assert_eq!(try_get::<i64>(&doc, "age"), None);
//! assert_eq!(try_get_or(&doc, "missing", 7), 7);
//!
//! assert_eq!(get::<bool>(&doc), None);
//! assert_eq!(get_or(&doc, false), false);
//! ```

use crate::error::{Error, Result};
use crate::{Map, Value};

/// A type that can be read out of a [`Value`] when the node's variant allows it.
///
/// Implementations never panic; an incompatible node yields `None`.
pub trait FromValue<'a>: Sized {
    /// Describes the accepted variant, for [`Error::TypeMismatch`].
    const EXPECTED: &'static str;

    /// Reads `Self` from `value`, or returns `None` if the variant is not compatible.
    fn from_value(value: &'a Value) -> Option<Self>;
}

impl<'a> FromValue<'a> for bool {
    const EXPECTED: &'static str = "bool";

    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_bool()
    }
}

impl<'a> FromValue<'a> for String {
    const EXPECTED: &'static str = "string";

    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

/// Borrows the string in place; the slice lives as long as the node.
impl<'a> FromValue<'a> for &'a str {
    const EXPECTED: &'static str = "string";

    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_str()
    }
}

impl<'a> FromValue<'a> for i32 {
    const EXPECTED: &'static str = "int32";

    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_i32()
    }
}

impl<'a> FromValue<'a> for i64 {
    const EXPECTED: &'static str = "int64";

    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_i64()
    }
}

impl<'a> FromValue<'a> for u32 {
    const EXPECTED: &'static str = "uint32";

    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_u32()
    }
}

impl<'a> FromValue<'a> for u64 {
    const EXPECTED: &'static str = "uint64";

    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_u64()
    }
}

impl<'a> FromValue<'a> for f32 {
    const EXPECTED: &'static str = "number representable as float";

    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_f32()
    }
}

impl<'a> FromValue<'a> for f64 {
    const EXPECTED: &'static str = "number representable as double";

    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_f64()
    }
}

impl<'a> FromValue<'a> for ObjectView<'a> {
    const EXPECTED: &'static str = "object";

    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_object().map(ObjectView::new)
    }
}

/// Returns the node's value as `T`, or `None` if its variant is not compatible.
///
/// # Examples
///
/// ```rust
/// use json_access::{get, Value};
///
/// let node = Value::from(i32::MAX);
/// assert_eq!(get::<i32>(&node), Some(i32::MAX));
/// assert_eq!(get::<u32>(&node), None);
///
/// let node = Value::from("string");
/// assert_eq!(get::<&str>(&node), Some("string"));
/// assert_eq!(get::<bool>(&node), None);
/// ```
#[inline]
#[must_use]
pub fn get<'a, T: FromValue<'a>>(value: &'a Value) -> Option<T> {
    T::from_value(value)
}

/// Returns the node's value as `T`, or `default` if its variant is not compatible.
///
/// # Examples
///
/// ```rust
/// use json_access::{get_or, Value};
///
/// let node = Value::from(true);
/// assert_eq!(get_or(&node, "default".to_string()), "default");
/// assert!(get_or(&node, false));
/// ```
#[inline]
#[must_use]
pub fn get_or<'a, T: FromValue<'a>>(value: &'a Value, default: T) -> T {
    T::from_value(value).unwrap_or(default)
}

/// Returns the node's value as `T`, or `T::default()` if its variant is not compatible.
///
/// # Examples
///
/// ```rust
/// use json_access::{get_or_default, Value};
///
/// let node = Value::from(u64::MAX);
/// assert_eq!(get_or_default::<u64>(&node), u64::MAX);
/// assert_eq!(get_or_default::<i32>(&node), 0);
/// ```
#[inline]
#[must_use]
pub fn get_or_default<'a, T: FromValue<'a> + Default>(value: &'a Value) -> T {
    T::from_value(value).unwrap_or_default()
}

/// Looks up the member `key` of an object node and reads it as `T`.
///
/// Returns `None` when `value` is not an object, when it has no member named
/// `key`, or when that member's variant is not compatible with `T`.
///
/// # Examples
///
/// ```rust
/// use json_access::{try_get, value, Value};
///
/// let doc = value!({ "foo": "bar" });
/// assert_eq!(try_get::<&str>(&doc, "foo"), Some("bar"));
/// assert_eq!(try_get::<bool>(&doc, "foo"), None);
/// assert_eq!(try_get::<&str>(&doc, "baz"), None);
/// assert_eq!(try_get::<&str>(&Value::from("foo"), "foo"), None);
/// ```
#[must_use]
pub fn try_get<'a, T: FromValue<'a>>(value: &'a Value, key: &str) -> Option<T> {
    value.as_object()?.get(key).and_then(T::from_value)
}

/// Like [`try_get`], but returns `default` instead of `None`.
///
/// # Examples
///
/// ```rust
/// use json_access::{try_get_or, value};
///
/// let doc = value!({ "foo": "bar" });
/// assert_eq!(try_get_or(&doc, "foo", ""), "bar");
/// assert_eq!(try_get_or(&doc, "baz", ""), "");
/// assert!(!try_get_or(&doc, "foo", false));
/// ```
#[must_use]
pub fn try_get_or<'a, T: FromValue<'a>>(value: &'a Value, key: &str, default: T) -> T {
    try_get(value, key).unwrap_or(default)
}

/// Returns a read-only view over the members of an object node.
#[inline]
#[must_use]
pub fn get_object(value: &Value) -> Option<ObjectView<'_>> {
    value.as_object().map(ObjectView::new)
}

/// Returns a mutable view over the members of an object node.
///
/// Member values can be modified in place through the view; adding or removing
/// members goes through the node itself ([`Value::as_object_mut`]).
///
/// # Examples
///
/// ```rust
/// use json_access::{get_object_mut, value, Value};
///
/// let mut doc = value!({ "count": 1 });
/// if let Some(mut obj) = get_object_mut(&mut doc) {
///     if let Some(count) = obj.get_mut("count") {
///         *count = Value::from(2);
///     }
/// }
/// assert_eq!(doc, value!({ "count": 2 }));
/// ```
#[inline]
pub fn get_object_mut(value: &mut Value) -> Option<ObjectViewMut<'_>> {
    value.as_object_mut().map(ObjectViewMut::new)
}

/// Returns a read-only view over the object stored in member `key`.
#[inline]
#[must_use]
pub fn try_get_object<'a>(value: &'a Value, key: &str) -> Option<ObjectView<'a>> {
    try_get(value, key)
}

/// Returns a mutable view over the object stored in member `key`.
pub fn try_get_object_mut<'a>(value: &'a mut Value, key: &str) -> Option<ObjectViewMut<'a>> {
    value
        .as_object_mut()?
        .get_mut(key)
        .and_then(Value::as_object_mut)
        .map(ObjectViewMut::new)
}

/// Reads the node as `T`, reporting why it could not.
///
/// # Errors
///
/// Returns [`Error::TypeMismatch`] if the node's variant is not compatible with `T`.
///
/// # Examples
///
/// ```rust
/// use json_access::{require, Value};
///
/// assert_eq!(require::<u32>(&Value::from(7u32)), Ok(7));
/// assert!(require::<i32>(&Value::from(7u32)).is_err());
/// ```
pub fn require<'a, T: FromValue<'a>>(value: &'a Value) -> Result<T> {
    T::from_value(value).ok_or_else(|| Error::type_mismatch(T::EXPECTED, value.kind()))
}

/// Looks up member `key` and reads it as `T`, reporting why it could not.
///
/// # Errors
///
/// Returns [`Error::NotAnObject`] if `value` is not an object,
/// [`Error::MissingMember`] if there is no member named `key`, and
/// [`Error::TypeMismatch`] if the member's variant is not compatible with `T`.
pub fn require_member<'a, T: FromValue<'a>>(value: &'a Value, key: &str) -> Result<T> {
    let map = value
        .as_object()
        .ok_or_else(|| Error::not_an_object(value.kind()))?;
    let member = map.get(key).ok_or_else(|| Error::missing_member(key))?;
    require(member)
}

/// A read-only view over the members of an object node.
///
/// The view borrows the node's storage; nothing is copied.
#[derive(Clone, Copy, Debug)]
pub struct ObjectView<'a> {
    map: &'a Map,
}

impl<'a> ObjectView<'a> {
    #[inline]
    fn new(map: &'a Map) -> Self {
        ObjectView { map }
    }

    /// Returns the number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the object has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the value of the member named `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key)
    }

    /// Returns `true` if the object has a member named `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Reads member `key` as `T`; see [`try_get`].
    #[must_use]
    pub fn try_get<T: FromValue<'a>>(&self, key: &str) -> Option<T> {
        self.map.get(key).and_then(T::from_value)
    }

    /// Reads member `key` as `T`, falling back to `default`.
    #[must_use]
    pub fn try_get_or<T: FromValue<'a>>(&self, key: &str, default: T) -> T {
        self.try_get(key).unwrap_or(default)
    }

    /// Returns an iterator over the members, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'a, String, Value> {
        self.map.iter()
    }

    /// Returns an iterator over the member names, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'a, String, Value> {
        self.map.keys()
    }

    /// Returns an iterator over the member values, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'a, String, Value> {
        self.map.values()
    }

    /// Returns the underlying member storage.
    #[must_use]
    pub fn as_map(&self) -> &'a Map {
        self.map
    }
}

impl<'a> IntoIterator for ObjectView<'a> {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}

/// A mutable view over the members of an object node.
///
/// Member values may be replaced or modified in place. The member set itself
/// is fixed for the lifetime of the view.
#[derive(Debug)]
pub struct ObjectViewMut<'a> {
    map: &'a mut Map,
}

impl<'a> ObjectViewMut<'a> {
    #[inline]
    fn new(map: &'a mut Map) -> Self {
        ObjectViewMut { map }
    }

    /// Returns the number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the object has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the value of the member named `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.map.get(key)
    }

    /// Returns a mutable reference to the value of the member named `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.map.get_mut(key)
    }

    /// Returns `true` if the object has a member named `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Reads member `key` as `T`; see [`try_get`].
    #[must_use]
    pub fn try_get<'b, T: FromValue<'b>>(&'b self, key: &str) -> Option<T> {
        self.map.get(key).and_then(T::from_value)
    }

    /// Returns a mutable view over the object stored in member `key`.
    pub fn try_get_object_mut(&mut self, key: &str) -> Option<ObjectViewMut<'_>> {
        self.map
            .get_mut(key)
            .and_then(Value::as_object_mut)
            .map(ObjectViewMut::new)
    }

    /// Returns an iterator over the members, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.map.iter()
    }

    /// Returns an iterator over the members with mutable values, in insertion order.
    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, String, Value> {
        self.map.iter_mut()
    }

    /// Returns a mutable iterator over the member values, in insertion order.
    pub fn values_mut(&mut self) -> indexmap::map::ValuesMut<'_, String, Value> {
        self.map.values_mut()
    }

    /// Reborrows as a read-only view.
    #[must_use]
    pub fn as_view(&self) -> ObjectView<'_> {
        ObjectView::new(self.map)
    }
}

impl Value {
    /// Method form of [`get`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_access::Value;
    ///
    /// let node = Value::from(2.5f64);
    /// assert_eq!(node.get_as::<f64>(), Some(2.5));
    /// assert_eq!(node.get_as::<f32>(), Some(2.5));
    /// assert_eq!(node.get_as::<String>(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn get_as<'a, T: FromValue<'a>>(&'a self) -> Option<T> {
        T::from_value(self)
    }

    /// Method form of [`get_or`].
    #[inline]
    #[must_use]
    pub fn get_as_or<'a, T: FromValue<'a>>(&'a self, default: T) -> T {
        get_or(self, default)
    }

    /// Returns the member named `key` if this node is an object that has one.
    #[must_use]
    pub fn member(&self, key: &str) -> Option<&Value> {
        self.as_object()?.get(key)
    }

    /// Mutable form of [`member`](Self::member).
    pub fn member_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.as_object_mut()?.get_mut(key)
    }
}

macro_rules! impl_try_from_value {
    ($($ty:ty),*) => {
        $(
            impl TryFrom<&Value> for $ty {
                type Error = Error;

                fn try_from(value: &Value) -> Result<Self> {
                    require(value)
                }
            }
        )*
    };
}

impl_try_from_value!(bool, String, i32, i64, u32, u64, f32, f64);

impl<'a> TryFrom<&'a Value> for &'a str {
    type Error = Error;

    fn try_from(value: &'a Value) -> Result<Self> {
        require(value)
    }
}
