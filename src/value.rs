//! Dynamic value representation for JSON documents.
//!
//! This module provides the [`Value`] enum, the tree-shaped node every other
//! part of the crate borrows from, and [`Kind`], the runtime tag of a node.
//!
//! ## Core Types
//!
//! - [`Value`]: null, bool, four integer widths, float, double, string, array, object
//! - [`Kind`]: the variant tag of a [`Value`], used in diagnostics
//!
//! Integers keep the width they were stored with. A node built from an `i64`
//! is an [`Value::Int64`] even when the number would fit in 32 bits, and the
//! typed accessors honour that tag rather than the numeric range.
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use json_access::{value, Value};
//!
//! let null = Value::Null;
//! let small = Value::from(42);        // Int32
//! let wide = Value::from(42i64);      // Int64
//! let text = Value::from("hello");
//!
//! let obj = value!({
//!     "name": "Alice",
//!     "age": 30
//! });
//! assert!(obj.is_object());
//! ```
//!
//! ### Type Checking
//!
//! ```rust
//! use json_access::{Kind, Value};
//!
//! let value = Value::from(42u64);
//! assert!(value.is_uint64());
//! assert!(value.is_number());
//! assert_eq!(value.kind(), Kind::UInt64);
//! ```
//!
//! ### From serde formats
//!
//! ```rust
//! use json_access::Value;
//!
//! let value: Value = serde_json::from_str(r#"{"n": 7, "big": 5000000000}"#).unwrap();
//! assert!(value.member("n").unwrap().is_int32());
//! assert!(value.member("big").unwrap().is_int64());
//! ```

use crate::Map;
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed JSON node.
///
/// # Examples
///
/// ```rust
/// use json_access::Value;
///
/// let null = Value::Null;
/// let num = Value::Int32(42);
/// let text = Value::String("hello".to_string());
///
/// assert!(null.is_null());
/// assert!(num.is_int32());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Float(f32),
    Double(f64),
    String(String),
    Array(Vec<Value>),
    Object(Map),
}

/// The runtime variant tag of a [`Value`].
///
/// # Examples
///
/// ```rust
/// use json_access::{Kind, Value};
///
/// assert_eq!(Value::from(true).kind(), Kind::Bool);
/// assert_eq!(Kind::UInt32.to_string(), "uint32");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Float,
    Double,
    String,
    Array,
    Object,
}

impl Kind {
    /// Returns the lower-case name of this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Int32 => "int32",
            Kind::UInt32 => "uint32",
            Kind::Int64 => "int64",
            Kind::UInt64 => "uint64",
            Kind::Float => "float",
            Kind::Double => "double",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// 2^63 and 2^64, the first values outside the i64 and u64 ranges.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

impl Value {
    /// Returns the variant tag of this node.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Int32(_) => Kind::Int32,
            Value::UInt32(_) => Kind::UInt32,
            Value::Int64(_) => Kind::Int64,
            Value::UInt64(_) => Kind::UInt64,
            Value::Float(_) => Kind::Float,
            Value::Double(_) => Kind::Double,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if the value is stored as a 32-bit signed integer.
    #[inline]
    #[must_use]
    pub const fn is_int32(&self) -> bool {
        matches!(self, Value::Int32(_))
    }

    /// Returns `true` if the value is stored as a 32-bit unsigned integer.
    #[inline]
    #[must_use]
    pub const fn is_uint32(&self) -> bool {
        matches!(self, Value::UInt32(_))
    }

    /// Returns `true` if the value is stored as a 64-bit signed integer.
    #[inline]
    #[must_use]
    pub const fn is_int64(&self) -> bool {
        matches!(self, Value::Int64(_))
    }

    /// Returns `true` if the value is stored as a 64-bit unsigned integer.
    #[inline]
    #[must_use]
    pub const fn is_uint64(&self) -> bool {
        matches!(self, Value::UInt64(_))
    }

    /// Returns `true` if the value is stored as an `f32`.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Returns `true` if the value is stored as an `f64`.
    #[inline]
    #[must_use]
    pub const fn is_double(&self) -> bool {
        matches!(self, Value::Double(_))
    }

    /// Returns `true` for any of the numeric variants.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(
            self,
            Value::Int32(_)
                | Value::UInt32(_)
                | Value::Int64(_)
                | Value::UInt64(_)
                | Value::Float(_)
                | Value::Double(_)
        )
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns `true` if the value is an object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns `true` if the number can be read as an `f64` without loss.
    ///
    /// `Float`, `Double` and the 32-bit integers always qualify. The 64-bit
    /// integers qualify only when they survive the round trip through `f64`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_access::Value;
    ///
    /// assert!(Value::from(f64::MAX).is_lossless_double());
    /// assert!(Value::from(1i64 << 53).is_lossless_double());
    /// assert!(!Value::from((1i64 << 53) + 1).is_lossless_double());
    /// assert!(!Value::from("1.0").is_lossless_double());
    /// ```
    #[must_use]
    pub fn is_lossless_double(&self) -> bool {
        match *self {
            Value::Int32(_) | Value::UInt32(_) | Value::Float(_) | Value::Double(_) => true,
            Value::Int64(i) => {
                let d = i as f64;
                (-I64_LIMIT..I64_LIMIT).contains(&d) && d as i64 == i
            }
            Value::UInt64(u) => {
                let d = u as f64;
                (0.0..U64_LIMIT).contains(&d) && d as u64 == u
            }
            _ => false,
        }
    }

    /// Returns `true` if the number can be read as an `f32` without loss.
    ///
    /// The value must first be losslessly readable as an `f64`, lie within
    /// `±f32::MAX`, and survive the round trip through `f32`. NaN never does.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_access::Value;
    ///
    /// assert!(Value::from(f32::MAX).is_lossless_float());
    /// assert!(Value::from(0.5f64).is_lossless_float());
    /// assert!(!Value::from(0.1f64).is_lossless_float());
    /// assert!(!Value::from(f64::MAX).is_lossless_float());
    /// ```
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_lossless_float(&self) -> bool {
        if let Value::Float(_) = self {
            return true;
        }
        if !self.is_lossless_double() {
            return false;
        }
        match self.number_to_f64() {
            Some(a) => {
                let max = f64::from(f32::MAX);
                if !(-max..=max).contains(&a) {
                    return false;
                }
                f64::from(a as f32) == a
            }
            None => false,
        }
    }

    // Widening read of any numeric variant; may round for the 64-bit integers.
    fn number_to_f64(&self) -> Option<f64> {
        match *self {
            Value::Int32(i) => Some(f64::from(i)),
            Value::UInt32(u) => Some(f64::from(u)),
            Value::Int64(i) => Some(i as f64),
            Value::UInt64(u) => Some(u as f64),
            Value::Float(f) => Some(f64::from(f)),
            Value::Double(d) => Some(d),
            _ => None,
        }
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_access::Value;
    ///
    /// assert_eq!(Value::from("hello").as_str(), Some("hello"));
    /// assert_eq!(Value::from(42).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is stored as an `Int32`, returns it.
    #[inline]
    #[must_use]
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Int32(i) => Some(*i),
            _ => None,
        }
    }

    /// If the value is stored as a `UInt32`, returns it.
    #[inline]
    #[must_use]
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Value::UInt32(u) => Some(*u),
            _ => None,
        }
    }

    /// If the value is stored as an `Int64`, returns it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_access::Value;
    ///
    /// assert_eq!(Value::from(42i64).as_i64(), Some(42));
    /// assert_eq!(Value::from(42i32).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int64(i) => Some(*i),
            _ => None,
        }
    }

    /// If the value is stored as a `UInt64`, returns it.
    #[inline]
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::UInt64(u) => Some(*u),
            _ => None,
        }
    }

    /// Reads the number as an `f32` when [`is_lossless_float`](Self::is_lossless_float) holds.
    #[must_use]
    pub fn as_f32(&self) -> Option<f32> {
        match *self {
            Value::Float(f) => Some(f),
            _ if self.is_lossless_float() => self.number_to_f64().map(|d| d as f32),
            _ => None,
        }
    }

    /// Reads the number as an `f64` when [`is_lossless_double`](Self::is_lossless_double) holds.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        if self.is_lossless_double() {
            self.number_to_f64()
        } else {
            None
        }
    }

    /// If the value is an array, returns a reference to its elements.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the value is an array, returns a mutable reference to its elements.
    #[inline]
    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the value is an object, returns a reference to its members.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// If the value is an object, returns a mutable reference to its members.
    #[inline]
    pub fn as_object_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    // Narrowest tag for a signed integer.
    fn from_signed(value: i64) -> Self {
        match i32::try_from(value) {
            Ok(i) => Value::Int32(i),
            Err(_) => Value::Int64(value),
        }
    }

    // Narrowest tag for an unsigned integer, preferring signed at equal width.
    fn from_unsigned(value: u64) -> Self {
        if let Ok(i) = i32::try_from(value) {
            Value::Int32(i)
        } else if let Ok(u) = u32::try_from(value) {
            Value::UInt32(u)
        } else if let Ok(i) = i64::try_from(value) {
            Value::Int64(i)
        } else {
            Value::UInt64(value)
        }
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if (c as u32) < 0x20 => write!(f, "\\u{:04x}", c as u32)?,
            c => write!(f, "{}", c)?,
        }
    }
    f.write_str("\"")
}

fn write_float(f: &mut fmt::Formatter<'_>, d: f64) -> fmt::Result {
    if d.is_finite() {
        write!(f, "{}", d)
    } else {
        f.write_str("null")
    }
}

/// Compact JSON text, for diagnostics.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int32(i) => write!(f, "{}", i),
            Value::UInt32(u) => write!(f, "{}", u),
            Value::Int64(i) => write!(f, "{}", i),
            Value::UInt64(u) => write!(f, "{}", u),
            Value::Float(fl) => write_float(f, f64::from(*fl)),
            Value::Double(d) => write_float(f, *d),
            Value::String(s) => write_escaped(f, s),
            Value::Array(arr) => {
                f.write_str("[")?;
                for (i, element) in arr.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", element)?;
                }
                f.write_str("]")
            }
            Value::Object(obj) => {
                f.write_str("{")?;
                for (i, (key, value)) in obj.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write_escaped(f, key)?;
                    write!(f, ":{}", value)?;
                }
                f.write_str("}")
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int32(i) => serializer.serialize_i32(*i),
            Value::UInt32(u) => serializer.serialize_u32(*u),
            Value::Int64(i) => serializer.serialize_i64(*i),
            Value::UInt64(u) => serializer.serialize_u64(*u),
            Value::Float(f) => serializer.serialize_f32(*f),
            Value::Double(d) => serializer.serialize_f64(*d),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(obj) => obj.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid JSON value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i32<E>(self, value: i32) -> Result<Self::Value, E> {
                Ok(Value::Int32(value))
            }

            fn visit_u32<E>(self, value: u32) -> Result<Self::Value, E> {
                Ok(Value::UInt32(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::from_signed(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Value::from_unsigned(value))
            }

            fn visit_f32<E>(self, value: f32) -> Result<Self::Value, E> {
                Ok(Value::Float(value))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::Double(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut vec = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(Value::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut values = Map::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(Value::Object(values))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl<'de> de::IntoDeserializer<'de, crate::Error> for Value {
    type Deserializer = ValueDeserializer;

    fn into_deserializer(self) -> Self::Deserializer {
        ValueDeserializer(self)
    }
}

/// A serde [`Deserializer`] reading from an owned [`Value`].
///
/// Lets any `T: Deserialize` be built from a node with
/// [`from_value`](crate::from_value).
pub struct ValueDeserializer(Value);

impl ValueDeserializer {
    /// Wraps `value` for deserialization.
    #[must_use]
    pub fn new(value: Value) -> Self {
        ValueDeserializer(value)
    }
}

impl<'de> Deserializer<'de> for ValueDeserializer {
    type Error = crate::Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match self.0 {
            Value::Null => visitor.visit_unit(),
            Value::Bool(b) => visitor.visit_bool(b),
            Value::Int32(i) => visitor.visit_i32(i),
            Value::UInt32(u) => visitor.visit_u32(u),
            Value::Int64(i) => visitor.visit_i64(i),
            Value::UInt64(u) => visitor.visit_u64(u),
            Value::Float(f) => visitor.visit_f32(f),
            Value::Double(d) => visitor.visit_f64(d),
            Value::String(s) => visitor.visit_string(s),
            Value::Array(arr) => {
                let mut seq = de::value::SeqDeserializer::<_, crate::Error>::new(arr.into_iter());
                let value = visitor.visit_seq(&mut seq)?;
                seq.end()?;
                Ok(value)
            }
            Value::Object(obj) => {
                let mut map = de::value::MapDeserializer::<_, crate::Error>::new(obj.into_iter());
                let value = visitor.visit_map(&mut map)?;
                map.end()?;
                Ok(value)
            }
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match self.0 {
            Value::Null => visitor.visit_none(),
            other => visitor.visit_some(ValueDeserializer(other)),
        }
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        use serde::de::IntoDeserializer;

        match self.0 {
            Value::String(s) => visitor.visit_enum(s.into_deserializer()),
            other => Err(crate::Error::type_mismatch("unit variant name", other.kind())),
        }
    }

    serde::forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct newtype_struct seq tuple
        tuple_struct map struct identifier ignored_any
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Int32(i32::from(value))
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Int32(i32::from(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int32(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int64(value)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::UInt32(u32::from(value))
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::UInt32(u32::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::UInt32(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::UInt64(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Object(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_keeps_width() {
        assert_eq!(Value::from(7i8), Value::Int32(7));
        assert_eq!(Value::from(7u16), Value::UInt32(7));
        assert_eq!(Value::from(7i64), Value::Int64(7));
        assert_eq!(Value::from(7u64), Value::UInt64(7));
        assert_eq!(Value::from(1.5f32), Value::Float(1.5));
        assert_eq!(Value::from(1.5f64), Value::Double(1.5));
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::String("x".to_string()));
    }

    #[test]
    fn test_kind() {
        assert_eq!(Value::Null.kind(), Kind::Null);
        assert_eq!(Value::from(u32::MAX).kind(), Kind::UInt32);
        assert_eq!(Value::Array(vec![]).kind(), Kind::Array);
        assert_eq!(Value::Object(Map::new()).kind(), Kind::Object);
        assert_eq!(Kind::Double.to_string(), "double");
    }

    #[test]
    fn test_lossless_double_for_wide_integers() {
        assert!(Value::from(i64::MIN).is_lossless_double());
        assert!(!Value::from(i64::MAX).is_lossless_double());
        assert!(Value::from(1u64 << 63).is_lossless_double());
        assert!(!Value::from(u64::MAX).is_lossless_double());
        assert!(Value::from(u32::MAX).is_lossless_double());
    }

    #[test]
    fn test_lossless_float() {
        assert!(Value::from(f32::MAX).is_lossless_float());
        assert!(Value::from(f64::from(f32::MAX)).is_lossless_float());
        assert!(!Value::from(f64::MAX).is_lossless_float());
        assert!(!Value::from(f64::NAN).is_lossless_float());
        assert!(Value::from(1 << 24).is_lossless_float());
        assert!(!Value::from((1 << 24) + 1).is_lossless_float());
        assert!(!Value::from(true).is_lossless_float());
    }

    #[test]
    fn test_float_readers() {
        assert_eq!(Value::from(f32::MAX).as_f64(), Some(f64::from(f32::MAX)));
        assert_eq!(Value::from(f64::MAX).as_f32(), None);
        assert_eq!(Value::from(3).as_f64(), Some(3.0));
        assert_eq!(Value::from("3").as_f64(), None);
    }

    #[test]
    fn test_narrowest_integer_tag() {
        assert_eq!(Value::from_unsigned(5), Value::Int32(5));
        assert_eq!(Value::from_unsigned(u64::from(u32::MAX)), Value::UInt32(u32::MAX));
        assert_eq!(Value::from_unsigned(1 << 40), Value::Int64(1 << 40));
        assert_eq!(Value::from_unsigned(u64::MAX), Value::UInt64(u64::MAX));
        assert_eq!(Value::from_signed(-5), Value::Int32(-5));
        assert_eq!(Value::from_signed(i64::MIN), Value::Int64(i64::MIN));
    }

    #[test]
    fn test_display() {
        let mut map = Map::new();
        map.insert("a\"b".to_string(), Value::from(vec![Value::Null, Value::from(1.5)]));
        map.insert("t".to_string(), Value::from("line\nbreak"));
        let value = Value::Object(map);
        assert_eq!(value.to_string(), r#"{"a\"b":[null,1.5],"t":"line\nbreak"}"#);
        assert_eq!(Value::from(f64::INFINITY).to_string(), "null");
    }

    #[test]
    fn test_value_deserializer() {
        use serde::Deserialize;

        let mut map = Map::new();
        map.insert("x".to_string(), Value::from(1));
        map.insert("y".to_string(), Value::Null);

        #[derive(Deserialize, Debug, PartialEq)]
        struct Point {
            x: i64,
            y: Option<i64>,
        }

        let point = Point::deserialize(ValueDeserializer(Value::Object(map))).unwrap();
        assert_eq!(point, Point { x: 1, y: None });
    }

    #[test]
    fn test_value_deserializer_unit_enum() {
        use serde::Deserialize;

        #[derive(Deserialize, Debug, PartialEq)]
        #[serde(rename_all = "lowercase")]
        enum Mode {
            Fast,
            Safe,
        }

        let mode = Mode::deserialize(ValueDeserializer::new(Value::from("safe"))).unwrap();
        assert_eq!(mode, Mode::Safe);
        assert!(Mode::deserialize(ValueDeserializer::new(Value::from(1))).is_err());
        assert_ne!(mode, Mode::Fast);
    }

    #[test]
    fn test_value_deserializer_keeps_narrow_tags() {
        use serde::Deserialize;

        for original in [
            Value::Int32(-5),
            Value::UInt32(5),
            Value::Float(1.5),
            Value::Double(1.5),
            Value::Int64(i64::MIN),
            Value::UInt64(u64::MAX),
        ] {
            let back = Value::deserialize(ValueDeserializer::new(original.clone())).unwrap();
            assert_eq!(back, original);
            assert!(crate::equal(&back, &original));
        }

        let nested = Value::Array(vec![Value::UInt32(7), Value::Float(0.25)]);
        let back = Value::deserialize(ValueDeserializer::new(nested.clone())).unwrap();
        assert_eq!(back, nested);
    }

    #[test]
    fn test_value_deserializer_narrows_small_wide_integers() {
        use serde::Deserialize;

        let back = Value::deserialize(ValueDeserializer::new(Value::Int64(5))).unwrap();
        assert_eq!(back, Value::Int32(5));
        let back = Value::deserialize(ValueDeserializer::new(Value::UInt64(7))).unwrap();
        assert_eq!(back, Value::Int32(7));
    }

    #[test]
    fn test_value_deserializer_rejects_trailing_elements() {
        use serde::Deserialize;

        let arr = Value::Array(vec![Value::from(1), Value::from(2), Value::from(3)]);
        assert!(<(i32, i32)>::deserialize(ValueDeserializer::new(arr.clone())).is_err());
        assert_eq!(
            <(i32, i32, i32)>::deserialize(ValueDeserializer::new(arr)).unwrap(),
            (1, 2, 3)
        );
    }
}
