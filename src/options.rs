//! Configuration options for deep equality.
//!
//! This module provides types to choose how [`equal_with`](crate::equal_with)
//! treats containers:
//!
//! - [`CompareOptions`]: Main configuration struct
//! - [`ObjectMatch`]: whether both member sets must be identical
//! - [`ArrayOrder`]: whether element order matters
//!
//! [`equal`](crate::equal) uses [`CompareOptions::default`]: identical member
//! sets and order-insensitive arrays.
//!
//! ## Examples
//!
//! ```rust
//! use json_access::{equal_with, value, ArrayOrder, CompareOptions};
//!
//! let a = value!([1, 2, 3]);
//! let b = value!([3, 2, 1]);
//!
//! assert!(equal_with(&a, &b, &CompareOptions::new()));
//!
//! let ordered = CompareOptions::new().with_arrays(ArrayOrder::Positional);
//! assert!(!equal_with(&a, &b, &ordered));
//! ```

/// How the members of two objects are matched.
///
/// # Examples
///
/// ```rust
/// use json_access::{equal_with, value, CompareOptions, ObjectMatch};
///
/// let small = value!({ "a": 1 });
/// let large = value!({ "a": 1, "b": 2 });
///
/// let subset = CompareOptions::new().with_objects(ObjectMatch::Subset);
/// assert!(equal_with(&small, &large, &subset));
/// assert!(!equal_with(&large, &small, &subset));
/// assert!(!equal_with(&small, &large, &CompareOptions::new()));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ObjectMatch {
    /// Both objects have the same member names and equal values under each.
    #[default]
    Exact,
    /// Every member of the left object appears in the right one with an equal
    /// value. An empty left object only matches an empty right one.
    Subset,
}

/// How the elements of two arrays are matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ArrayOrder {
    /// Multiset equality: same length and a one-to-one pairing of equal
    /// elements, in any order.
    #[default]
    Multiset,
    /// Element `i` of the left array equals element `i` of the right one.
    Positional,
}

/// Configuration for [`equal_with`](crate::equal_with).
///
/// # Examples
///
/// ```rust
/// use json_access::{ArrayOrder, CompareOptions, ObjectMatch};
///
/// let options = CompareOptions::new();
/// assert_eq!(options.objects, ObjectMatch::Exact);
/// assert_eq!(options.arrays, ArrayOrder::Multiset);
///
/// let options = CompareOptions::subset().with_arrays(ArrayOrder::Positional);
/// assert_eq!(options.objects, ObjectMatch::Subset);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompareOptions {
    pub objects: ObjectMatch,
    pub arrays: ArrayOrder,
}

impl CompareOptions {
    /// Creates default options (exact member sets, multiset arrays).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that only require the left object's members to be
    /// found in the right one.
    #[must_use]
    pub fn subset() -> Self {
        CompareOptions {
            objects: ObjectMatch::Subset,
            ..Default::default()
        }
    }

    /// Sets how object members are matched.
    #[must_use]
    pub fn with_objects(mut self, objects: ObjectMatch) -> Self {
        self.objects = objects;
        self
    }

    /// Sets how array elements are matched.
    #[must_use]
    pub fn with_arrays(mut self, arrays: ArrayOrder) -> Self {
        self.arrays = arrays;
        self
    }
}
