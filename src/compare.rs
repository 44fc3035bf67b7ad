//! Order-insensitive deep equality.
//!
//! [`equal`] decides whether two nodes describe the same document when neither
//! object member order nor array element order matters:
//!
//! 1. A null left operand equals only a null right operand.
//! 2. Two objects are compared member by member, looked up by name.
//! 3. Two arrays are compared as multisets: same length, and every element of
//!    one is paired with a distinct equal element of the other.
//! 4. Anything else falls back to exact `==`, which compares the variant tag
//!    and the value. `3` never equals `"3"`, `true` never equals `1`, and an
//!    `Int32` never equals an `Int64`.
//!
//! [`equal_with`] takes [`CompareOptions`] to relax object matching to a
//! subset check or to make arrays positional.
//!
//! ## Examples
//!
//! ```rust
//! use json_access::{equal, value};
//!
//! let a = value!({ "foo": { "bar": { "boo": [] }, "baz": 3 }, "woof": true });
//! let b = value!({ "woof": true, "foo": { "baz": 3, "bar": { "boo": [] } } });
//! assert!(equal(&a, &b));
//!
//! assert!(equal(&value!([1, 2, 3]), &value!([3, 2, 1])));
//! assert!(!equal(&value!([1, 1, 2]), &value!([1, 2, 2])));
//! ```

use crate::options::{ArrayOrder, CompareOptions, ObjectMatch};
use crate::{Map, Value};
use std::collections::HashMap;

/// Returns `true` if `a` and `b` are structurally equal, ignoring member and element order.
#[must_use]
pub fn equal(a: &Value, b: &Value) -> bool {
    equal_with(a, b, &CompareOptions::default())
}

/// Like [`equal`], with configurable object and array matching.
#[must_use]
pub fn equal_with(a: &Value, b: &Value, options: &CompareOptions) -> bool {
    match (a, b) {
        (Value::Null, _) => b.is_null(),
        (Value::Object(x), Value::Object(y)) => objects_equal(x, y, options),
        (Value::Array(x), Value::Array(y)) => arrays_equal(x, y, options),
        _ => a == b,
    }
}

impl Value {
    /// Method form of [`equal`].
    #[must_use]
    pub fn deep_eq(&self, other: &Value) -> bool {
        equal(self, other)
    }
}

fn objects_equal(a: &Map, b: &Map, options: &CompareOptions) -> bool {
    match options.objects {
        ObjectMatch::Exact if a.len() != b.len() => return false,
        ObjectMatch::Subset if a.is_empty() => return b.is_empty(),
        _ => {}
    }
    a.iter().all(|(key, value_a)| match b.get(key) {
        Some(value_b) => equal_with(value_a, value_b, options),
        None => false,
    })
}

fn arrays_equal(a: &[Value], b: &[Value], options: &CompareOptions) -> bool {
    if a.len() != b.len() {
        return false;
    }
    if a.is_empty() {
        return true;
    }
    match options.arrays {
        ArrayOrder::Positional => a
            .iter()
            .zip(b)
            .all(|(x, y)| equal_with(x, y, options)),
        ArrayOrder::Multiset => multiset_equal(a, b, options),
    }
}

/// Hashable stand-in for a scalar whose equality agrees with `==` on [`Value`].
#[derive(Debug, PartialEq, Eq, Hash)]
enum ScalarKey<'a> {
    Null,
    Bool(bool),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Float(u32),
    Double(u64),
    String(&'a str),
}

impl<'a> ScalarKey<'a> {
    /// `None` for containers and NaN, which have to be matched pairwise.
    fn of(value: &'a Value) -> Option<Self> {
        Some(match *value {
            Value::Null => ScalarKey::Null,
            Value::Bool(b) => ScalarKey::Bool(b),
            Value::Int32(i) => ScalarKey::Int32(i),
            Value::UInt32(u) => ScalarKey::UInt32(u),
            Value::Int64(i) => ScalarKey::Int64(i),
            Value::UInt64(u) => ScalarKey::UInt64(u),
            // +0.0 and -0.0 compare equal, so they must share a key.
            Value::Float(f) if f.is_nan() => return None,
            Value::Float(f) => ScalarKey::Float(if f == 0.0 { 0 } else { f.to_bits() }),
            Value::Double(d) if d.is_nan() => return None,
            Value::Double(d) => ScalarKey::Double(if d == 0.0 { 0 } else { d.to_bits() }),
            Value::String(ref s) => ScalarKey::String(s),
            Value::Array(_) | Value::Object(_) => return None,
        })
    }
}

// Scalars are compared by frequency; only the remaining elements need the
// pairwise matching below.
fn multiset_equal(a: &[Value], b: &[Value], options: &CompareOptions) -> bool {
    let mut counts: HashMap<ScalarKey<'_>, usize> = HashMap::new();
    let mut rest_a = Vec::new();
    for value in a {
        match ScalarKey::of(value) {
            Some(key) => *counts.entry(key).or_insert(0) += 1,
            None => rest_a.push(value),
        }
    }

    let mut rest_b = Vec::new();
    for value in b {
        match ScalarKey::of(value) {
            Some(key) => match counts.get_mut(&key) {
                Some(count) if *count > 0 => *count -= 1,
                _ => return false,
            },
            None => rest_b.push(value),
        }
    }

    // Equal lengths plus no overdrawn count means the scalar multisets agree.
    if rest_a.len() != rest_b.len() {
        return false;
    }
    match options.objects {
        ObjectMatch::Exact => pair_first_fit(&rest_a, &rest_b, options),
        ObjectMatch::Subset => Matching::new(&rest_a, &rest_b, options).is_perfect(),
    }
}

// Exact equality is symmetric and transitive, so any pairing of equal elements
// extends to a complete one if a complete one exists. Elements that already
// line up are paired first.
fn pair_first_fit(left: &[&Value], right: &[&Value], options: &CompareOptions) -> bool {
    let mut used = vec![false; right.len()];
    let mut pending = Vec::new();
    for (i, (l, r)) in left.iter().zip(right).enumerate() {
        if equal_with(l, r, options) {
            used[i] = true;
        } else {
            pending.push(*l);
        }
    }

    for l in pending {
        let found = (0..right.len()).find(|&r| !used[r] && equal_with(l, right[r], options));
        match found {
            Some(r) => used[r] = true,
            None => return false,
        }
    }
    true
}

/// Bipartite matching between two equally sized element lists, using
/// augmenting paths. Needed when the element relation is not transitive.
/// Comparisons are computed lazily and cached as they are made.
struct Matching<'v, 'o> {
    left: &'v [&'v Value],
    right: &'v [&'v Value],
    options: &'o CompareOptions,
    // For each right element, the left element it is paired with.
    owner: Vec<Option<usize>>,
    edges: HashMap<(usize, usize), bool>,
}

impl<'v, 'o> Matching<'v, 'o> {
    fn new(left: &'v [&'v Value], right: &'v [&'v Value], options: &'o CompareOptions) -> Self {
        Matching {
            left,
            right,
            options,
            owner: vec![None; right.len()],
            edges: HashMap::new(),
        }
    }

    fn is_perfect(mut self) -> bool {
        // visited[r] holds the round that last reached r; round l + 1 is the search for l.
        let mut visited = vec![0; self.right.len()];
        for l in 0..self.left.len() {
            if !self.augment(l, l + 1, &mut visited) {
                return false;
            }
        }
        true
    }

    fn edge(&mut self, l: usize, r: usize) -> bool {
        if let Some(&known) = self.edges.get(&(l, r)) {
            return known;
        }
        let result = equal_with(self.left[l], self.right[r], self.options);
        self.edges.insert((l, r), result);
        result
    }

    fn augment(&mut self, l: usize, round: usize, visited: &mut [usize]) -> bool {
        // Start at the same position so aligned arrays pair on the first try.
        let n = self.right.len();
        for r in (l..n).chain(0..l.min(n)) {
            if visited[r] == round || !self.edge(l, r) {
                continue;
            }
            visited[r] = round;
            let free = match self.owner[r] {
                None => true,
                Some(other) => self.augment(other, round, visited),
            };
            if free {
                self.owner[r] = Some(l);
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn array(values: Vec<Value>) -> Value {
        Value::Array(values)
    }

    #[test]
    fn test_null_left_operand() {
        assert!(equal(&Value::Null, &Value::Null));
        assert!(!equal(&Value::Null, &Value::from(0)));
        assert!(!equal(&Value::from(0), &Value::Null));
    }

    #[test]
    fn test_scalar_fallback_is_exact() {
        assert!(equal(&Value::from(3), &Value::from(3)));
        assert!(!equal(&Value::from(3), &Value::from("3")));
        assert!(!equal(&Value::from(true), &Value::from(1)));
        assert!(!equal(&Value::from(3i32), &Value::from(3i64)));
        assert!(equal(&Value::from(0.0), &Value::from(-0.0)));
    }

    #[test]
    fn test_signed_zero_in_multiset() {
        let a = array(vec![Value::from(0.0), Value::from(1.0)]);
        let b = array(vec![Value::from(1.0), Value::from(-0.0)]);
        assert!(equal(&a, &b));
    }

    #[test]
    fn test_nan_never_matches() {
        let a = array(vec![Value::from(f64::NAN)]);
        assert!(!equal(&a, &a.clone()));
    }

    #[test]
    fn test_mixed_scalars_and_containers() {
        let a = array(vec![
            Value::from(1),
            array(vec![Value::from("x"), Value::from("y")]),
            Value::from("s"),
        ]);
        let b = array(vec![
            array(vec![Value::from("y"), Value::from("x")]),
            Value::from("s"),
            Value::from(1),
        ]);
        assert!(equal(&a, &b));

        let c = array(vec![
            array(vec![Value::from("y"), Value::from("x")]),
            Value::from("s"),
            Value::from("s"),
        ]);
        assert!(!equal(&a, &c));
    }

    #[test]
    fn test_matching_reassigns_partners() {
        // Under subset matching {"a":1} fits inside both right elements but
        // {"b":2} only fits inside the first, so the first pairing found for
        // {"a":1} has to be undone.
        let mut a_only = Map::new();
        a_only.insert("a".to_string(), Value::from(1));
        let mut b_only = Map::new();
        b_only.insert("b".to_string(), Value::from(2));
        let mut both = a_only.clone();
        both.insert("b".to_string(), Value::from(2));

        let a = array(vec![Value::Object(a_only.clone()), Value::Object(b_only)]);
        let b = array(vec![Value::Object(both), Value::Object(a_only)]);
        assert!(equal_with(&a, &b, &CompareOptions::subset()));
        assert!(!equal(&a, &b));
    }

    fn records(count: usize, reverse: bool) -> Value {
        let mut values: Vec<Value> = (0..count)
            .map(|i| {
                let mut map = Map::new();
                map.insert("id".to_string(), Value::from(i as u64));
                Value::Object(map)
            })
            .collect();
        if reverse {
            values.reverse();
        }
        array(values)
    }

    #[test]
    fn test_large_aligned_container_arrays() {
        let a = records(20_000, false);
        let b = records(20_000, false);
        assert!(equal(&a, &b));
        assert!(equal_with(&a, &b, &CompareOptions::subset()));
    }

    #[test]
    fn test_large_reordered_container_arrays() {
        let a = records(2_000, false);
        let b = records(2_000, true);
        assert!(equal(&a, &b));

        let mut c = records(2_000, true);
        if let Value::Array(values) = &mut c {
            values[0] = records(1, false);
        }
        assert!(!equal(&a, &c));
    }

    #[test]
    fn test_subset_empty_objects() {
        let empty = Value::Object(Map::new());
        let mut map = Map::new();
        map.insert("a".to_string(), Value::Null);
        let full = Value::Object(map);

        let subset = CompareOptions::subset();
        assert!(equal_with(&empty, &empty, &subset));
        assert!(!equal_with(&empty, &full, &subset));
        assert!(equal_with(&full, &full, &subset));
        assert!(!equal_with(&full, &empty, &subset));
    }

    #[test]
    fn test_positional_arrays() {
        let options = CompareOptions::new().with_arrays(ArrayOrder::Positional);
        let a = array(vec![Value::from(1), Value::from(2)]);
        let b = array(vec![Value::from(2), Value::from(1)]);
        assert!(equal_with(&a, &a, &options));
        assert!(!equal_with(&a, &b, &options));
    }
}
