//! Comparing two documents whose members and elements are in a different order.
//!
//! Run with: cargo run --example compare

use json_access::{equal, equal_with, ArrayOrder, CompareOptions, Value};
use std::error::Error;

const A: &str = r#"
{
    "foo" : {
        "bar" : {
            "boo" : []
        },
        "baz" : 3
    },
    "woof" : true
}"#;

const B: &str = r#"
{
    "foo" : {
        "baz" : 3,
        "bar" : {
            "boo" : []
        }
    },
    "woof" : true
}"#;

fn main() -> Result<(), Box<dyn Error>> {
    let a: Value = serde_json::from_str(A)?;
    let b: Value = serde_json::from_str(B)?;

    println!("A: {}", a);
    println!("B: {}", b);
    println!("equal(A, B): {}\n", equal(&a, &b));

    // Arrays are multisets by default
    let left: Value = serde_json::from_str(r#"["boo", 7, {"woof": false, "ts": 1}]"#)?;
    let right: Value = serde_json::from_str(r#"[{"ts": 1, "woof": false}, "boo", 7]"#)?;
    println!("equal({}, {}): {}", left, right, equal(&left, &right));

    let positional = CompareOptions::new().with_arrays(ArrayOrder::Positional);
    println!(
        "positional equal({}, {}): {}",
        left,
        right,
        equal_with(&left, &right, &positional)
    );

    // Multiplicity counts
    let ones: Value = serde_json::from_str("[1, 1, 2]")?;
    let twos: Value = serde_json::from_str("[1, 2, 2]")?;
    println!("equal({}, {}): {}", ones, twos, equal(&ones, &twos));

    Ok(())
}
