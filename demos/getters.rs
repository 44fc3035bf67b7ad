//! Reading typed values out of a document without panicking on mismatches.
//!
//! Run with: cargo run --example getters

use json_access::{
    get, get_or, require_member, try_get, try_get_object, try_get_object_mut, try_get_or, Value,
};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let mut doc: Value = serde_json::from_str(
        r#"{
            "service": {"host": "localhost", "port": 8080, "debug": true},
            "retries": 3,
            "ratio": 0.25,
            "big": 5000000000
        }"#,
    )?;

    // Matching types come back as Some
    println!("retries as i32: {:?}", try_get::<i32>(&doc, "retries"));
    println!("ratio as f64:   {:?}", try_get::<f64>(&doc, "ratio"));
    println!("ratio as f32:   {:?}", try_get::<f32>(&doc, "ratio"));

    // Mismatches fall back instead of panicking
    println!("retries as bool: {:?}", try_get::<bool>(&doc, "retries"));
    println!("big as i32 (default -1): {}", try_get_or(&doc, "big", -1));
    println!("big as i64: {:?}", try_get::<i64>(&doc, "big"));
    println!("missing (default \"n/a\"): {}", try_get_or(&doc, "missing", "n/a"));
    println!("root as string: {:?}", get::<String>(&doc));
    println!("root as u64 (default 0): {}\n", get_or(&doc, 0u64));

    // Object views alias the document
    if let Some(service) = try_get_object(&doc, "service") {
        for (key, value) in service {
            println!("service.{} = {}", key, value);
        }
    }

    if let Some(mut service) = try_get_object_mut(&mut doc, "service") {
        if let Some(port) = service.get_mut("port") {
            *port = Value::from(9090);
        }
    }
    let service = doc.member("service").unwrap_or(&Value::Null);
    println!("\nport after edit: {:?}", try_get::<i32>(service, "port"));

    // Strict lookups explain what went wrong
    match require_member::<bool>(&doc, "retries") {
        Ok(flag) => println!("retries flag: {}", flag),
        Err(err) => println!("retries flag: {}", err),
    }

    Ok(())
}
