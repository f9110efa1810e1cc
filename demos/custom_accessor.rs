// SPDX-License-Identifier: MIT OR Apache-2.0

//! Custom accessor example.
//!
//! This example demonstrates:
//! - Registering an extra accessor that takes arguments
//! - Calling it by name on a variable
//! - Overriding a built-in accessor for one binding only
//!
//! To run this example:
//! ```bash
//! cargo run --example custom_accessor
//! ```

use envcast::domain::accessors;
use envcast::prelude::*;

/// Accepts integers within `[min, max]`, given as the two arguments.
fn as_int_between(value: &str, args: &[&str]) -> std::result::Result<i64, Rejection> {
    let n = accessors::as_int(value)?;
    let (min, max) = match args {
        [min, max] => (accessors::as_int(min)?, accessors::as_int(max)?),
        _ => return Err(Rejection::new("needs a min and a max")),
    };

    if n < min || n > max {
        return Err(Rejection::new(format!(
            "should be an integer between the range of [{}, {}]",
            min, max
        )));
    }

    Ok(n)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("=== envcast: Custom Accessors ===\n");

    let env = envcast::builder([("INSTANCES", "4"), ("REGION", "eu-west-1")])
        .with_accessor("as_int_between", as_int_between)
        .with_accessor("as_string", |value: &str, _: &[&str]| Ok(value.to_uppercase()))
        .build();

    println!("--- Example 1: Accessor With Arguments ---");
    let instances: Option<i64> = env
        .get("INSTANCES")
        .required()
        .call("as_int_between", &["1", "10"])?;
    println!("✓ INSTANCES = {:?}", instances);

    match env.get("INSTANCES").call::<i64>("as_int_between", &["5", "10"]) {
        Ok(n) => println!("✗ unexpectedly accepted {:?}", n),
        Err(e) => println!("✓ rejected: {}", e),
    }

    println!("\n--- Example 2: Overridden Built-in ---");
    println!("✓ REGION = {:?}", env.get("REGION").as_string()?);

    let plain = envcast::from([("REGION", "eu-west-1")]);
    println!("✓ REGION (plain binding) = {:?}", plain.get("REGION").as_string()?);

    println!("\n--- Example 3: Unknown Accessor ---");
    if let Err(e) = plain.get("REGION").call::<i64>("as_int_between", &["1", "2"]) {
        println!("✓ {}", e);
    }

    Ok(())
}
