// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error handling example.
//!
//! This example demonstrates:
//! - Matching on the kind of `EnvVarError`
//! - Reading the variable name and message from an error
//! - Including an example value in error messages
//!
//! To run this example:
//! ```bash
//! cargo run --example catch_error
//! ```

use envcast::prelude::*;

fn report(result: Result<Option<u16>>) {
    match result {
        Ok(port) => println!("✓ port: {:?}", port),
        Err(EnvVarError::MissingRequired { key, message }) => {
            println!("✗ {} is missing: {}", key, message)
        }
        Err(EnvVarError::Conversion { key, source, .. }) => {
            println!("✗ {} could not be converted: {}", key, source)
        }
        Err(e) => println!("✗ {}", e),
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    println!("=== envcast: Catching Errors ===\n");

    let env = envcast::from([("PORT", "700000"), ("BLANK", " ")]);

    println!("--- Example 1: Conversion Error ---");
    report(env.get("PORT").example("8080").as_port_number());

    println!("\n--- Example 2: Missing Required Variable ---");
    report(env.get("ADMIN_PORT").required().as_port_number());

    println!("\n--- Example 3: Empty Required Variable ---");
    report(env.get("BLANK").required().example("8080").as_port_number());

    println!("\n--- Example 4: Invalid Default ---");
    if let Err(e) = env.get("PORT").try_default(serde_json::Value::Bool(true)) {
        println!("✗ [{}] {}", e.key(), e.message());
    }
}
