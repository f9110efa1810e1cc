// SPDX-License-Identifier: MIT OR Apache-2.0

//! Logging example.
//!
//! This example demonstrates:
//! - Attaching a log sink that writes to stderr
//! - Routing the same reports through `tracing`
//! - Silencing the sink in production mode
//!
//! To run this example:
//! ```bash
//! cargo run --example logging
//! APP_MODE=production cargo run --example logging
//! ```

use envcast::prelude::*;
use envcast::service::logger;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("=== envcast: Logging ===\n");

    let mode = envcast::get("APP_MODE").as_string()?;

    println!("--- Example 1: Writing to stderr ---");
    let env = envcast::builder([("PORT", "8080")])
        .with_logger(logger::logger(|line: &str| eprintln!("{}", line), mode.as_deref()))
        .build();
    let port = env.get("PORT").required().as_port_number()?;
    println!("✓ PORT = {:?}", port);

    println!("\n--- Example 2: Writing through tracing ---");
    let env = envcast::builder([("RETRIES", "5")])
        .with_logger(logger::tracing_logger(mode.as_deref()))
        .build();
    let retries = env.get("RETRIES").default(3).as_int_positive()?;
    println!("✓ RETRIES = {:?}", retries);

    Ok(())
}
