//! Kennel demo entry-point: build the residents and print them as JSON.

use std::io::{self, Write};

use tracing_subscriber::EnvFilter;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let residents = kennel::residents()?;
    tracing::info!(count = residents.len(), "built kennel residents");
    let mut out = io::stdout().lock();
    for dog in &residents {
        writeln!(out, "{}", serde_json::to_string(dog)?)?;
    }
    Ok(())
}
