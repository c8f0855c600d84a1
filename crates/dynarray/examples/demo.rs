//! dynarray demo: statistics, range, filter, and registry teardown.
//!
//! Run with:
//!   cargo run --example demo
//!
//! Set `RUST_LOG=dynarray_arena=trace` to watch registrations and growth.

use dynarray::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ArrayError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== dynarray demo ===\n");

    let mut reg = Registry::new();
    let arr = reg.create(10)?;
    for v in [5.0, 2.0, 8.0, 1.0, 9.0] {
        reg.append(arr, v)?;
    }

    let buf = reg.get(arr)?;
    println!("Array:  {buf}");
    println!("Min:    {:.1}", stats::min(buf)?);
    println!("Max:    {:.1}", stats::max(buf)?);
    println!("Mean:   {:.1}", stats::mean(buf)?);
    println!("Median: {:.1}", stats::median(buf)?);
    println!("Sum:    {:.1}", stats::sum(buf));
    println!("First:  {:.1}", stats::first(buf)?);
    println!("Last:   {:.1}", stats::last(buf)?);

    let range = reg.range(0.0, 1.0, 0.1)?;
    println!("\nrange(0, 1, 0.1) size: {}", reg.size(range)?);

    let positives = reg.filter(arr, |x| x > 0.0)?;
    println!("filter(x > 0) size:    {}", reg.size(positives)?);

    let chunks = reg.split(range, 3)?;
    for (i, chunk) in chunks.iter().enumerate() {
        println!("chunk {i}: {}", reg.get(*chunk)?);
    }

    println!("\nLive arrays: {}", reg.count());
    reg.destroy(arr);
    reg.destroy(range);
    reg.destroy(positives);
    let freed = reg.destroy_all();
    println!("destroy_all freed {freed}; live arrays: {}", reg.count());

    println!("\n=== demo complete ===");
    Ok(())
}
