//! Single-column target encoding example.
//!
//! Run with: `cargo run --example column_encoding`

use fastTencode::prelude::*;

fn main() -> Result<(), EncodeError> {
    // A categorical column (codes) and its numeric target
    let values = vec![0.0, 1.0, 1.0, 0.0, 3.0, 0.0, 1.0];
    let target = vec![1.0, 2.0, 2.0, 1.0, 0.0, 1.0, 2.0];

    let encoder = TargetEncoder::new()
        .smoothing(1.0)
        .min_samples_leaf(1.0)
        .adapter(Column)
        .build()?;

    let (fitted, encoded) = encoder.fit_transform(&values, &target)?;

    println!("{}", fitted);
    println!();
    for (value, code) in values.iter().zip(&encoded) {
        println!("  {:>4} -> {:.6}", value, code);
    }
    println!("  unseen -> {:.6} (global mean)", fitted.encode(99.0));

    Ok(())
}
