//! Multi-column target encoding example with ndarray input.
//!
//! Run with: `cargo run --example matrix_encoding`

use fastTencode::prelude::*;
use ndarray::array;

fn main() -> Result<(), EncodeError> {
    // Rows are samples, columns are categorical features
    let data = array![
        [0.0, 2.0],
        [0.0, 3.0],
        [1.0, 2.0],
        [1.0, 3.0],
        [1.0, 2.0],
    ];
    let target = array![1.0, 0.0, 1.0, 1.0, 0.0];

    let encoder = TargetEncoder::new()
        .smoothing(1.0)
        .min_samples_leaf(1.0)
        .adapter(Matrix) // columns fitted in parallel
        .build()?;

    let (fitted, encoded) = encoder.fit_transform(&data, &target)?;

    println!("{}", fitted);
    println!();
    for (j, column) in encoded.iter().enumerate() {
        println!("  column {}: {:?}", j, column);
    }

    Ok(())
}
