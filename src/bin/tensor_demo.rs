use std::process::ExitCode;

use aten_lite::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn run() -> Result<()> {
    let shape = [2usize, 2];
    let tensor = Tensor::from_rows(shape, vec![vec![1, 2], vec![3, 4]])?;
    info!(%tensor, "input");

    let reshaped = tensor.reshape([4])?;
    println!("Reshape: {}", reshaped);

    let other = Tensor::from_rows(shape, vec![vec![2, 2], vec![2, 2]])?;
    let product = tensor.hadamard_product(&other)?;
    println!("Hadamard Product: {}", product);

    let selected = tensor.index_select(0, &[0, 0, 1, 1])?;
    println!("Index Select: {}", selected);

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
