use std::time::Instant;

use miette::*;

use polyrect::{input::read_input, contained};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let input = read_input(std::env::args().nth(1).as_deref())?;

    let start = Instant::now();
    let result = contained::process(&input)?;
    tracing::info!(elapsed = ?start.elapsed(), "contained area computed");

    println!("Result: {}", result);
    Ok(())
}
