//! Divide command
//!
//! Usage: peaks divide <X> <Y>

use clap::Args;
use peaks_core::divide;
use peaks_core::errors::ExError;

#[derive(Debug, Args)]
pub struct DivideArgs {
    #[arg(allow_negative_numbers = true)]
    pub x: i64,

    #[arg(allow_negative_numbers = true)]
    pub y: i64,
}

/// Execute divide command
pub fn execute(args: DivideArgs) -> Result<(), Box<dyn std::error::Error>> {
    let quotient = divide(args.x, args.y).map_err(ExError::from)?;
    println!("{}", quotient);
    Ok(())
}
