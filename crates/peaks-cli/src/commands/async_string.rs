//! Async string command
//!
//! Usage: peaks async-string [--delay-ms N] [--timeout-ms N]

use std::time::Duration;

use clap::Args;
use peaks_core::async_string::{AsyncStringProducer, DEFAULT_DELAY};

#[derive(Debug, Args)]
pub struct AsyncStringArgs {
    /// Worker delay before completion
    #[arg(long, default_value_t = DEFAULT_DELAY.as_millis() as u64)]
    pub delay_ms: u64,

    /// How long to wait for the completion before giving up
    #[arg(long, default_value_t = 10_000)]
    pub timeout_ms: u64,
}

/// Execute async-string command
pub fn execute(args: AsyncStringArgs) -> Result<(), Box<dyn std::error::Error>> {
    let rx = AsyncStringProducer::default()
        .with_delay(Duration::from_millis(args.delay_ms))
        .produce_string_channel();

    tracing::debug!(timeout_ms = args.timeout_ms, "waiting for completion");
    let value = rx.recv_timeout(Duration::from_millis(args.timeout_ms))?;
    println!("{}", value);
    Ok(())
}
