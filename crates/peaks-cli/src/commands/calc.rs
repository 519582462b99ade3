//! Calculator command
//!
//! Usage: peaks calc <OP>... [--quiet] [--repeat N]

use clap::Args;
use peaks_core::calculator::{Calculator, Logger, Operation};

#[derive(Debug, Args)]
pub struct CalcArgs {
    /// Operations in `add:N` or `+N` form, applied in order
    #[arg(required = true)]
    pub operations: Vec<String>,

    /// Run the queue this many times (totals compound)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub repeat: u32,

    /// Print only the final total
    #[arg(long)]
    pub quiet: bool,
}

/// Prints each calculator message on its own line
struct StdoutLogger {
    quiet: bool,
}

impl Logger for StdoutLogger {
    fn emit(&mut self, message: &str) {
        if !self.quiet {
            println!("{}", message);
        }
    }
}

/// Execute calc command
pub fn execute(args: CalcArgs) -> Result<(), Box<dyn std::error::Error>> {
    let operations = args
        .operations
        .iter()
        .map(|token| token.parse::<Operation>())
        .collect::<Result<Vec<_>, _>>()?;

    let mut calc = Calculator::new(StdoutLogger { quiet: args.quiet });
    for operation in operations {
        calc.enqueue(operation);
    }

    let mut total = 0;
    for _ in 0..args.repeat {
        total = calc.execute();
    }

    if args.quiet {
        println!("{}", total);
    }
    Ok(())
}
