//! Peaks CLI
//!
//! Command-line front end for poking at the core units by hand

use clap::{Parser, Subcommand};
use peaks_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "peaks")]
#[command(about = "Peaks - calculator, login dialog and validator playground", long_about = None)]
struct Cli {
    /// Emit diagnostics as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Queue operations and run them through the calculator
    Calc(commands::calc::CalcArgs),
    /// Check a password against the strength rule
    Password(commands::password::PasswordArgs),
    /// Decide whether the login dialog should be shown
    Dialog(commands::dialog::DialogArgs),
    /// Wait for the background string producer
    AsyncString(commands::async_string::AsyncStringArgs),
    /// Integer division (truncates toward zero)
    Divide(commands::divide::DivideArgs),
}

fn main() {
    let cli = Cli::parse();
    init(if cli.json {
        Profile::Production
    } else {
        Profile::Development
    });

    let result = match cli.command {
        Commands::Calc(args) => commands::calc::execute(args),
        Commands::Password(args) => commands::password::execute(args),
        Commands::Dialog(args) => commands::dialog::execute(args),
        Commands::AsyncString(args) => commands::async_string::execute(args),
        Commands::Divide(args) => commands::divide::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
