//! Password command
//!
//! Usage: peaks password <PASSWORD> [--min-length N] [--min-digits N]

use clap::Args;
use peaks_core::password::PasswordPolicy;
use peaks_core_types::Sensitive;

#[derive(Debug, Args)]
pub struct PasswordArgs {
    /// Password to check
    pub password: String,

    #[arg(long, default_value_t = PasswordPolicy::default().min_length)]
    pub min_length: usize,

    #[arg(long, default_value_t = PasswordPolicy::default().min_digits)]
    pub min_digits: usize,
}

/// Execute password command; exits non-zero when the password is too weak
pub fn execute(args: PasswordArgs) -> Result<(), Box<dyn std::error::Error>> {
    let policy = PasswordPolicy {
        min_length: args.min_length,
        min_digits: args.min_digits,
    };
    let password = Sensitive::new(args.password);

    if policy.validate_sensitive(&password) {
        println!("valid");
        Ok(())
    } else {
        Err(format!(
            "password needs at least {} chars including {} digits",
            policy.min_length, policy.min_digits
        )
        .into())
    }
}
