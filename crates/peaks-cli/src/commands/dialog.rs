//! Login dialog command
//!
//! Usage: peaks dialog [--user NAME]

use clap::Args;
use peaks_core::auth::{LoginDialog, SessionAuth};

#[derive(Debug, Args)]
pub struct DialogArgs {
    /// Sign this user in before asking
    #[arg(long)]
    pub user: Option<String>,
}

/// Execute dialog command
pub fn execute(args: DialogArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut auth = SessionAuth::new();
    if let Some(user) = args.user {
        auth.sign_in(user);
    }

    let dialog = LoginDialog::new(&auth);
    if dialog.should_show_login_dialog() {
        println!("show login dialog");
    } else {
        println!("hide login dialog");
    }
    Ok(())
}
