use clap::{ArgAction, Parser};

/// git-user-switch command-line interface
#[derive(Parser, Debug, Clone)]
#[command(
    name = "git-user-switch",
    version,
    about = "Keep several Git identities for one repository and switch between them",
    long_about = "Opens an interactive menu to add, remove, and switch between saved \
                  identities. Identities are stored in .git/git-users.json and applied \
                  with `git config --local user.name/user.email`."
)]
pub struct Cli {
    /// Increase diagnostic verbosity (-v, -vv, -vvv). `RUST_LOG` overrides this.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
