use anyhow::Result;
use clap::Parser;
use git_user_switch::cli::Cli;
use git_user_switch::logging::init::init_tracing;
use git_user_switch::run;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;
    run(&cli)
}
