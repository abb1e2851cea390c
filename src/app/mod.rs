pub mod console;
pub mod context;
pub mod interrupt;
pub mod session;
#[cfg(test)]
pub(crate) mod testing;

use anyhow::Result;

use crate::{
    cli::Cli,
    core::{UserStore, git::GitCli},
};

pub use self::console::{Console, TerminalConsole};
pub use context::AppContext;
pub use session::Session;

/// Entry point: locate the repository, load the store, and run the menu.
///
/// # Errors
/// Returns an error if the repository cannot be located, the store file
/// cannot be read, or the terminal becomes unusable.
pub fn run(cli: &Cli) -> Result<()> {
    interrupt::install_interrupt_handler()?;

    let ctx = AppContext::from_cwd()?;
    let store = UserStore::load(&ctx.store_path)?;
    let backend = GitCli::new(&ctx.git_dir);

    let mut session = Session::new(TerminalConsole::new(), backend, store);
    session.run()
}
