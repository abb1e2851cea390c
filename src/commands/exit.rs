use anyhow::Result;

use super::{Command, Outcome};
use crate::{app::console::Console, app::session::Session, core::git::ConfigBackend};

pub struct ExitCommand;

impl Command for ExitCommand {
    fn run<C: Console, B: ConfigBackend>(&self, _session: &mut Session<C, B>) -> Result<Outcome> {
        Ok(Outcome::Exit)
    }
}
