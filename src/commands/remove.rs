use anyhow::Result;
use tracing::info;

use super::{Command, Outcome, Rejection, Selection, is_yes, select_user};
use crate::{app::console::Console, app::session::Session, core::git::ConfigBackend};

/// Delete a saved identity after confirmation.
pub struct RemoveCommand;

impl Command for RemoveCommand {
    fn run<C: Console, B: ConfigBackend>(&self, session: &mut Session<C, B>) -> Result<Outcome> {
        let index = match select_user(
            session,
            "\nSelect a user to remove (number) or 0 to cancel:",
            Outcome::Cancelled,
        )? {
            Selection::Picked(index) => index,
            Selection::Done(outcome) => return Ok(outcome),
        };

        let Some(name) = session
            .store
            .get_index(index)
            .map(|(name, _)| name.to_string())
        else {
            return Ok(Outcome::Rejected(Rejection::InvalidChoice));
        };

        let Some(answer) = session.console.prompt(&format!("Remove {name}? (y/n): "))? else {
            return Ok(Outcome::Exit);
        };
        if !is_yes(&answer) {
            return Ok(Outcome::Cancelled);
        }

        session.store.remove(&name);
        session.store.save()?;
        info!(user = %name, "removed user");

        session
            .console
            .say(&console::style(format!("✓ Removed user: {name}")).green().to_string())?;
        Ok(Outcome::Completed)
    }
}
