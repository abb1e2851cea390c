use anyhow::Result;

use super::{Command, Outcome, Rejection, Selection, select_user};
use crate::{app::console::Console, app::session::Session, core::git::ConfigBackend};

/// Apply a saved identity to the repository's local config.
pub struct ChangeCommand;

impl Command for ChangeCommand {
    fn run<C: Console, B: ConfigBackend>(&self, session: &mut Session<C, B>) -> Result<Outcome> {
        let index = match select_user(
            session,
            "\nSelect a user (number) or 0 to cancel:",
            Outcome::Rejected(Rejection::NoUsers),
        )? {
            Selection::Picked(index) => index,
            Selection::Done(outcome) => return Ok(outcome),
        };

        let Some((name, record)) = session.store.get_index(index) else {
            return Ok(Outcome::Rejected(Rejection::InvalidChoice));
        };
        let (name, email) = (name.to_string(), record.email.clone());

        session.switch_to(&name, &email)?;
        Ok(Outcome::Completed)
    }
}
