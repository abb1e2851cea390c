use anyhow::Result;
use tracing::info;

use super::{Command, Outcome, Rejection, is_yes};
use crate::{
    app::console::Console,
    app::session::Session,
    core::{UserRecord, git::ConfigBackend},
};

/// Prompt for a new identity, save it, and optionally switch to it.
///
/// An existing entry with the same name is overwritten.
pub struct AddCommand;

impl Command for AddCommand {
    fn run<C: Console, B: ConfigBackend>(&self, session: &mut Session<C, B>) -> Result<Outcome> {
        session.console.say("\n➕ Add new user")?;

        let Some(name) = session.console.prompt("Name (e.g., 'John Doe'): ")? else {
            return Ok(Outcome::Exit);
        };
        let name = name.trim().to_string();
        if name.is_empty() {
            return Ok(Outcome::Rejected(Rejection::EmptyName));
        }

        let Some(email) = session.console.prompt("Email: ")? else {
            return Ok(Outcome::Exit);
        };
        let email = email.trim().to_string();
        if !email.contains('@') {
            return Ok(Outcome::Rejected(Rejection::InvalidEmail));
        }

        session
            .console
            .say("\nNote: Password is optional and only used for remote operations")?;
        let Some(password) = session
            .console
            .prompt_hidden("Password (press Enter to skip): ")?
        else {
            return Ok(Outcome::Exit);
        };
        let password = Some(password.trim().to_string()).filter(|p| !p.is_empty());

        let replaced = session
            .store
            .insert(name.clone(), UserRecord::new(email.clone(), password));
        session.store.save()?;
        info!(user = %name, replaced = replaced.is_some(), "saved user");

        session.console.say(
            &console::style(format!("\n✓ Added user: {name} <{email}>"))
                .green()
                .to_string(),
        )?;

        let Some(answer) = session.console.prompt("Switch to this user now? (y/n): ")? else {
            return Ok(Outcome::Exit);
        };
        if is_yes(&answer) {
            session.switch_to(&name, &email)?;
        }

        Ok(Outcome::Completed)
    }
}
