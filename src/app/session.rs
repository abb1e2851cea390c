use anyhow::Result;
use console::style;
use tracing::{info, warn};

use super::console::Console;
use crate::{
    commands::{self, MenuChoice, Outcome, Rejection},
    core::{
        UserStore,
        git::{self, ConfigBackend},
    },
};

pub const FAREWELL: &str = "\n👋 Goodbye!";

/// The interactive menu loop and the state it owns.
pub struct Session<C, B> {
    pub(crate) console: C,
    pub(crate) backend: B,
    pub(crate) store: UserStore,
}

impl<C: Console, B: ConfigBackend> Session<C, B> {
    pub const fn new(console: C, backend: B, store: UserStore) -> Self {
        Self {
            console,
            backend,
            store,
        }
    }

    pub const fn store(&self) -> &UserStore {
        &self.store
    }

    pub const fn console(&self) -> &C {
        &self.console
    }

    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Run the menu until the user exits or input ends.
    ///
    /// Faults inside a single action are reported and the loop continues.
    ///
    /// # Errors
    /// Returns an error only if the console itself cannot be written to.
    pub fn run(&mut self) -> Result<()> {
        let rule = "=".repeat(50);
        self.console.say(&format!("\n{rule}"))?;
        self.console
            .say(&style("🔄 Git User Switcher").bold().to_string())?;
        self.console.say(&rule)?;

        loop {
            match self.step() {
                Ok(Outcome::Exit) => break,
                Ok(Outcome::Rejected(rejection)) => {
                    self.console.say(&rejection.to_string())?;
                }
                Ok(Outcome::Completed | Outcome::Cancelled) => {}
                Err(e) => {
                    warn!(error = %format!("{e:#}"), "menu action failed");
                    self.console
                        .say(&style(format!("Error: {e:#}")).red().to_string())?;
                }
            }
        }

        self.console.say(FAREWELL)
    }

    /// One pass of the loop: show state and menu, read a choice, run it.
    fn step(&mut self) -> Result<Outcome> {
        self.show_current_identity()?;

        self.console.say("\nOptions:")?;
        for (key, label) in MenuChoice::MENU {
            self.console.say(&format!("  {key}. {label}"))?;
        }

        let Some(input) = self.console.prompt("\nSelect option (1-4): ")? else {
            return Ok(Outcome::Exit);
        };

        match MenuChoice::parse(&input) {
            Some(choice) => commands::dispatch(choice, self),
            None => Ok(Outcome::Rejected(Rejection::InvalidOption)),
        }
    }

    pub(crate) fn show_current_identity(&mut self) -> Result<()> {
        let identity = git::current_identity(&self.backend);
        if !identity.is_configured() {
            return self
                .console
                .say("\n⚠️  No Git user configured in this repository");
        }
        let name = identity.name.unwrap_or_default();
        let email = identity.email.unwrap_or_default();
        self.console
            .say(&format!("\n🔧 Current Git user: {name} <{email}>"))
    }

    /// Print the numbered listing. Returns false when there is nothing to list.
    pub(crate) fn list_users(&mut self) -> Result<bool> {
        if self.store.is_empty() {
            self.console.say("\n📭 No users saved yet")?;
            return Ok(false);
        }

        self.console.say("\n👥 Saved users:")?;
        let lines: Vec<String> = self
            .store
            .iter()
            .enumerate()
            .map(|(i, (name, record))| format!("  {}. {name} <{}>", i + 1, record.email))
            .collect();
        for line in &lines {
            self.console.say(line)?;
        }
        Ok(true)
    }

    pub(crate) fn switch_to(&mut self, name: &str, email: &str) -> Result<()> {
        git::set_identity(&self.backend, name, email)?;
        info!(user = %name, "switched identity");
        self.console.say(
            &style(format!("\n✓ Switched to: {name} <{email}>"))
                .green()
                .to_string(),
        )
    }
}
