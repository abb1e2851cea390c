use anyhow::Result;
use thiserror::Error;

use crate::{app::console::Console, app::session::Session, core::git::ConfigBackend};

pub mod add;
pub mod change;
pub mod exit;
pub mod remove;

/// Result of one menu action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Cancelled,
    Rejected(Rejection),
    /// End the session (menu choice or exhausted input).
    Exit,
}

/// User input that aborts the current action. The message is shown verbatim.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum Rejection {
    #[error("Invalid option. Please choose 1-4.")]
    InvalidOption,
    #[error("Add a user first!")]
    NoUsers,
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Invalid choice")]
    InvalidChoice,
    #[error("Invalid input")]
    InvalidInput,
}

/// Unified interface implemented by each menu action.
pub trait Command {
    /// Execute the action against the session.
    ///
    /// # Errors
    /// Returns an error for faults that are not user-input problems
    /// (store or terminal I/O, git write failures).
    fn run<C: Console, B: ConfigBackend>(&self, session: &mut Session<C, B>) -> Result<Outcome>;
}

/// Top-level menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Change,
    Add,
    Remove,
    Exit,
}

impl MenuChoice {
    pub const MENU: [(&'static str, &'static str); 4] = [
        ("1", "Change to another user"),
        ("2", "Add a new user"),
        ("3", "Remove a user"),
        ("4", "Exit"),
    ];

    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Change),
            "2" => Some(Self::Add),
            "3" => Some(Self::Remove),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Central dispatcher: routes a menu choice to its handler.
///
/// # Errors
/// Returns an error if the invoked action fails.
pub fn dispatch<C: Console, B: ConfigBackend>(
    choice: MenuChoice,
    session: &mut Session<C, B>,
) -> Result<Outcome> {
    match choice {
        MenuChoice::Change => change::ChangeCommand.run(session),
        MenuChoice::Add => add::AddCommand.run(session),
        MenuChoice::Remove => remove::RemoveCommand.run(session),
        MenuChoice::Exit => exit::ExitCommand.run(session),
    }
}

/// Interpret a 1-based selection against `count` listed entries.
///
/// `Ok(None)` means the user cancelled with `0`.
///
/// # Errors
/// [`Rejection::InvalidInput`] for non-numeric text, [`Rejection::InvalidChoice`]
/// for numbers outside the listing.
pub fn parse_choice(input: &str, count: usize) -> Result<Option<usize>, Rejection> {
    let input = input.trim();
    let number: i64 = match input.parse() {
        Ok(number) => number,
        // Too many digits for i64 is still a number, just not a listed one.
        Err(_) if is_integer_literal(input) => return Err(Rejection::InvalidChoice),
        Err(_) => return Err(Rejection::InvalidInput),
    };
    if number == 0 {
        return Ok(None);
    }
    usize::try_from(number)
        .ok()
        .filter(|n| (1..=count).contains(n))
        .map(|n| Some(n - 1))
        .ok_or(Rejection::InvalidChoice)
}

fn is_integer_literal(input: &str) -> bool {
    let digits = input.strip_prefix(['+', '-']).unwrap_or(input);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// `y`/`Y` (surrounding whitespace ignored) is yes; anything else is no.
#[must_use]
pub fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Outcome of asking the user to pick one listed entry.
pub(crate) enum Selection {
    Picked(usize),
    Done(Outcome),
}

/// List saved users and read a numeric pick.
pub(crate) fn select_user<C: Console, B: ConfigBackend>(
    session: &mut Session<C, B>,
    header: &str,
    on_empty: Outcome,
) -> Result<Selection> {
    if !session.list_users()? {
        return Ok(Selection::Done(on_empty));
    }

    session.console.say(header)?;
    let Some(input) = session.console.prompt("Choice: ")? else {
        return Ok(Selection::Done(Outcome::Exit));
    };

    Ok(match parse_choice(&input, session.store.len()) {
        Ok(Some(index)) => Selection::Picked(index),
        Ok(None) => Selection::Done(Outcome::Cancelled),
        Err(rejection) => Selection::Done(Outcome::Rejected(rejection)),
    })
}
