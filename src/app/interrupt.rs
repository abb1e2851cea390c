use anyhow::Result;

/// Farewell printed when the session is interrupted.
pub const INTERRUPT_FAREWELL: &str = "\n\n👋 Goodbye!";

/// Terminal settings captured at startup so an interrupt mid-prompt
/// (e.g. with echo switched off) leaves the shell usable.
#[cfg(unix)]
pub struct SavedTerminal {
    fd: std::os::fd::OwnedFd,
    termios: nix::sys::termios::Termios,
}

#[cfg(unix)]
impl SavedTerminal {
    /// Snapshot the settings of `fd`. Returns `None` when it is not a terminal.
    pub fn capture<Fd: std::os::fd::AsFd>(fd: Fd) -> Option<Self> {
        let fd = fd.as_fd();
        if !nix::unistd::isatty(fd).unwrap_or(false) {
            return None;
        }
        let termios = nix::sys::termios::tcgetattr(fd).ok()?;
        let fd = fd.try_clone_to_owned().ok()?;
        Some(Self { fd, termios })
    }

    /// Put the captured settings back.
    ///
    /// # Errors
    /// Returns an error if the terminal rejects the settings.
    pub fn restore(&self) -> nix::Result<()> {
        nix::sys::termios::tcsetattr(&self.fd, nix::sys::termios::SetArg::TCSANOW, &self.termios)
    }
}

/// Turn SIGINT into a farewell message and a clean exit with status 0.
///
/// # Errors
/// Returns an error if the signal handler cannot be registered.
#[cfg(unix)]
pub fn install_interrupt_handler() -> Result<()> {
    use anyhow::Context;
    use signal_hook::{consts::SIGINT, iterator::Signals};
    use tracing::{debug, warn};

    let saved = SavedTerminal::capture(std::io::stdin());
    let mut signals = Signals::new([SIGINT]).context("failed to register SIGINT handler")?;
    std::thread::spawn(move || {
        if let Some(sig) = signals.forever().next() {
            debug!(sig, "interrupted");
            if let Some(saved) = &saved
                && let Err(e) = saved.restore()
            {
                warn!(error = %e, "failed to restore terminal settings");
            }
            let _ = console::Term::stdout().write_line(INTERRUPT_FAREWELL);
            std::process::exit(0);
        }
    });
    Ok(())
}

/// Non-Unix targets keep the default interrupt behaviour.
///
/// # Errors
/// Never fails.
#[cfg(not(unix))]
pub fn install_interrupt_handler() -> Result<()> {
    Ok(())
}
