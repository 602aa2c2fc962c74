//! Command traits for the ahkt CLI.
//!
//! This module defines the standard command traits that all commands
//! implement to ensure consistency across the application.

use std::io::Write;

use crate::error::Result;

/// Standard command trait that all ahkt commands implement.
///
/// # Type Parameters
/// * `Args` - The arguments type for this command
/// * `Output` - The output type returned by this command
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance with the given arguments.
    fn new(args: Self::Args) -> Self;

    /// Execute the command, producing its output without printing it.
    fn execute(&self) -> Result<Self::Output>;

    /// Print `output` to `out` in the command's output format.
    fn render<W: Write>(&self, output: &Self::Output, out: &mut W) -> Result<()>;

    /// Get the command name.
    fn name() -> &'static str;
}

/// Trait for providing a one-line command description.
pub trait CommandDescription {
    /// Get a short description of the command.
    fn description() -> &'static str;
}

/// Execute `command` and print its output to stdout.
pub fn run_to_stdout<C: Command + CommandDescription>(command: &C) -> Result<()> {
    tracing::debug!(command = C::name(), "{}", C::description());
    let output = command.execute()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    command.render(&output, &mut out)?;
    out.flush()?;
    tracing::debug!(command = C::name(), "command finished");
    Ok(())
}
