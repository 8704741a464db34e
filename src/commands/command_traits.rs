//! Command pattern interfaces
//!
//! Each CLI operation is a `Command`; a `CommandFactory` picks one from the
//! parsed arguments.

use crate::utils::logger::Logger;
use crate::navigation::NavResult;

/// Represents an executable command in the application
pub trait Command {
    /// Execute the command
    fn execute(&self) -> NavResult<()>;
}

/// Factory for creating commands from CLI arguments
pub trait CommandFactory<'a> {
    /// Create the command the arguments ask for
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    fn create_command(&self, args: &clap::ArgMatches, logger: &'a Logger) -> NavResult<Box<dyn Command + 'a>>;
}
