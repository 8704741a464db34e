//! CLI command implementations
//!
//! Each command loads a session file and drives the library the way the
//! interactive canvas would.

pub mod command_traits;
pub mod console_view;
pub mod extent_command;
pub mod jump_command;
pub mod resolve_command;

pub use command_traits::{Command, CommandFactory};
pub use console_view::ConsoleView;
pub use extent_command::ExtentCommand;
pub use jump_command::JumpCommand;
pub use resolve_command::ResolveCommand;

use clap::ArgMatches;
use crate::utils::logger::Logger;
use crate::navigation::NavResult;

/// Factory for creating command instances based on CLI arguments
pub struct GeocanvasCommandFactory;

impl GeocanvasCommandFactory {
    pub fn new() -> Self {
        GeocanvasCommandFactory
    }
}

impl Default for GeocanvasCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for GeocanvasCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> NavResult<Box<dyn Command + 'a>> {
        if args.get_one::<String>("jump").is_some() || args.get_one::<String>("locate").is_some() {
            Ok(Box::new(JumpCommand::new(args, logger)?))
        } else if args.get_one::<String>("scene").is_some() || args.get_one::<String>("geo").is_some() {
            Ok(Box::new(ResolveCommand::new(args, logger)?))
        } else {
            // Default to the session summary
            Ok(Box::new(ExtentCommand::new(args, logger)?))
        }
    }
}
