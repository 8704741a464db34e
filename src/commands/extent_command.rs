//! Session summary and extent command

use clap::ArgMatches;
use log::info;

use crate::api::Workbench;
use crate::commands::command_traits::Command;
use crate::commands::console_view::ConsoleView;
use crate::navigation::{InputEvent, NavError, NavResult};
use crate::utils::logger::Logger;

/// Lists the loaded layers and reports their combined extent
pub struct ExtentCommand<'a> {
    /// Path to the session file
    input_file: String,
    verbose: bool,
    logger: &'a Logger,
}

impl<'a> ExtentCommand<'a> {
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> NavResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| NavError::GenericError("Missing session file".to_string()))?
            .clone();

        Ok(ExtentCommand {
            input_file,
            verbose: args.get_flag("verbose"),
            logger,
        })
    }
}

impl<'a> Command for ExtentCommand<'a> {
    fn execute(&self) -> NavResult<()> {
        let mut workbench = Workbench::open(&self.input_file)?;
        let session = workbench.session();

        info!("Session {}: {} raster(s), {} vector layer(s)",
              self.input_file, session.registry().len(), session.vectors().len());
        self.logger.print_raster_table(session.registry().entries())?;

        if self.verbose {
            for entry in session.registry().georeferenced() {
                if let Some(bounds) = entry.geographic_bounds() {
                    info!("  {} covers {:?}", entry.name(), bounds);
                }
            }
            for vector in session.vectors() {
                info!("  {} (vector) covers {:?}", vector.name, vector.bounds);
            }
        }

        info!("{}", workbench.extent_text());

        let mut view = ConsoleView::new(workbench.display().coordinate_format);
        match workbench.dispatch(&mut view, InputEvent::ZoomToExtent) {
            Ok(_) | Err(NavError::NoDataLoaded) => Ok(()),
            Err(e) => Err(e),
        }
    }
}
