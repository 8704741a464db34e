//! Resolve a single point in either direction

use clap::ArgMatches;
use log::info;

use crate::api::Workbench;
use crate::commands::command_traits::Command;
use crate::commands::console_view::ConsoleView;
use crate::navigation::{DispatchOutcome, InputEvent, NavError, NavResult};
use crate::utils::coordinate_utils::{parse_geo_point, parse_scene_point};
use crate::utils::format_utils::format_scene_point;
use crate::utils::logger::Logger;

/// Direction of the lookup
enum Query {
    /// Scene point to the status line the pointer would show
    Scene(String),
    /// Geographic coordinate to scene position
    Geographic(String),
}

/// Prints what the status bar would show for a point
pub struct ResolveCommand<'a> {
    input_file: String,
    query: Query,
    logger: &'a Logger,
}

impl<'a> ResolveCommand<'a> {
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> NavResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| NavError::GenericError("Missing session file".to_string()))?
            .clone();

        let query = match (args.get_one::<String>("scene"), args.get_one::<String>("geo")) {
            (Some(text), _) => Query::Scene(text.clone()),
            (None, Some(text)) => Query::Geographic(text.clone()),
            (None, None) => return Err(NavError::GenericError("Nothing to resolve".to_string())),
        };

        Ok(ResolveCommand {
            input_file,
            query,
            logger,
        })
    }
}

impl<'a> Command for ResolveCommand<'a> {
    fn execute(&self) -> NavResult<()> {
        let mut workbench = Workbench::open(&self.input_file)?;

        let line = match &self.query {
            Query::Scene(text) => {
                let scene = parse_scene_point(text)?;
                let mut view = ConsoleView::new(workbench.display().coordinate_format);
                match workbench.dispatch(&mut view, InputEvent::MouseMove(scene))? {
                    DispatchOutcome::Status(status) => status,
                    other => format!("{:?}", other),
                }
            },
            Query::Geographic(text) => {
                let geo = parse_geo_point(text)?;
                match workbench.geographic_to_scene(&geo) {
                    Some(scene) => format!("{} -> scene {}", geo,
                                           format_scene_point(&scene, workbench.display().coordinate_format)),
                    None => return Err(NavError::NoDataLoaded),
                }
            },
        };

        info!("{}", line);
        self.logger.log(&line)?;
        Ok(())
    }
}
