//! Jump to a coordinate or a named city

use std::time::Instant;

use clap::ArgMatches;
use log::{info, warn};

use crate::api::Workbench;
use crate::commands::command_traits::Command;
use crate::commands::console_view::ConsoleView;
use crate::gazetteer::{Gazetteer, DEFAULT_SUGGESTION_LIMIT};
use crate::navigation::{JumpResult, NavError, NavResult};
use crate::utils::coordinate_utils::parse_geo_point;
use crate::utils::format_utils::{format_geo_point, format_scene_point};
use crate::utils::logger::Logger;

/// What to jump to
enum JumpTarget {
    /// Typed "lon,lat" text
    Coordinate(String),
    /// City name looked up in a gazetteer file
    City { name: String, cities: String },
}

/// Resolves a jump the way the location bar would
pub struct JumpCommand<'a> {
    input_file: String,
    target: JumpTarget,
    logger: &'a Logger,
}

impl<'a> JumpCommand<'a> {
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> NavResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| NavError::GenericError("Missing session file".to_string()))?
            .clone();

        let target = if let Some(text) = args.get_one::<String>("jump") {
            JumpTarget::Coordinate(text.clone())
        } else if let Some(name) = args.get_one::<String>("locate") {
            let cities = args.get_one::<String>("cities")
                .ok_or_else(|| NavError::GenericError("--locate needs a --cities file".to_string()))?
                .clone();
            JumpTarget::City { name: name.clone(), cities }
        } else {
            return Err(NavError::GenericError("Nothing to jump to".to_string()));
        };

        Ok(JumpCommand {
            input_file,
            target,
            logger,
        })
    }

    fn report(&self, workbench: &Workbench, result: &JumpResult) -> NavResult<()> {
        let format = workbench.display().coordinate_format;
        let summary = format!(
            "{} -> scene {}{}",
            format_geo_point(&result.geo_point, format),
            format_scene_point(&result.scene_point, format),
            if result.in_bounds { "" } else { " (outside loaded data)" }
        );
        info!("{}", summary);
        self.logger.log(&summary)?;
        Ok(())
    }
}

impl<'a> Command for JumpCommand<'a> {
    fn execute(&self) -> NavResult<()> {
        let mut workbench = Workbench::open(&self.input_file)?;
        let mut view = ConsoleView::new(workbench.display().coordinate_format);
        let now = Instant::now();

        let result = match &self.target {
            JumpTarget::Coordinate(text) => {
                let target = parse_geo_point(text)?;
                workbench.jump_to(&mut view, target.lon, target.lat, now)?
            },
            JumpTarget::City { name, cities } => {
                let mut gazetteer = Gazetteer::new();
                gazetteer.load_file(cities)?;
                match workbench.locate_city(&gazetteer, name, &mut view, now) {
                    Ok(result) => result,
                    Err(e @ NavError::GazetteerError(_)) => {
                        let suggestions = gazetteer.suggest(name, DEFAULT_SUGGESTION_LIMIT);
                        if !suggestions.is_empty() {
                            warn!("Did you mean: {}", suggestions.join("; "));
                        }
                        return Err(e);
                    },
                    Err(e) => return Err(e),
                }
            },
        };

        self.report(&workbench, &result)
    }
}
