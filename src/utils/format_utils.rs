//! Coordinate and extent formatting for status display
//!
//! These are presentation defaults; the numbers they format are never
//! rounded before reaching this module.

use crate::coordinate::{CoordinateSystem, GeoPoint, Point};
use crate::navigation::errors::{NavError, NavResult};
use crate::navigation::{Extent, SceneLookup};

/// How coordinate values are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoordinateFormat {
    /// Precision scaled to magnitude
    #[default]
    Compact,
    /// Fixed six decimals
    Verbose,
}

impl CoordinateFormat {
    /// Parse a format name ("compact" or "verbose")
    pub fn parse(name: &str) -> NavResult<Self> {
        match name.trim().to_lowercase().as_str() {
            "compact" => Ok(CoordinateFormat::Compact),
            "verbose" => Ok(CoordinateFormat::Verbose),
            other => Err(NavError::ConfigError(format!("Unknown coordinate format: {}", other))),
        }
    }
}

/// Format one coordinate value
///
/// Compact mode uses 1 decimal from 100 upward, 2 from 10 upward and 3
/// below that (by absolute value). Verbose mode always uses 6.
pub fn format_coordinate(value: f64, format: CoordinateFormat) -> String {
    let decimals = match format {
        CoordinateFormat::Verbose => 6,
        CoordinateFormat::Compact => {
            let magnitude = value.abs();
            if magnitude >= 100.0 {
                1
            } else if magnitude >= 10.0 {
                2
            } else {
                3
            }
        },
    };
    format!("{:.*}", decimals, value)
}

/// "lon, lat"
pub fn format_geo_point(point: &GeoPoint, format: CoordinateFormat) -> String {
    format!("{}, {}", format_coordinate(point.lon, format), format_coordinate(point.lat, format))
}

/// "x, y"
pub fn format_scene_point(point: &Point, format: CoordinateFormat) -> String {
    format!("{}, {}", format_coordinate(point.x, format), format_coordinate(point.y, format))
}

/// Status-bar text for an extent
pub fn format_extent(extent: &Extent, format: CoordinateFormat) -> String {
    match extent {
        Extent::Geographic { top_left, bottom_right, .. } => format!(
            "Extent: {} : {}",
            format_geo_point(top_left, format),
            format_geo_point(bottom_right, format)
        ),
        Extent::Scene { top_left, bottom_right } => format!(
            "Extent (scene): {} : {}",
            format_scene_point(top_left, format),
            format_scene_point(bottom_right, format)
        ),
        Extent::Empty => "Extent: no data loaded".to_string(),
    }
}

/// Status-bar text for the coordinate under the cursor
///
/// Falls back to raw scene coordinates when the lookup is not geographic.
pub fn format_pointer_status(
    scene: &Point,
    lookup: &SceneLookup,
    crs: Option<CoordinateSystem>,
    format: CoordinateFormat,
) -> String {
    match lookup.geo_point() {
        Some(geo) => {
            let text = format!("Lon: {}  Lat: {}",
                               format_coordinate(geo.lon, format),
                               format_coordinate(geo.lat, format));
            match crs {
                Some(crs) => format!("{}  [{}]", text, crs.description()),
                None => text,
            }
        },
        None => format!("X: {}  Y: {}",
                        format_coordinate(scene.x, format),
                        format_coordinate(scene.y, format)),
    }
}
