//! Scene view for the command line
//!
//! There is no canvas to steer from a terminal, so every request the
//! navigator makes is logged instead.

use log::info;

use crate::coordinate::{BoundingBox, Point};
use crate::navigation::{LocationMarker, MarkerId, SceneView};
use crate::utils::format_utils::{format_geo_point, format_scene_point, CoordinateFormat};

/// Logs view requests
pub struct ConsoleView {
    format: CoordinateFormat,
}

impl ConsoleView {
    pub fn new(format: CoordinateFormat) -> Self {
        ConsoleView { format }
    }
}

impl SceneView for ConsoleView {
    fn center_on(&mut self, point: Point, zoom: Option<f64>) {
        match zoom {
            Some(zoom) => info!("View centered on {} at zoom {}", format_scene_point(&point, self.format), zoom),
            None => info!("View centered on {}", format_scene_point(&point, self.format)),
        }
    }

    fn fit_rect(&mut self, rect: BoundingBox) {
        info!("View fitted to {} .. {}",
              format_scene_point(&Point::new(rect.min_x, rect.min_y), self.format),
              format_scene_point(&Point::new(rect.max_x, rect.max_y), self.format));
    }

    fn draw_marker(&mut self, marker: &LocationMarker) {
        let style = if marker.in_bounds { "inside data" } else { "outside data" };
        info!("Marker {} at {} ({})", marker.id.0, format_geo_point(&marker.geo_point, self.format), style);
    }

    fn remove_marker(&mut self, id: MarkerId) {
        info!("Marker {} removed", id.0);
    }
}
