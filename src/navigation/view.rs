//! Rendering surface driven by navigation

use crate::coordinate::{BoundingBox, Point};
use super::marker::{LocationMarker, MarkerId};

/// The canvas the navigator steers
///
/// The core never draws; it tells the view where to look and which marker
/// to show or drop.
pub trait SceneView {
    /// Center the view on a scene point, optionally at a zoom level
    fn center_on(&mut self, point: Point, zoom: Option<f64>);

    /// Fit the view to a scene rectangle
    fn fit_rect(&mut self, rect: BoundingBox);

    /// Draw a marker; in/out-of-bounds markers should look different
    fn draw_marker(&mut self, marker: &LocationMarker);

    /// Remove a marker drawn earlier
    fn remove_marker(&mut self, id: MarkerId);
}
