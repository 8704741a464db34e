//! Scene placement of newly loaded rasters

use crate::coordinate::{AffineGeoTransform, GeoPoint, Point};

/// Decides where a raster's pixel (0,0) corner sits in the shared scene
pub trait ScenePlacement {
    /// Scene origin for a raster being registered
    ///
    /// # Arguments
    /// * `transform` - The raster's geotransform, `None` for plain images
    /// * `anchor` - Geographic point pinned to scene (0,0), fixed by the
    ///   first georeferenced raster of the session
    fn scene_origin(&self, transform: Option<&AffineGeoTransform>, anchor: Option<GeoPoint>) -> Point;
}

/// Places georeferenced rasters by their geographic offset from the anchor
///
/// The first georeferenced raster lands at scene (0,0); later ones are
/// shifted by the difference between their top-left corner and the anchor,
/// so every georeferenced raster shares one scene frame measured in
/// geographic units. Plain images sit at the scene origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeographicOffsetPlacement;

impl ScenePlacement for GeographicOffsetPlacement {
    fn scene_origin(&self, transform: Option<&AffineGeoTransform>, anchor: Option<GeoPoint>) -> Point {
        match (transform, anchor) {
            (Some(transform), Some(anchor)) => {
                let origin = transform.origin();
                Point::new(origin.lon - anchor.lon, origin.lat - anchor.lat)
            },
            _ => Point::new(0.0, 0.0),
        }
    }
}
