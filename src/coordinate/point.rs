//! Point structures for scene and geographic coordinates

use std::fmt;

/// A point in the shared 2D scene space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Create a new scene point
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Component-wise sum
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Point::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A point in a raster's native geographic frame
///
/// `lon` is the geotransform's X axis and `lat` its Y axis. For projected
/// rasters these are easting/northing; the names follow the common case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Longitude (or easting)
    pub lon: f64,
    /// Latitude (or northing)
    pub lat: f64,
}

impl GeoPoint {
    /// Create a new geographic point
    pub fn new(lon: f64, lat: f64) -> Self {
        GeoPoint { lon, lat }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(lon {}, lat {})", self.lon, self.lat)
    }
}
