//! Coordinate handling for georeferenced layers
//!
//! This module provides the point and rectangle types shared by every layer,
//! the per-raster affine geotransform, and display-only CRS labels.

mod bbox;
mod point;
mod transform;
mod crs;

#[cfg(test)]
mod tests;

// Re-export key types
pub use self::bbox::BoundingBox;
pub use self::point::{GeoPoint, Point};
pub use self::transform::{AffineGeoTransform, SINGULARITY_EPSILON};
pub use self::crs::CoordinateSystem;
