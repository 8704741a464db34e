pub mod coordinate;
pub mod raster;
pub mod navigation;
pub mod gazetteer;
pub mod session;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::Workbench;

pub use coordinate::{AffineGeoTransform, BoundingBox, CoordinateSystem, GeoPoint, Point};
pub use raster::{RasterDescriptor, RasterEntry, RasterId, RasterRegistry};
pub use navigation::{CoordinateResolver, Extent, ExtentAggregator, LocationNavigator, NavError, NavResult, SceneView};
pub use gazetteer::{City, Gazetteer};
pub use session::{Session, SessionConfig};
