//! Loaded raster bookkeeping
//!
//! Rasters arrive from the file-loading side as [`RasterDescriptor`]s and are
//! kept in a [`RasterRegistry`] until they are unloaded.

mod entry;
mod placement;
mod registry;

#[cfg(test)]
mod tests;

pub use self::entry::{RasterDescriptor, RasterEntry, RasterId};
pub use self::placement::{GeographicOffsetPlacement, ScenePlacement};
pub use self::registry::{Containment, RasterRegistry};
