//! Combined extent of everything loaded

use log::debug;

use crate::coordinate::{BoundingBox, GeoPoint, Point};
use crate::raster::{RasterId, RasterRegistry};

/// Scene-space bounds of one non-raster layer
#[derive(Debug, Clone, PartialEq)]
pub struct VectorLayerBounds {
    /// Layer name
    pub name: String,
    /// Bounding rectangle in scene coordinates
    pub bounds: BoundingBox,
}

impl VectorLayerBounds {
    pub fn new(name: &str, bounds: BoundingBox) -> Self {
        VectorLayerBounds { name: name.to_string(), bounds }
    }
}

/// Which frame an [`Extent`] is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtentKind {
    Geographic,
    Scene,
    Empty,
}

/// Bounding extent across the loaded layers
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Extent {
    /// Footprint of the primary raster in its geographic frame
    Geographic {
        /// North-west corner
        top_left: GeoPoint,
        /// South-east corner
        bottom_right: GeoPoint,
        /// Raster the extent was taken from
        raster: RasterId,
    },
    /// Scene-space rectangle
    Scene {
        top_left: Point,
        bottom_right: Point,
    },
    /// Nothing loaded
    Empty,
}

impl Extent {
    pub fn kind(&self) -> ExtentKind {
        match self {
            Extent::Geographic { .. } => ExtentKind::Geographic,
            Extent::Scene { .. } => ExtentKind::Scene,
            Extent::Empty => ExtentKind::Empty,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Extent::Empty)
    }
}

/// Computes extents from the registry and the vector layers
pub struct ExtentAggregator<'a> {
    registry: &'a RasterRegistry,
    vectors: &'a [VectorLayerBounds],
}

impl<'a> ExtentAggregator<'a> {
    pub fn new(registry: &'a RasterRegistry, vectors: &'a [VectorLayerBounds]) -> Self {
        ExtentAggregator { registry, vectors }
    }

    /// Extent to report, first applicable rule wins:
    ///
    /// 1. primary raster with an invertible transform: its geographic corners
    /// 2. exactly one plain image and nothing else: `(0,0)`-`(width,height)`
    /// 3. any other layers: union of their scene rectangles
    /// 4. otherwise [`Extent::Empty`]
    pub fn compute_extent(&self) -> Extent {
        if let Some(primary) = self.registry.primary() {
            if let (Some(transform), Some(bounds)) = (primary.transform(), primary.geographic_bounds()) {
                if transform.is_invertible() {
                    debug!("Extent taken from primary {}", primary.id());
                    return Extent::Geographic {
                        top_left: GeoPoint::new(bounds.min_x, bounds.max_y),
                        bottom_right: GeoPoint::new(bounds.max_x, bounds.min_y),
                        raster: primary.id(),
                    };
                }
            }
        }

        let entries = self.registry.entries();
        if self.vectors.is_empty() && entries.len() == 1 && !entries[0].has_transform() {
            let image = &entries[0];
            return Extent::Scene {
                top_left: Point::new(0.0, 0.0),
                bottom_right: Point::new(image.pixel_width() as f64, image.pixel_height() as f64),
            };
        }

        match self.scene_bounds() {
            Some(bounds) => Extent::Scene {
                top_left: Point::new(bounds.min_x, bounds.min_y),
                bottom_right: Point::new(bounds.max_x, bounds.max_y),
            },
            None => Extent::Empty,
        }
    }

    /// Union of every raster's and vector layer's scene rectangle
    pub fn scene_bounds(&self) -> Option<BoundingBox> {
        let rasters = self.registry.combined_bounds();
        let vectors = BoundingBox::union_all(self.vectors.iter().map(|v| v.bounds));
        match (rasters, vectors) {
            (Some(r), Some(v)) => Some(r.union(&v)),
            (r, v) => r.or(v),
        }
    }
}
