//! Bidirectional scene <-> geographic conversion
//!
//! The resolver hides how many georeferenced rasters are loaded. Callers get
//! either a geographic coordinate or an explicit "not geographic" answer and
//! never see NaN.

use log::{debug, trace};

use crate::coordinate::{GeoPoint, Point};
use crate::navigation::errors::NavResult;
use crate::raster::{RasterEntry, RasterId, RasterRegistry};

/// Scene units per degree used by [`FallbackPolicy::LinearScale`] by default
pub const DEFAULT_UNITS_PER_DEGREE: f64 = 1000.0;

/// How `geographic_to_scene` places points no registered raster can resolve
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FallbackPolicy {
    /// Offset from the scene anchor, matching the geographic-offset placement
    AnchorOffset,
    /// Linear interpolation from the south-west corner of the combined
    /// geographic bounds, `units_per_degree` scene units per degree. Scene y
    /// grows northward, as it does under the anchor offset.
    LinearScale {
        units_per_degree: f64,
    },
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        FallbackPolicy::AnchorOffset
    }
}

/// Answer of a scene-to-geographic lookup
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneLookup {
    /// The point resolved through a raster's geotransform
    Geographic {
        /// Geographic coordinate
        point: GeoPoint,
        /// Raster whose transform was used
        raster: RasterId,
        /// Clamped pixel coordinate that was forward-transformed
        pixel: Point,
    },
    /// No raster carries georeferencing; show scene coordinates instead
    NotGeographic,
}

impl SceneLookup {
    pub fn is_geographic(&self) -> bool {
        matches!(self, SceneLookup::Geographic { .. })
    }

    /// The geographic point, if any
    pub fn geo_point(&self) -> Option<GeoPoint> {
        match self {
            SceneLookup::Geographic { point, .. } => Some(*point),
            SceneLookup::NotGeographic => None,
        }
    }
}

/// Converts between scene and geographic coordinates using the registry
pub struct CoordinateResolver<'a> {
    registry: &'a RasterRegistry,
    fallback: FallbackPolicy,
}

impl<'a> CoordinateResolver<'a> {
    /// Create a resolver over the given registry
    pub fn new(registry: &'a RasterRegistry, fallback: FallbackPolicy) -> Self {
        CoordinateResolver { registry, fallback }
    }

    /// Geographic coordinate under a scene point
    ///
    /// The first raster containing the point wins. Outside every raster the
    /// primary raster's transform is used. Either way the pixel is clamped to
    /// the image so edge positions still resolve to in-image coordinates.
    ///
    /// # Errors
    /// `SingularTransform` if the primary raster is needed and its transform
    /// cannot be inverted.
    pub fn scene_to_geographic(&self, scene: &Point) -> NavResult<SceneLookup> {
        if let Some(hit) = self.registry.locate(scene) {
            trace!("Scene {} inside {}", scene, hit.entry.id());
            return Ok(Self::clamped_lookup(hit.entry, &hit.pixel));
        }

        match self.registry.primary() {
            Some(primary) if primary.has_transform() => {
                let pixel = primary.scene_to_pixel(scene)?;
                trace!("Scene {} outside all rasters, using primary {}", scene, primary.id());
                Ok(Self::clamped_lookup(primary, &pixel))
            },
            _ => Ok(SceneLookup::NotGeographic),
        }
    }

    fn clamped_lookup(entry: &RasterEntry, pixel: &Point) -> SceneLookup {
        let clamped = entry.clamp_pixel(pixel);
        match entry.pixel_to_geographic(&clamped) {
            Some(point) => SceneLookup::Geographic { point, raster: entry.id(), pixel: clamped },
            None => SceneLookup::NotGeographic,
        }
    }

    /// Scene position of a geographic coordinate
    ///
    /// Tries the primary raster first, then any raster whose pixel grid
    /// contains the point, then the configured fallback. Returns `None` when
    /// nothing georeferenced is loaded.
    pub fn geographic_to_scene(&self, geo: &GeoPoint) -> Option<Point> {
        if let Some(primary) = self.registry.primary() {
            if let Some(transform) = primary.transform() {
                match transform.inverse(geo.lon, geo.lat) {
                    Ok(pixel) => return Some(primary.pixel_to_scene(&pixel)),
                    Err(e) => debug!("Primary {} cannot invert: {}", primary.id(), e),
                }
            }
        }

        for entry in self.registry.georeferenced() {
            let Some(transform) = entry.transform() else { continue };
            if let Ok(pixel) = transform.inverse(geo.lon, geo.lat) {
                if entry.contains_pixel(&pixel) {
                    debug!("{} resolved by {}", geo, entry.id());
                    return Some(entry.pixel_to_scene(&pixel));
                }
            }
        }

        self.fallback_scene(geo)
    }

    fn fallback_scene(&self, geo: &GeoPoint) -> Option<Point> {
        let bounds = self.registry.geographic_bounds()?;
        let scene = match self.fallback {
            FallbackPolicy::AnchorOffset => {
                let anchor = self.registry.anchor()?;
                Point::new(geo.lon - anchor.lon, geo.lat - anchor.lat)
            },
            FallbackPolicy::LinearScale { units_per_degree } => Point::new(
                (geo.lon - bounds.min_x) * units_per_degree,
                (geo.lat - bounds.min_y) * units_per_degree,
            ),
        };
        debug!("{} outside every raster; fallback {:?} placed it at {}", geo, self.fallback, scene);
        Some(scene)
    }
}
