//! Loaded raster entries

use std::fmt;

use crate::coordinate::{AffineGeoTransform, BoundingBox, CoordinateSystem, GeoPoint, Point};
use crate::navigation::errors::NavResult;

/// Stable handle for a registered raster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RasterId(pub u32);

impl fmt::Display for RasterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "raster#{}", self.0)
    }
}

/// What the raster source hands over after a successful load
#[derive(Debug, Clone)]
pub struct RasterDescriptor {
    /// Display name (usually the file name)
    pub name: String,
    /// Width in pixels
    pub pixel_width: u32,
    /// Height in pixels
    pub pixel_height: u32,
    /// Affine geotransform, absent for plain images
    pub transform: Option<AffineGeoTransform>,
    /// CRS label for display
    pub crs: Option<CoordinateSystem>,
}

impl RasterDescriptor {
    /// Describe a georeferenced raster
    pub fn georeferenced(name: &str, pixel_width: u32, pixel_height: u32, transform: AffineGeoTransform) -> Self {
        RasterDescriptor {
            name: name.to_string(),
            pixel_width,
            pixel_height,
            transform: Some(transform),
            crs: None,
        }
    }

    /// Describe a plain image without georeferencing
    pub fn plain(name: &str, pixel_width: u32, pixel_height: u32) -> Self {
        RasterDescriptor {
            name: name.to_string(),
            pixel_width,
            pixel_height,
            transform: None,
            crs: None,
        }
    }

    /// Attach a CRS label
    pub fn with_crs(mut self, crs: CoordinateSystem) -> Self {
        self.crs = Some(crs);
        self
    }
}

/// One loaded raster and its placement in the scene
///
/// Georeferenced entries share the scene with their geotransform's axes: a
/// pixel offset `(dx, dy)` from pixel (0,0) lands at
/// `scene_origin + linear(dx, dy)`. Plain images use pixel units directly.
#[derive(Debug, Clone)]
pub struct RasterEntry {
    pub(crate) id: RasterId,
    pub(crate) name: String,
    pub(crate) pixel_width: u32,
    pub(crate) pixel_height: u32,
    pub(crate) transform: Option<AffineGeoTransform>,
    pub(crate) scene_origin: Point,
    pub(crate) crs: Option<CoordinateSystem>,
}

impl RasterEntry {
    pub fn id(&self) -> RasterId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pixel_width(&self) -> u32 {
        self.pixel_width
    }

    pub fn pixel_height(&self) -> u32 {
        self.pixel_height
    }

    pub fn transform(&self) -> Option<&AffineGeoTransform> {
        self.transform.as_ref()
    }

    /// Scene position of pixel corner (0, 0)
    pub fn scene_origin(&self) -> Point {
        self.scene_origin
    }

    pub fn crs(&self) -> Option<CoordinateSystem> {
        self.crs
    }

    /// Whether the raster carries a geotransform
    pub fn has_transform(&self) -> bool {
        self.transform.is_some()
    }

    /// Check a pixel coordinate against `[0, width) x [0, height)`
    pub fn contains_pixel(&self, pixel: &Point) -> bool {
        pixel.x >= 0.0 && pixel.x < self.pixel_width as f64 &&
            pixel.y >= 0.0 && pixel.y < self.pixel_height as f64
    }

    /// Clamp a pixel coordinate into `[0, width-1] x [0, height-1]`
    pub fn clamp_pixel(&self, pixel: &Point) -> Point {
        let max_x = (self.pixel_width as f64 - 1.0).max(0.0);
        let max_y = (self.pixel_height as f64 - 1.0).max(0.0);
        Point::new(pixel.x.clamp(0.0, max_x), pixel.y.clamp(0.0, max_y))
    }

    /// Map a scene point to this raster's pixel grid
    pub fn scene_to_pixel(&self, scene: &Point) -> NavResult<Point> {
        let dx = scene.x - self.scene_origin.x;
        let dy = scene.y - self.scene_origin.y;
        match &self.transform {
            Some(transform) => {
                let origin = transform.origin();
                transform.inverse(origin.lon + dx, origin.lat + dy)
            },
            None => Ok(Point::new(dx, dy)),
        }
    }

    /// Map a pixel coordinate of this raster into the scene
    pub fn pixel_to_scene(&self, pixel: &Point) -> Point {
        match &self.transform {
            Some(transform) => {
                let delta = transform.linear(pixel.x, pixel.y);
                self.scene_origin.offset(delta.x, delta.y)
            },
            None => self.scene_origin.offset(pixel.x, pixel.y),
        }
    }

    /// Geographic coordinate of a pixel, `None` for plain images
    pub fn pixel_to_geographic(&self, pixel: &Point) -> Option<GeoPoint> {
        self.transform.as_ref().map(|t| t.forward(pixel.x, pixel.y))
    }

    /// Scene-space rectangle covered by the raster
    ///
    /// Built from all four transformed corners so rotated rasters get a box
    /// that encloses their whole footprint.
    pub fn scene_bounds(&self) -> BoundingBox {
        let w = self.pixel_width as f64;
        let h = self.pixel_height as f64;
        let corners = [
            self.pixel_to_scene(&Point::new(0.0, 0.0)),
            self.pixel_to_scene(&Point::new(w, 0.0)),
            self.pixel_to_scene(&Point::new(w, h)),
            self.pixel_to_scene(&Point::new(0.0, h)),
        ];
        // Four points, never empty
        BoundingBox::from_points(&corners)
            .unwrap_or_else(|| BoundingBox::new(self.scene_origin.x, self.scene_origin.y, self.scene_origin.x, self.scene_origin.y))
    }

    /// Geographic rectangle covered by the raster, `None` for plain images
    pub fn geographic_bounds(&self) -> Option<BoundingBox> {
        let transform = self.transform.as_ref()?;
        let corners: Vec<Point> = transform
            .corners(self.pixel_width as f64, self.pixel_height as f64)
            .iter()
            .map(|g| Point::new(g.lon, g.lat))
            .collect();
        BoundingBox::from_points(&corners)
    }
}
