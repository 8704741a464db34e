//! Affine geotransform between a raster's pixel grid and its geographic frame

use log::trace;

use super::point::{GeoPoint, Point};
use crate::navigation::errors::{NavError, NavResult};

/// Magnitude below which a coefficient or determinant counts as zero
pub const SINGULARITY_EPSILON: f64 = 1e-10;

/// Six-coefficient affine map from pixel space to geographic space
///
/// ```text
/// geo_x = c0 + pixel_x * c1 + pixel_y * c2
/// geo_y = c3 + pixel_x * c4 + pixel_y * c5
/// ```
///
/// The coefficient order is the usual GDAL geotransform order. A transform is
/// immutable; a raster gets a new one each time it is loaded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineGeoTransform {
    coefficients: [f64; 6],
}

impl AffineGeoTransform {
    /// Create a transform from the six coefficients `[c0, c1, c2, c3, c4, c5]`
    pub fn new(coefficients: [f64; 6]) -> Self {
        AffineGeoTransform { coefficients }
    }

    /// Create a north-up transform with no rotation terms
    pub fn north_up(origin_x: f64, pixel_width: f64, origin_y: f64, pixel_height: f64) -> Self {
        AffineGeoTransform::new([origin_x, pixel_width, 0.0, origin_y, 0.0, pixel_height])
    }

    /// Build from a slice, which must hold exactly six values
    pub fn from_slice(values: &[f64]) -> NavResult<Self> {
        let coefficients: [f64; 6] = values.try_into().map_err(|_| {
            NavError::ConfigError(format!(
                "Geotransform needs exactly 6 coefficients, got {}", values.len()))
        })?;
        Ok(AffineGeoTransform::new(coefficients))
    }

    /// The raw coefficients
    pub fn coefficients(&self) -> [f64; 6] {
        self.coefficients
    }

    /// Geographic position of pixel corner (0, 0)
    pub fn origin(&self) -> GeoPoint {
        GeoPoint::new(self.coefficients[0], self.coefficients[3])
    }

    /// Determinant of the linear part `[[c1, c2], [c4, c5]]`
    pub fn determinant(&self) -> f64 {
        let [_, c1, c2, _, c4, c5] = self.coefficients;
        c1 * c5 - c2 * c4
    }

    /// True when both rotation terms are negligible
    pub fn is_axis_aligned(&self) -> bool {
        self.coefficients[2].abs() < SINGULARITY_EPSILON
            && self.coefficients[4].abs() < SINGULARITY_EPSILON
    }

    /// True when the linear part can be inverted
    pub fn is_invertible(&self) -> bool {
        if self.is_axis_aligned() {
            self.coefficients[1].abs() >= SINGULARITY_EPSILON
                && self.coefficients[5].abs() >= SINGULARITY_EPSILON
        } else {
            self.determinant().abs() >= SINGULARITY_EPSILON
        }
    }

    /// Pixel coordinate to geographic coordinate
    pub fn forward(&self, pixel_x: f64, pixel_y: f64) -> GeoPoint {
        let [c0, c1, c2, c3, c4, c5] = self.coefficients;
        GeoPoint::new(
            c0 + pixel_x * c1 + pixel_y * c2,
            c3 + pixel_x * c4 + pixel_y * c5,
        )
    }

    /// Apply only the linear part, giving the geographic displacement of a pixel offset
    pub fn linear(&self, dx: f64, dy: f64) -> Point {
        let [_, c1, c2, _, c4, c5] = self.coefficients;
        Point::new(dx * c1 + dy * c2, dx * c4 + dy * c5)
    }

    /// Geographic coordinate to (fractional) pixel coordinate
    ///
    /// North-up transforms divide directly; rotated ones go through Cramer's
    /// rule. Fails with [`NavError::SingularTransform`] instead of producing
    /// non-finite pixels.
    pub fn inverse(&self, geo_x: f64, geo_y: f64) -> NavResult<Point> {
        if self.is_axis_aligned() {
            self.inverse_axis_aligned(geo_x, geo_y)
        } else {
            self.inverse_general(geo_x, geo_y)
        }
    }

    fn inverse_axis_aligned(&self, geo_x: f64, geo_y: f64) -> NavResult<Point> {
        let [c0, c1, _, c3, _, c5] = self.coefficients;
        if c1.abs() < SINGULARITY_EPSILON || c5.abs() < SINGULARITY_EPSILON {
            return Err(NavError::SingularTransform { determinant: c1 * c5 });
        }

        let pixel = Point::new((geo_x - c0) / c1, (geo_y - c3) / c5);
        trace!("Axis-aligned inverse ({}, {}) -> {}", geo_x, geo_y, pixel);
        Ok(pixel)
    }

    pub(crate) fn inverse_general(&self, geo_x: f64, geo_y: f64) -> NavResult<Point> {
        let [c0, c1, c2, c3, c4, c5] = self.coefficients;
        let det = c1 * c5 - c2 * c4;
        if det.abs() < SINGULARITY_EPSILON {
            return Err(NavError::SingularTransform { determinant: det });
        }

        let dx = geo_x - c0;
        let dy = geo_y - c3;
        let pixel = Point::new(
            (c5 * dx - c2 * dy) / det,
            (c1 * dy - c4 * dx) / det,
        );
        trace!("General inverse ({}, {}) -> {}", geo_x, geo_y, pixel);
        Ok(pixel)
    }

    /// Geographic positions of the four pixel-space corners of a `width` x `height` grid
    ///
    /// Order: (0,0), (width,0), (width,height), (0,height).
    pub fn corners(&self, width: f64, height: f64) -> [GeoPoint; 4] {
        [
            self.forward(0.0, 0.0),
            self.forward(width, 0.0),
            self.forward(width, height),
            self.forward(0.0, height),
        ]
    }
}
