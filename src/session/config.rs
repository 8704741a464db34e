//! Session description files
//!
//! A session file is TOML listing display preferences, the fallback policy
//! and the layers to load, in load order:
//!
//! ```toml
//! [display]
//! coordinate_format = "compact"
//! marker_seconds = 5
//! jump_zoom = 4.0
//!
//! [fallback]
//! policy = "linear-scale"
//! units_per_degree = 1000.0
//!
//! [[layer]]
//! kind = "raster"
//! name = "basemap.tif"
//! width = 100
//! height = 100
//! geotransform = [10.0, 0.5, 0.0, 50.0, 0.0, -0.5]
//! crs = "EPSG:4326"
//!
//! [[layer]]
//! kind = "vector"
//! name = "roads.shp"
//! bounds = [0.0, -50.0, 50.0, 0.0]
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use log::debug;
use toml::Value;

use crate::coordinate::{AffineGeoTransform, BoundingBox, CoordinateSystem};
use crate::navigation::errors::{NavError, NavResult};
use crate::navigation::{FallbackPolicy, NavigatorSettings, VectorLayerBounds, DEFAULT_MARKER_LIFETIME, DEFAULT_UNITS_PER_DEGREE};
use crate::raster::RasterDescriptor;
use crate::utils::format_utils::CoordinateFormat;

/// Longest marker lifetime a session may ask for (one day)
const MAX_MARKER_SECONDS: f64 = 86_400.0;

/// Display preferences
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplaySettings {
    pub coordinate_format: CoordinateFormat,
    pub marker_lifetime: Duration,
    pub jump_zoom: Option<f64>,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            coordinate_format: CoordinateFormat::Compact,
            marker_lifetime: DEFAULT_MARKER_LIFETIME,
            jump_zoom: None,
        }
    }
}

impl DisplaySettings {
    /// Navigator tunables derived from the display preferences
    pub fn navigator_settings(&self) -> NavigatorSettings {
        NavigatorSettings {
            marker_lifetime: self.marker_lifetime,
            jump_zoom: self.jump_zoom,
        }
    }
}

/// One layer to load
#[derive(Debug, Clone)]
pub enum LayerSpec {
    /// Raster or plain image
    Raster(RasterDescriptor),
    /// Vector layer known only by its scene bounds
    Vector(VectorLayerBounds),
}

/// Parsed session file
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    pub display: DisplaySettings,
    pub fallback: FallbackPolicy,
    pub layers: Vec<LayerSpec>,
}

impl SessionConfig {
    /// Read and parse a session file
    pub fn from_file<P: AsRef<Path>>(path: P) -> NavResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        debug!("Parsing session file {}", path.display());
        Self::from_str(&content)
    }

    /// Parse session TOML
    pub fn from_str(content: &str) -> NavResult<Self> {
        let root: Value = content.parse()
            .map_err(|e| NavError::ConfigError(format!("Failed to parse session TOML: {}", e)))?;

        let mut config = SessionConfig::default();

        if let Some(display) = root.get("display") {
            config.display = Self::parse_display(display)?;
        }
        if let Some(fallback) = root.get("fallback") {
            config.fallback = Self::parse_fallback(fallback)?;
        }
        if let Some(layers) = root.get("layer") {
            let layers = layers.as_array()
                .ok_or_else(|| NavError::ConfigError("'layer' must be an array of tables".to_string()))?;
            for (index, layer) in layers.iter().enumerate() {
                config.layers.push(Self::parse_layer(layer, index)?);
            }
        }

        debug!("Session lists {} layer(s)", config.layers.len());
        Ok(config)
    }

    fn parse_display(table: &Value) -> NavResult<DisplaySettings> {
        let mut display = DisplaySettings::default();

        if let Some(format) = table.get("coordinate_format") {
            let name = format.as_str()
                .ok_or_else(|| NavError::ConfigError("coordinate_format must be a string".to_string()))?;
            display.coordinate_format = CoordinateFormat::parse(name)?;
        }
        if let Some(seconds) = table.get("marker_seconds") {
            let seconds = as_number(seconds, "marker_seconds")?;
            if !(0.0..=MAX_MARKER_SECONDS).contains(&seconds) {
                return Err(NavError::ConfigError(format!(
                    "marker_seconds must be between 0 and {}, got {}", MAX_MARKER_SECONDS, seconds)));
            }
            display.marker_lifetime = Duration::try_from_secs_f64(seconds)
                .map_err(|e| NavError::ConfigError(format!("marker_seconds {}: {}", seconds, e)))?;
        }
        if let Some(zoom) = table.get("jump_zoom") {
            let zoom = as_number(zoom, "jump_zoom")?;
            if !(zoom.is_finite() && zoom > 0.0) {
                return Err(NavError::ConfigError(format!("jump_zoom must be a positive number, got {}", zoom)));
            }
            display.jump_zoom = Some(zoom);
        }

        Ok(display)
    }

    fn parse_fallback(table: &Value) -> NavResult<FallbackPolicy> {
        let policy = table.get("policy").and_then(|v| v.as_str()).unwrap_or("anchor-offset");
        match policy {
            "anchor-offset" => Ok(FallbackPolicy::AnchorOffset),
            "linear-scale" => {
                let units_per_degree = match table.get("units_per_degree") {
                    Some(v) => as_number(v, "units_per_degree")?,
                    None => DEFAULT_UNITS_PER_DEGREE,
                };
                Ok(FallbackPolicy::LinearScale { units_per_degree })
            },
            other => Err(NavError::ConfigError(format!("Unknown fallback policy: {}", other))),
        }
    }

    fn parse_layer(table: &Value, index: usize) -> NavResult<LayerSpec> {
        let kind = table.get("kind").and_then(|v| v.as_str())
            .ok_or_else(|| NavError::ConfigError(format!("layer #{} is missing 'kind'", index)))?;
        let name = table.get("name").and_then(|v| v.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| format!("layer {}", index));

        match kind {
            "raster" => {
                let (width, height) = Self::parse_dimensions(table, &name)?;
                let coefficients = number_array(table, "geotransform", &name)?;
                let transform = AffineGeoTransform::from_slice(&coefficients)?;
                let mut descriptor = RasterDescriptor::georeferenced(&name, width, height, transform);
                if let Some(crs) = table.get("crs").and_then(|v| v.as_str()) {
                    descriptor = descriptor.with_crs(CoordinateSystem::parse(crs)?);
                }
                Ok(LayerSpec::Raster(descriptor))
            },
            "image" => {
                let (width, height) = Self::parse_dimensions(table, &name)?;
                Ok(LayerSpec::Raster(RasterDescriptor::plain(&name, width, height)))
            },
            "vector" => {
                let bounds = number_array(table, "bounds", &name)?;
                if bounds.len() != 4 {
                    return Err(NavError::ConfigError(format!(
                        "{}: bounds needs 4 values (min_x, min_y, max_x, max_y)", name)));
                }
                let bbox = BoundingBox::new(bounds[0], bounds[1], bounds[2], bounds[3]);
                Ok(LayerSpec::Vector(VectorLayerBounds::new(&name, bbox)))
            },
            other => Err(NavError::ConfigError(format!("{}: unknown layer kind '{}'", name, other))),
        }
    }

    fn parse_dimensions(table: &Value, name: &str) -> NavResult<(u32, u32)> {
        let dimension = |key: &str| -> NavResult<u32> {
            let value = table.get(key).and_then(|v| v.as_integer())
                .ok_or_else(|| NavError::ConfigError(format!("{}: missing integer '{}'", name, key)))?;
            u32::try_from(value)
                .ok()
                .filter(|v| *v > 0)
                .ok_or_else(|| NavError::ConfigError(format!("{}: '{}' must be a positive size, got {}", name, key, value)))
        };
        Ok((dimension("width")?, dimension("height")?))
    }
}

fn as_number(value: &Value, key: &str) -> NavResult<f64> {
    match value {
        Value::Float(f) => Ok(*f),
        Value::Integer(i) => Ok(*i as f64),
        _ => Err(NavError::ConfigError(format!("'{}' must be a number", key))),
    }
}

fn number_array(table: &Value, key: &str, name: &str) -> NavResult<Vec<f64>> {
    let values = table.get(key).and_then(|v| v.as_array())
        .ok_or_else(|| NavError::ConfigError(format!("{}: missing array '{}'", name, key)))?;
    values.iter().map(|v| as_number(v, key)).collect()
}
