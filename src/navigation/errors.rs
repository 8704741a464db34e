//! Custom error types for coordinate resolution and navigation

use std::fmt;
use std::io;

use crate::raster::RasterId;

/// Error types raised by the coordinate engine and its collaborators
#[derive(Debug)]
pub enum NavError {
    /// I/O error
    IoError(io::Error),
    /// The linear part of an affine geotransform cannot be inverted
    SingularTransform {
        /// Determinant of the 2x2 linear part
        determinant: f64,
    },
    /// A navigation or extent query was made with nothing loaded
    NoDataLoaded,
    /// No raster with this id is registered
    UnknownRaster(RasterId),
    /// User-supplied coordinate text could not be understood
    InvalidCoordinate(String),
    /// Session configuration is malformed
    ConfigError(String),
    /// City gazetteer could not be loaded
    GazetteerError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavError::IoError(e) => write!(f, "I/O error: {}", e),
            NavError::SingularTransform { determinant } => write!(
                f,
                "Geotransform is singular (determinant {:e}); the raster's georeferencing is degenerate",
                determinant
            ),
            NavError::NoDataLoaded => write!(f, "No data loaded. Load a raster or vector layer first"),
            NavError::UnknownRaster(id) => write!(f, "Unknown raster: {}", id),
            NavError::InvalidCoordinate(msg) => write!(f, "Invalid coordinate: {}", msg),
            NavError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            NavError::GazetteerError(msg) => write!(f, "Gazetteer error: {}", msg),
            NavError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for NavError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NavError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for NavError {
    fn from(error: io::Error) -> Self {
        NavError::IoError(error)
    }
}

impl From<String> for NavError {
    fn from(msg: String) -> Self {
        NavError::GenericError(msg)
    }
}

/// Result type for navigation operations
pub type NavResult<T> = Result<T, NavError>;
