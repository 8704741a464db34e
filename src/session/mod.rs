//! Loaded layers of one workbench session
//!
//! A session owns the raster registry and the vector layer bounds. It is the
//! one place layers are loaded and cleared; coordinate services borrow it.

mod config;

#[cfg(test)]
mod tests;

use log::info;

pub use self::config::{DisplaySettings, LayerSpec, SessionConfig};

use crate::navigation::VectorLayerBounds;
use crate::raster::{RasterId, RasterRegistry};

/// Identifier of a loaded layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerId {
    Raster(RasterId),
    /// Index into the vector layer list
    Vector(usize),
}

/// Layers currently loaded
#[derive(Default)]
pub struct Session {
    registry: RasterRegistry,
    vectors: Vec<VectorLayerBounds>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session and load every layer of a config, in order
    pub fn from_config(config: &SessionConfig) -> Self {
        let mut session = Session::new();
        for layer in &config.layers {
            session.load(layer.clone());
        }
        session
    }

    /// Load one layer
    pub fn load(&mut self, layer: LayerSpec) -> LayerId {
        match layer {
            LayerSpec::Raster(descriptor) => LayerId::Raster(self.registry.register(descriptor)),
            LayerSpec::Vector(bounds) => {
                info!("Loaded vector layer '{}' with bounds {:?}", bounds.name, bounds.bounds);
                self.vectors.push(bounds);
                LayerId::Vector(self.vectors.len() - 1)
            },
        }
    }

    /// Unload everything ("new project")
    pub fn clear(&mut self) {
        self.registry.unregister_all();
        self.vectors.clear();
    }

    pub fn registry(&self) -> &RasterRegistry {
        &self.registry
    }

    pub fn vectors(&self) -> &[VectorLayerBounds] {
        &self.vectors
    }

    /// True when no layer of any kind is loaded
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty() && self.vectors.is_empty()
    }
}
