//! Registry of loaded rasters
//!
//! Owns every raster loaded in the session and answers point-containment
//! queries across them. The first georeferenced raster becomes the primary
//! one and fixes the scene anchor.

use log::{debug, info, trace, warn};

use super::entry::{RasterDescriptor, RasterEntry, RasterId};
use super::placement::{GeographicOffsetPlacement, ScenePlacement};
use crate::coordinate::{BoundingBox, GeoPoint, Point};
use crate::navigation::errors::{NavError, NavResult};

/// A raster hit by a containment query, with the pixel the point resolved to
#[derive(Debug, Clone, Copy)]
pub struct Containment<'a> {
    /// The containing raster
    pub entry: &'a RasterEntry,
    /// Fractional pixel coordinate inside the raster
    pub pixel: Point,
}

/// The set of currently loaded rasters
pub struct RasterRegistry {
    entries: Vec<RasterEntry>,
    primary: Option<RasterId>,
    anchor: Option<GeoPoint>,
    next_id: u32,
    placement: Box<dyn ScenePlacement>,
}

impl Default for RasterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RasterRegistry {
    /// Create an empty registry using geographic-offset placement
    pub fn new() -> Self {
        Self::with_placement(Box::new(GeographicOffsetPlacement))
    }

    /// Create an empty registry with a custom placement policy
    pub fn with_placement(placement: Box<dyn ScenePlacement>) -> Self {
        RasterRegistry {
            entries: Vec::new(),
            primary: None,
            anchor: None,
            next_id: 1,
            placement,
        }
    }

    /// Register a freshly loaded raster
    ///
    /// The first georeferenced raster becomes primary. Always succeeds.
    pub fn register(&mut self, descriptor: RasterDescriptor) -> RasterId {
        let id = RasterId(self.next_id);
        self.next_id += 1;

        if let (Some(transform), None) = (&descriptor.transform, self.anchor) {
            self.anchor = Some(transform.origin());
            debug!("Scene anchor fixed at {}", transform.origin());
        }

        let scene_origin = self.placement.scene_origin(descriptor.transform.as_ref(), self.anchor);

        let entry = RasterEntry {
            id,
            name: descriptor.name,
            pixel_width: descriptor.pixel_width,
            pixel_height: descriptor.pixel_height,
            transform: descriptor.transform,
            scene_origin,
            crs: descriptor.crs,
        };

        info!("Registered {} '{}' ({}x{}, {}) at scene {}",
              id, entry.name, entry.pixel_width, entry.pixel_height,
              if entry.has_transform() { "georeferenced" } else { "plain image" },
              scene_origin);

        if let Some(transform) = entry.transform() {
            if !transform.is_invertible() {
                warn!("{} '{}' has a singular geotransform (determinant {}); it cannot resolve coordinates",
                      id, entry.name, transform.determinant());
            }
        }

        if entry.has_transform() && self.primary.is_none() {
            info!("{} is now the primary raster", id);
            self.primary = Some(id);
        }

        self.entries.push(entry);
        id
    }

    /// Unload one raster
    ///
    /// If the primary raster is removed while other georeferenced rasters
    /// remain, the earliest-registered of them becomes primary. The scene
    /// anchor is kept so existing placements stay valid.
    pub fn unregister(&mut self, id: RasterId) -> NavResult<RasterEntry> {
        let index = self.entries.iter().position(|e| e.id == id)
            .ok_or(NavError::UnknownRaster(id))?;
        let removed = self.entries.remove(index);
        info!("Unregistered {} '{}'", id, removed.name);

        if self.primary == Some(id) {
            self.primary = self.entries.iter().find(|e| e.has_transform()).map(|e| e.id);
            match self.primary {
                Some(next) => info!("{} promoted to primary raster", next),
                None => debug!("No georeferenced raster left; primary cleared"),
            }
        }

        Ok(removed)
    }

    /// Drop every raster, the primary designation and the scene anchor
    pub fn unregister_all(&mut self) {
        info!("Clearing {} registered raster(s)", self.entries.len());
        self.entries.clear();
        self.primary = None;
        self.anchor = None;
    }

    /// Look up a raster by id
    pub fn get(&self, id: RasterId) -> Option<&RasterEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// All rasters in registration order
    pub fn entries(&self) -> &[RasterEntry] {
        &self.entries
    }

    /// The primary raster, if any
    pub fn primary(&self) -> Option<&RasterEntry> {
        self.primary.and_then(|id| self.get(id))
    }

    /// Geographic point pinned to scene (0,0)
    pub fn anchor(&self) -> Option<GeoPoint> {
        self.anchor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Georeferenced rasters in registration order
    pub fn georeferenced(&self) -> impl Iterator<Item = &RasterEntry> {
        self.entries.iter().filter(|e| e.has_transform())
    }

    /// Plain (non-georeferenced) images in registration order
    pub fn plain_images(&self) -> impl Iterator<Item = &RasterEntry> {
        self.entries.iter().filter(|e| !e.has_transform())
    }

    /// First georeferenced raster whose pixel grid contains the scene point
    ///
    /// Scans in registration order, so the earliest raster wins where
    /// footprints overlap. Rasters with a singular transform cannot contain
    /// anything and are skipped.
    pub fn locate(&self, scene: &Point) -> Option<Containment<'_>> {
        for entry in self.georeferenced() {
            match entry.scene_to_pixel(scene) {
                Ok(pixel) if entry.contains_pixel(&pixel) => {
                    return Some(Containment { entry, pixel });
                },
                Ok(_) => {},
                Err(e) => trace!("Skipping {} in containment scan: {}", entry.id, e),
            }
        }
        None
    }

    /// First georeferenced raster containing the scene point
    pub fn find_containing(&self, scene: &Point) -> Option<&RasterEntry> {
        self.locate(scene).map(|hit| hit.entry)
    }

    /// Union of every raster's scene-space rectangle
    pub fn combined_bounds(&self) -> Option<BoundingBox> {
        BoundingBox::union_all(self.entries.iter().map(|e| e.scene_bounds()))
    }

    /// Union of every georeferenced raster's geographic rectangle
    pub fn geographic_bounds(&self) -> Option<BoundingBox> {
        BoundingBox::union_all(self.entries.iter().filter_map(|e| e.geographic_bounds()))
    }
}
