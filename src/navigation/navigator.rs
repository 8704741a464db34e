//! "Jump to location" workflow
//!
//! Resolves a requested coordinate to a scene point, flags whether it lies
//! inside the raster used, and steers the view. At most one marker is alive:
//! every jump drops the previous marker and cancels its pending expiry.

use std::time::{Duration, Instant};

use log::{debug, info, warn};

use super::errors::{NavError, NavResult};
use super::extent::{ExtentAggregator, VectorLayerBounds};
use super::marker::{ExpiryTimer, LocationMarker, MarkerId, DEFAULT_MARKER_LIFETIME};
use super::view::SceneView;
use crate::coordinate::{BoundingBox, GeoPoint, Point};
use crate::raster::{RasterId, RasterRegistry};

/// Progress of the current jump request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigatorState {
    #[default]
    Idle,
    Resolving,
    Resolved { in_bounds: bool },
}

/// Whether clicks on the canvas capture coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigatorMode {
    #[default]
    Idle,
    CapturingPoint,
}

/// Outcome of a jump
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpResult {
    /// Scene position to center on
    pub scene_point: Point,
    /// Requested coordinate
    pub geo_point: GeoPoint,
    /// Whether the pixel lies inside the resolving raster
    pub in_bounds: bool,
    /// Raster used for the resolution
    pub used_raster: Option<RasterId>,
    /// Resolved pixel coordinate (unclamped)
    pub pixel: Point,
}

/// Tunables for the navigator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigatorSettings {
    /// Lifetime of a jump marker
    pub marker_lifetime: Duration,
    /// Zoom applied when centering on a jump target
    pub jump_zoom: Option<f64>,
}

impl Default for NavigatorSettings {
    fn default() -> Self {
        NavigatorSettings {
            marker_lifetime: DEFAULT_MARKER_LIFETIME,
            jump_zoom: None,
        }
    }
}

/// Drives jump requests and the marker they leave behind
#[derive(Debug, Default)]
pub struct LocationNavigator {
    settings: NavigatorSettings,
    state: NavigatorState,
    mode: NavigatorMode,
    marker: Option<LocationMarker>,
    timer: ExpiryTimer,
}

impl LocationNavigator {
    pub fn new(settings: NavigatorSettings) -> Self {
        LocationNavigator {
            settings,
            ..Default::default()
        }
    }

    pub fn settings(&self) -> &NavigatorSettings {
        &self.settings
    }

    pub fn state(&self) -> NavigatorState {
        self.state
    }

    pub fn mode(&self) -> NavigatorMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: NavigatorMode) {
        debug!("Navigator mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
    }

    /// Flip between idle and point capture, returning the new mode
    pub fn toggle_capture(&mut self) -> NavigatorMode {
        let next = match self.mode {
            NavigatorMode::Idle => NavigatorMode::CapturingPoint,
            NavigatorMode::CapturingPoint => NavigatorMode::Idle,
        };
        self.set_mode(next);
        next
    }

    /// The marker currently shown, if any
    pub fn active_marker(&self) -> Option<&LocationMarker> {
        self.marker.as_ref()
    }

    /// Resolve a jump target without touching navigator or view state
    ///
    /// # Errors
    /// * `SingularTransform` if the primary raster cannot be inverted
    /// * `NoDataLoaded` if neither a georeferenced raster nor an image is loaded
    pub fn resolve_jump(registry: &RasterRegistry, lon: f64, lat: f64) -> NavResult<JumpResult> {
        let geo_point = GeoPoint::new(lon, lat);

        if let Some(primary) = registry.primary() {
            if let Some(transform) = primary.transform() {
                let pixel = transform.inverse(lon, lat)?;
                return Ok(JumpResult {
                    scene_point: primary.pixel_to_scene(&pixel),
                    geo_point,
                    in_bounds: primary.contains_pixel(&pixel),
                    used_raster: Some(primary.id()),
                    pixel,
                });
            }
        }

        if let Some(image) = registry.plain_images().next() {
            let scene_point = Point::new(lon, lat);
            let pixel = image.scene_to_pixel(&scene_point)?;
            return Ok(JumpResult {
                scene_point,
                geo_point,
                in_bounds: image.contains_pixel(&pixel),
                used_raster: Some(image.id()),
                pixel,
            });
        }

        Err(NavError::NoDataLoaded)
    }

    /// Jump to a coordinate: resolve, center the view and drop a marker
    ///
    /// Any previous marker is removed and its expiry cancelled first, even
    /// if the new request fails.
    pub fn jump_to(
        &mut self,
        registry: &RasterRegistry,
        view: &mut dyn SceneView,
        lon: f64,
        lat: f64,
        now: Instant,
    ) -> NavResult<JumpResult> {
        self.discard_marker(view);
        self.state = NavigatorState::Resolving;

        let result = match Self::resolve_jump(registry, lon, lat) {
            Ok(result) => result,
            Err(e) => {
                warn!("Jump to ({}, {}) failed: {}", lon, lat, e);
                self.state = NavigatorState::Idle;
                return Err(e);
            },
        };

        let token = self.timer.schedule(now, self.settings.marker_lifetime);
        let marker = LocationMarker {
            id: MarkerId(token.generation()),
            scene_point: result.scene_point,
            geo_point: result.geo_point,
            in_bounds: result.in_bounds,
            expires_at: token.deadline(),
        };

        view.center_on(result.scene_point, self.settings.jump_zoom);
        view.draw_marker(&marker);
        self.marker = Some(marker);
        self.state = NavigatorState::Resolved { in_bounds: result.in_bounds };

        if result.in_bounds {
            info!("Jumped to {} at scene {}", result.geo_point, result.scene_point);
        } else {
            info!("Jumped to {} at scene {} (outside the loaded raster)",
                  result.geo_point, result.scene_point);
        }

        Ok(result)
    }

    /// Expire the marker if its time is up; returns true when one was removed
    pub fn tick(&mut self, view: &mut dyn SceneView, now: Instant) -> bool {
        if self.timer.poll(now).is_none() {
            return false;
        }

        if let Some(marker) = self.marker.take() {
            debug!("Marker {:?} expired", marker.id);
            view.remove_marker(marker.id);
        }
        self.state = NavigatorState::Idle;
        true
    }

    /// Drop the active marker immediately
    pub fn clear_marker(&mut self, view: &mut dyn SceneView) {
        self.discard_marker(view);
        self.state = NavigatorState::Idle;
    }

    fn discard_marker(&mut self, view: &mut dyn SceneView) {
        self.timer.cancel();
        if let Some(previous) = self.marker.take() {
            debug!("Superseding marker {:?}", previous.id);
            view.remove_marker(previous.id);
        }
    }

    /// Fit the view to everything loaded
    ///
    /// # Errors
    /// `NoDataLoaded` when no raster or vector layer is loaded.
    pub fn zoom_to_extent(
        &self,
        registry: &RasterRegistry,
        vectors: &[VectorLayerBounds],
        view: &mut dyn SceneView,
    ) -> NavResult<BoundingBox> {
        let bounds = ExtentAggregator::new(registry, vectors)
            .scene_bounds()
            .ok_or(NavError::NoDataLoaded)?;
        info!("Zooming to extent {:?}", bounds);
        view.fit_rect(bounds);
        Ok(bounds)
    }
}
