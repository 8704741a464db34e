//! Routing of canvas input events to the coordinate services
//!
//! Every input the canvas produces becomes an [`InputEvent`] value and goes
//! through [`dispatch`], which calls the resolver and navigator directly.

use std::time::Instant;

use log::debug;

use super::errors::NavResult;
use super::extent::VectorLayerBounds;
use super::navigator::{JumpResult, LocationNavigator, NavigatorMode};
use super::resolver::{CoordinateResolver, FallbackPolicy, SceneLookup};
use super::view::SceneView;
use crate::coordinate::{BoundingBox, GeoPoint, Point};
use crate::raster::RasterRegistry;
use crate::utils::format_utils::{format_pointer_status, CoordinateFormat};

/// One input from the canvas or its controls
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer moved over the canvas
    MouseMove(Point),
    /// Canvas clicked
    Click(Point),
    /// Coordinate capture tool toggled
    ToggleCapture,
    /// Jump requested (coordinate entry or a gazetteer hit)
    JumpTo {
        target: GeoPoint,
        at: Instant,
    },
    /// "Zoom to extent" requested
    ZoomToExtent,
    /// Event loop heartbeat for deferred work
    Tick(Instant),
}

/// A point picked with the capture tool
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CapturedPoint {
    Geographic(GeoPoint),
    /// No georeferencing available, raw scene coordinates
    Scene(Point),
}

/// What a dispatched event produced
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    /// New status-bar text
    Status(String),
    /// A point captured by a click in capture mode
    Captured(CapturedPoint),
    /// The navigator mode changed
    ModeChanged(NavigatorMode),
    /// A jump completed
    Jumped(JumpResult),
    /// The view was fitted to this scene rectangle
    ZoomedTo(BoundingBox),
    /// The jump marker expired
    MarkerExpired,
    /// Nothing to report
    Ignored,
}

/// Everything an event may read or steer besides the navigator
pub struct DispatchContext<'a> {
    pub registry: &'a RasterRegistry,
    pub vectors: &'a [VectorLayerBounds],
    pub view: &'a mut dyn SceneView,
    pub fallback: FallbackPolicy,
    pub format: CoordinateFormat,
}

/// Handle one input event
///
/// # Errors
/// Jump and zoom failures, and singular transforms met while resolving the
/// pointer position, are passed through for the caller to show.
pub fn dispatch(
    navigator: &mut LocationNavigator,
    ctx: &mut DispatchContext<'_>,
    event: InputEvent,
) -> NavResult<DispatchOutcome> {
    match event {
        InputEvent::MouseMove(scene) => {
            let resolver = CoordinateResolver::new(ctx.registry, ctx.fallback);
            let lookup = resolver.scene_to_geographic(&scene)?;
            let crs = match lookup {
                SceneLookup::Geographic { raster, .. } => ctx.registry.get(raster).and_then(|e| e.crs()),
                SceneLookup::NotGeographic => None,
            };
            Ok(DispatchOutcome::Status(format_pointer_status(&scene, &lookup, crs, ctx.format)))
        },
        InputEvent::Click(scene) => {
            if navigator.mode() != NavigatorMode::CapturingPoint {
                return Ok(DispatchOutcome::Ignored);
            }
            let resolver = CoordinateResolver::new(ctx.registry, ctx.fallback);
            let captured = match resolver.scene_to_geographic(&scene)?.geo_point() {
                Some(geo) => CapturedPoint::Geographic(geo),
                None => CapturedPoint::Scene(scene),
            };
            debug!("Captured {:?}", captured);
            Ok(DispatchOutcome::Captured(captured))
        },
        InputEvent::ToggleCapture => Ok(DispatchOutcome::ModeChanged(navigator.toggle_capture())),
        InputEvent::JumpTo { target, at } => {
            let result = navigator.jump_to(ctx.registry, &mut *ctx.view, target.lon, target.lat, at)?;
            Ok(DispatchOutcome::Jumped(result))
        },
        InputEvent::ZoomToExtent => {
            let bounds = navigator.zoom_to_extent(ctx.registry, ctx.vectors, &mut *ctx.view)?;
            Ok(DispatchOutcome::ZoomedTo(bounds))
        },
        InputEvent::Tick(now) => {
            if navigator.tick(&mut *ctx.view, now) {
                Ok(DispatchOutcome::MarkerExpired)
            } else {
                Ok(DispatchOutcome::Ignored)
            }
        },
    }
}
