//! Tests for the jump-to-location workflow

use std::time::{Duration, Instant};

use super::test_utils::{assert_close, base_map, degenerate, RecordingView};
use crate::coordinate::{BoundingBox, Point};
use crate::navigation::{
    LocationNavigator, NavError, NavigatorMode, NavigatorSettings, NavigatorState, VectorLayerBounds,
};
use crate::raster::{RasterDescriptor, RasterRegistry};

#[test]
fn test_jump_inside_primary_raster() {
    let mut registry = RasterRegistry::new();
    let id = registry.register(base_map());
    let mut view = RecordingView::default();
    let mut navigator = LocationNavigator::new(NavigatorSettings::default());

    let result = navigator.jump_to(&registry, &mut view, 35.0, 25.0, Instant::now()).unwrap();

    assert!(result.in_bounds);
    assert_eq!(result.used_raster, Some(id));
    assert_close(result.pixel.x, 50.0);
    assert_close(result.pixel.y, 50.0);
    assert_close(result.scene_point.x, 25.0);
    assert_close(result.scene_point.y, -25.0);

    assert_eq!(navigator.state(), NavigatorState::Resolved { in_bounds: true });
    assert_eq!(view.centered, vec![(result.scene_point, None)]);
    assert_eq!(view.drawn.len(), 1);
    assert!(view.drawn[0].in_bounds);
}

#[test]
fn test_jump_outside_footprint_is_not_an_error() {
    let mut registry = RasterRegistry::new();
    registry.register(base_map());
    let mut view = RecordingView::default();
    let mut navigator = LocationNavigator::new(NavigatorSettings::default());

    let result = navigator.jump_to(&registry, &mut view, -120.0, 80.0, Instant::now()).unwrap();

    assert!(!result.in_bounds);
    assert!(result.scene_point.x.is_finite() && result.scene_point.y.is_finite());
    assert_eq!(navigator.state(), NavigatorState::Resolved { in_bounds: false });
    assert!(!navigator.active_marker().unwrap().in_bounds);
}

#[test]
fn test_jump_edges_of_raster() {
    let mut registry = RasterRegistry::new();
    registry.register(base_map());

    // Right and bottom edges are exclusive
    assert!(LocationNavigator::resolve_jump(&registry, 10.0, 50.0).unwrap().in_bounds);
    assert!(!LocationNavigator::resolve_jump(&registry, 60.0, 25.0).unwrap().in_bounds);
    assert!(!LocationNavigator::resolve_jump(&registry, 35.0, 0.0).unwrap().in_bounds);
}

#[test]
fn test_jump_with_singular_primary_fails() {
    let mut registry = RasterRegistry::new();
    registry.register(degenerate());
    registry.register(base_map());
    let mut view = RecordingView::default();
    let mut navigator = LocationNavigator::new(NavigatorSettings::default());

    let result = navigator.jump_to(&registry, &mut view, 35.0, 25.0, Instant::now());

    assert!(matches!(result, Err(NavError::SingularTransform { .. })));
    assert_eq!(navigator.state(), NavigatorState::Idle);
    assert!(navigator.active_marker().is_none());
    assert!(view.drawn.is_empty());
}

#[test]
fn test_jump_on_plain_image_uses_scene_coordinates() {
    let mut registry = RasterRegistry::new();
    let id = registry.register(RasterDescriptor::plain("photo", 640, 480));

    let inside = LocationNavigator::resolve_jump(&registry, 320.0, 240.0).unwrap();
    assert!(inside.in_bounds);
    assert_eq!(inside.scene_point, Point::new(320.0, 240.0));
    assert_eq!(inside.used_raster, Some(id));

    let outside = LocationNavigator::resolve_jump(&registry, 700.0, 10.0).unwrap();
    assert!(!outside.in_bounds);
}

#[test]
fn test_jump_with_nothing_loaded() {
    let registry = RasterRegistry::new();
    let mut view = RecordingView::default();
    let mut navigator = LocationNavigator::new(NavigatorSettings::default());

    let result = navigator.jump_to(&registry, &mut view, 1.0, 2.0, Instant::now());
    assert!(matches!(result, Err(NavError::NoDataLoaded)));
}

#[test]
fn test_new_jump_supersedes_marker_and_its_expiry() {
    let mut registry = RasterRegistry::new();
    registry.register(base_map());
    let mut view = RecordingView::default();
    let mut navigator = LocationNavigator::new(NavigatorSettings::default());
    let start = Instant::now();

    navigator.jump_to(&registry, &mut view, 35.0, 25.0, start).unwrap();
    let first = navigator.active_marker().unwrap().id;

    navigator.jump_to(&registry, &mut view, 20.0, 40.0, start + Duration::from_secs(3)).unwrap();
    let second = navigator.active_marker().unwrap().id;
    assert_ne!(first, second);
    assert_eq!(view.removed, vec![first]);

    // The first marker's deadline passes: nothing happens to the second one
    assert!(!navigator.tick(&mut view, start + Duration::from_secs(6)));
    assert_eq!(navigator.active_marker().map(|m| m.id), Some(second));

    assert!(navigator.tick(&mut view, start + Duration::from_secs(8)));
    assert!(navigator.active_marker().is_none());
    assert_eq!(view.removed, vec![first, second]);
    assert_eq!(navigator.state(), NavigatorState::Idle);
}

#[test]
fn test_failed_jump_still_discards_previous_marker() {
    let mut registry = RasterRegistry::new();
    registry.register(base_map());
    let mut view = RecordingView::default();
    let mut navigator = LocationNavigator::new(NavigatorSettings::default());
    let start = Instant::now();

    navigator.jump_to(&registry, &mut view, 35.0, 25.0, start).unwrap();
    registry.unregister_all();

    assert!(navigator.jump_to(&registry, &mut view, 35.0, 25.0, start).is_err());
    assert!(navigator.active_marker().is_none());
    assert_eq!(view.removed.len(), 1);
    assert!(!navigator.tick(&mut view, start + Duration::from_secs(10)));
}

#[test]
fn test_marker_lifetime_and_zoom_settings() {
    let mut registry = RasterRegistry::new();
    registry.register(base_map());
    let mut view = RecordingView::default();
    let mut navigator = LocationNavigator::new(NavigatorSettings {
        marker_lifetime: Duration::from_secs(2),
        jump_zoom: Some(8.0),
    });
    let start = Instant::now();

    navigator.jump_to(&registry, &mut view, 35.0, 25.0, start).unwrap();
    assert_eq!(view.centered[0].1, Some(8.0));
    assert_eq!(navigator.active_marker().unwrap().expires_at, Some(start + Duration::from_secs(2)));
    assert!(navigator.tick(&mut view, start + Duration::from_secs(2)));
}

#[test]
fn test_toggle_capture_mode() {
    let mut navigator = LocationNavigator::new(NavigatorSettings::default());
    assert_eq!(navigator.mode(), NavigatorMode::Idle);
    assert_eq!(navigator.toggle_capture(), NavigatorMode::CapturingPoint);
    assert_eq!(navigator.toggle_capture(), NavigatorMode::Idle);
}

#[test]
fn test_zoom_to_extent() {
    let mut registry = RasterRegistry::new();
    let mut view = RecordingView::default();
    let navigator = LocationNavigator::new(NavigatorSettings::default());

    let empty = navigator.zoom_to_extent(&registry, &[], &mut view);
    assert!(matches!(empty, Err(NavError::NoDataLoaded)));

    registry.register(base_map());
    let vectors = vec![VectorLayerBounds::new("roads", BoundingBox::new(40.0, -10.0, 70.0, 5.0))];
    let bounds = navigator.zoom_to_extent(&registry, &vectors, &mut view).unwrap();

    assert_eq!(bounds, BoundingBox::new(0.0, -50.0, 70.0, 5.0));
    assert_eq!(view.fitted, vec![bounds]);
}

#[test]
fn test_lifetime_past_instant_range_keeps_marker() {
    let mut registry = RasterRegistry::new();
    registry.register(base_map());
    let mut view = RecordingView::default();
    let mut navigator = LocationNavigator::new(NavigatorSettings {
        marker_lifetime: Duration::MAX,
        jump_zoom: None,
    });
    let start = Instant::now();

    navigator.jump_to(&registry, &mut view, 35.0, 25.0, start).unwrap();
    assert_eq!(navigator.active_marker().unwrap().expires_at, None);
    assert!(!navigator.tick(&mut view, start + Duration::from_secs(86_400 * 365)));
    assert!(navigator.active_marker().is_some());
}
