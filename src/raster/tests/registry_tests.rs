//! Tests for the raster registry

extern crate std;

use std::sync::{Mutex, Once};

use lazy_static::lazy_static;
use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::coordinate::{AffineGeoTransform, GeoPoint, Point};
use crate::navigation::errors::NavError;
use crate::raster::{RasterDescriptor, RasterId, RasterRegistry, ScenePlacement};

fn north_up(name: &str, origin_x: f64, origin_y: f64) -> RasterDescriptor {
    RasterDescriptor::georeferenced(
        name, 100, 100, AffineGeoTransform::north_up(origin_x, 0.5, origin_y, -0.5))
}

#[test]
fn test_first_georeferenced_raster_becomes_primary() {
    let mut registry = RasterRegistry::new();
    std::assert!(registry.primary().is_none());

    let image = registry.register(RasterDescriptor::plain("photo", 10, 10));
    std::assert!(registry.primary().is_none());

    let first = registry.register(north_up("first", 10.0, 50.0));
    let second = registry.register(north_up("second", 60.0, 50.0));

    std::assert_ne!(image, first);
    std::assert_eq!(registry.primary().map(|e| e.id()), Some(first));
    std::assert_eq!(registry.len(), 3);
    std::assert_ne!(first, second);
}

#[test]
fn test_scene_placement_follows_anchor() {
    let mut registry = RasterRegistry::new();
    let first = registry.register(north_up("first", 10.0, 50.0));
    let second = registry.register(north_up("second", 60.0, 40.0));

    std::assert_eq!(registry.anchor(), Some(GeoPoint::new(10.0, 50.0)));
    std::assert_eq!(registry.get(first).unwrap().scene_origin(), Point::new(0.0, 0.0));
    std::assert_eq!(registry.get(second).unwrap().scene_origin(), Point::new(50.0, -10.0));
}

#[test]
fn test_containment_prefers_first_registered() {
    let mut registry = RasterRegistry::new();
    let first = registry.register(north_up("first", 10.0, 50.0));
    let _overlapping = registry.register(north_up("overlapping", 20.0, 45.0));

    // Scene (20, -10) is geo (30, 40): inside both footprints
    let point = Point::new(20.0, -10.0);
    for _ in 0..5 {
        std::assert_eq!(registry.find_containing(&point).map(|e| e.id()), Some(first));
    }
}

#[test]
fn test_containment_reaches_later_rasters() {
    let mut registry = RasterRegistry::new();
    registry.register(north_up("west", 10.0, 50.0));
    let east = registry.register(north_up("east", 60.0, 50.0));

    let hit = registry.locate(&Point::new(75.0, -5.0)).unwrap();
    std::assert_eq!(hit.entry.id(), east);
    std::assert!((hit.pixel.x - 50.0).abs() < 1e-9);
    std::assert!((hit.pixel.y - 10.0).abs() < 1e-9);

    std::assert!(registry.find_containing(&Point::new(500.0, 500.0)).is_none());
}

#[test]
fn test_singular_rasters_are_skipped_in_scan() {
    let mut registry = RasterRegistry::new();
    registry.register(RasterDescriptor::georeferenced(
        "degenerate", 100, 100, AffineGeoTransform::new([10.0, 2.0, 4.0, 50.0, 1.0, 2.0])));
    let good = registry.register(north_up("good", 10.0, 50.0));

    std::assert_eq!(registry.find_containing(&Point::new(5.0, -5.0)).map(|e| e.id()), Some(good));
}

/// Keeps every log record so tests can count warnings
struct CaptureLog;

lazy_static! {
    static ref CAPTURED: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());
}

static CAPTURE: CaptureLog = CaptureLog;
static INSTALL: Once = Once::new();

impl Log for CaptureLog {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut captured) = CAPTURED.lock() {
            captured.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

fn warnings_mentioning(text: &str) -> usize {
    CAPTURED.lock().unwrap().iter()
        .filter(|(level, message)| *level == Level::Warn && message.contains(text))
        .count()
}

#[test]
fn test_singular_raster_warns_once_at_registration() {
    INSTALL.call_once(|| {
        let _ = log::set_logger(&CAPTURE);
        log::set_max_level(LevelFilter::Trace);
    });

    let mut registry = RasterRegistry::new();
    registry.register(RasterDescriptor::georeferenced(
        "quiet-degenerate", 100, 100, AffineGeoTransform::new([10.0, 2.0, 4.0, 50.0, 1.0, 2.0])));
    std::assert_eq!(warnings_mentioning("'quiet-degenerate'"), 1);

    for step in 0..3 {
        std::assert!(registry.locate(&Point::new(step as f64, -1.0)).is_none());
    }
    std::assert_eq!(warnings_mentioning("'quiet-degenerate'"), 1);
    std::assert_eq!(warnings_mentioning("containment scan"), 0);
}

#[test]
fn test_combined_bounds() {
    let mut registry = RasterRegistry::new();
    std::assert!(registry.combined_bounds().is_none());

    registry.register(north_up("first", 10.0, 50.0));
    registry.register(north_up("second", 60.0, 40.0));

    let bounds = registry.combined_bounds().unwrap();
    std::assert_eq!((bounds.min_x, bounds.min_y, bounds.max_x, bounds.max_y), (0.0, -60.0, 100.0, 0.0));

    let geo = registry.geographic_bounds().unwrap();
    std::assert_eq!((geo.min_x, geo.min_y, geo.max_x, geo.max_y), (10.0, -10.0, 110.0, 50.0));
}

#[test]
fn test_unregister_primary_promotes_next_georeferenced() {
    let mut registry = RasterRegistry::new();
    registry.register(RasterDescriptor::plain("photo", 10, 10));
    let first = registry.register(north_up("first", 10.0, 50.0));
    let second = registry.register(north_up("second", 60.0, 50.0));

    let removed = registry.unregister(first).unwrap();
    std::assert_eq!(removed.name(), "first");
    std::assert_eq!(registry.primary().map(|e| e.id()), Some(second));
    // Placement stays anchored to the first raster of the session
    std::assert_eq!(registry.anchor(), Some(GeoPoint::new(10.0, 50.0)));
    std::assert_eq!(registry.get(second).unwrap().scene_origin(), Point::new(50.0, 0.0));

    registry.unregister(second).unwrap();
    std::assert!(registry.primary().is_none());
}

#[test]
fn test_unregister_unknown_raster() {
    let mut registry = RasterRegistry::new();
    let result = registry.unregister(RasterId(42));
    std::assert!(std::matches!(result, Err(NavError::UnknownRaster(RasterId(42)))));
}

#[test]
fn test_unregister_all_resets_primary_and_anchor() {
    let mut registry = RasterRegistry::new();
    registry.register(north_up("first", 10.0, 50.0));
    registry.unregister_all();

    std::assert!(registry.is_empty());
    std::assert!(registry.primary().is_none());
    std::assert!(registry.anchor().is_none());

    let next = registry.register(north_up("next", -5.0, 5.0));
    std::assert_eq!(registry.primary().map(|e| e.id()), Some(next));
    std::assert_eq!(registry.get(next).unwrap().scene_origin(), Point::new(0.0, 0.0));
}

struct FixedPlacement(Point);

impl ScenePlacement for FixedPlacement {
    fn scene_origin(&self, _transform: Option<&AffineGeoTransform>, _anchor: Option<GeoPoint>) -> Point {
        self.0
    }
}

#[test]
fn test_custom_placement_is_honoured() {
    let mut registry = RasterRegistry::with_placement(Box::new(FixedPlacement(Point::new(7.0, 3.0))));
    let id = registry.register(north_up("first", 10.0, 50.0));

    let entry = registry.get(id).unwrap();
    std::assert_eq!(entry.scene_origin(), Point::new(7.0, 3.0));
    std::assert_eq!(registry.find_containing(&Point::new(8.0, 2.0)).map(|e| e.id()), Some(id));
}
