use crate::coordinate::{CoordinateSystem, GeoPoint, Point};
use crate::navigation::{Extent, SceneLookup};
use crate::raster::RasterId;
use crate::utils::format_utils::{
    format_coordinate, format_extent, format_pointer_status, CoordinateFormat,
};

#[test]
fn test_compact_precision_follows_magnitude() {
    assert_eq!(format_coordinate(123.456, CoordinateFormat::Compact), "123.5");
    assert_eq!(format_coordinate(-45.678, CoordinateFormat::Compact), "-45.68");
    assert_eq!(format_coordinate(5.0, CoordinateFormat::Compact), "5.000");
    assert_eq!(format_coordinate(5.0, CoordinateFormat::Verbose), "5.000000");
}

#[test]
fn test_format_names() {
    assert_eq!(CoordinateFormat::parse("Verbose").unwrap(), CoordinateFormat::Verbose);
    assert_eq!(CoordinateFormat::parse(" compact ").unwrap(), CoordinateFormat::Compact);
    assert!(CoordinateFormat::parse("dms").is_err());
}

#[test]
fn test_extent_text() {
    let geographic = Extent::Geographic {
        top_left: GeoPoint::new(10.0, 50.0),
        bottom_right: GeoPoint::new(60.0, 0.0),
        raster: RasterId(0),
    };
    assert_eq!(format_extent(&geographic, CoordinateFormat::Compact), "Extent: 10.00, 50.00 : 60.00, 0.000");

    let scene = Extent::Scene {
        top_left: Point::new(0.0, 0.0),
        bottom_right: Point::new(640.0, 480.0),
    };
    assert_eq!(format_extent(&scene, CoordinateFormat::Compact), "Extent (scene): 0.000, 0.000 : 640.0, 480.0");
    assert_eq!(format_extent(&Extent::Empty, CoordinateFormat::Compact), "Extent: no data loaded");
}

#[test]
fn test_pointer_status() {
    let lookup = SceneLookup::Geographic {
        point: GeoPoint::new(35.0, 5.0),
        raster: RasterId(0),
        pixel: Point::new(50.0, 90.0),
    };
    let scene = Point::new(25.0, -45.0);

    assert_eq!(
        format_pointer_status(&scene, &lookup, Some(CoordinateSystem::WGS84), CoordinateFormat::Compact),
        "Lon: 35.00  Lat: 5.000  [WGS 84 (EPSG:4326)]"
    );
    assert_eq!(
        format_pointer_status(&scene, &lookup, None, CoordinateFormat::Compact),
        "Lon: 35.00  Lat: 5.000"
    );
    assert_eq!(
        format_pointer_status(&Point::new(320.0, 12.5), &SceneLookup::NotGeographic, None, CoordinateFormat::Compact),
        "X: 320.0  Y: 12.50"
    );
}
