//! Tests for session files

use std::time::Duration;

use crate::coordinate::CoordinateSystem;
use crate::navigation::{FallbackPolicy, NavError};
use crate::session::{LayerId, LayerSpec, Session, SessionConfig};
use crate::utils::format_utils::CoordinateFormat;

const SESSION: &str = r#"
[display]
coordinate_format = "verbose"
marker_seconds = 2.5
jump_zoom = 4

[fallback]
policy = "linear-scale"

[[layer]]
kind = "image"
name = "scan.png"
width = 640
height = 480

[[layer]]
kind = "raster"
name = "basemap.tif"
width = 100
height = 100
geotransform = [10, 0.5, 0, 50, 0, -0.5]
crs = "EPSG:4326"

[[layer]]
kind = "vector"
name = "roads.shp"
bounds = [0.0, -50.0, 50.0, 0.0]
"#;

#[test]
fn test_parse_full_session() {
    let config = SessionConfig::from_str(SESSION).unwrap();

    assert_eq!(config.display.coordinate_format, CoordinateFormat::Verbose);
    assert_eq!(config.display.marker_lifetime, Duration::from_millis(2500));
    assert_eq!(config.display.jump_zoom, Some(4.0));
    assert_eq!(config.fallback, FallbackPolicy::LinearScale { units_per_degree: 1000.0 });
    assert_eq!(config.layers.len(), 3);

    match &config.layers[1] {
        LayerSpec::Raster(descriptor) => {
            assert_eq!(descriptor.name, "basemap.tif");
            assert_eq!(descriptor.crs, Some(CoordinateSystem::WGS84));
            assert_eq!(descriptor.transform.unwrap().coefficients(), [10.0, 0.5, 0.0, 50.0, 0.0, -0.5]);
        },
        other => panic!("expected raster layer, got {:?}", other),
    }
}

#[test]
fn test_defaults_for_empty_session() {
    let config = SessionConfig::from_str("").unwrap();
    assert_eq!(config.display.coordinate_format, CoordinateFormat::Compact);
    assert_eq!(config.display.marker_lifetime, Duration::from_secs(5));
    assert_eq!(config.fallback, FallbackPolicy::AnchorOffset);
    assert!(config.layers.is_empty());
}

#[test]
fn test_session_loads_layers_in_order() {
    let config = SessionConfig::from_str(SESSION).unwrap();
    let mut session = Session::from_config(&config);

    assert_eq!(session.registry().len(), 2);
    assert_eq!(session.vectors().len(), 1);
    assert_eq!(session.registry().primary().map(|e| e.name()), Some("basemap.tif"));
    assert_eq!(session.registry().entries()[0].name(), "scan.png");

    let extra = session.load(config.layers[2].clone());
    assert_eq!(extra, LayerId::Vector(1));

    session.clear();
    assert!(session.is_empty());
    assert!(session.registry().primary().is_none());
}

#[test]
fn test_invalid_sessions_are_rejected() {
    let cases = [
        "[[layer]]\nname = \"x\"\n",
        "[[layer]]\nkind = \"raster\"\nwidth = 10\nheight = 10\ngeotransform = [1, 2, 3]\n",
        "[[layer]]\nkind = \"image\"\nwidth = 0\nheight = 10\n",
        "[[layer]]\nkind = \"vector\"\nbounds = [1, 2]\n",
        "[[layer]]\nkind = \"tiles\"\n",
        "[display]\ncoordinate_format = \"fancy\"\n",
        "[display]\nmarker_seconds = -1\n",
        "[display]\nmarker_seconds = 1e300\n",
        "[display]\nmarker_seconds = 1e19\n",
        "[display]\nmarker_seconds = nan\n",
        "[display]\njump_zoom = 0\n",
        "[display]\njump_zoom = -2.5\n",
        "[display]\njump_zoom = nan\n",
        "[fallback]\npolicy = \"nearest\"\n",
        "this is not toml",
    ];

    for case in cases {
        let result = SessionConfig::from_str(case);
        assert!(matches!(result, Err(NavError::ConfigError(_))), "accepted: {}", case);
    }
}

#[test]
fn test_marker_lifetime_limits() {
    let config = SessionConfig::from_str("[display]\nmarker_seconds = 86400\n").unwrap();
    assert_eq!(config.display.marker_lifetime, Duration::from_secs(86_400));

    let config = SessionConfig::from_str("[display]\nmarker_seconds = 0\n").unwrap();
    assert_eq!(config.display.marker_lifetime, Duration::ZERO);
}
