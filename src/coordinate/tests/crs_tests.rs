use crate::coordinate::CoordinateSystem;

#[test]
fn test_parse_labels() {
    assert_eq!(CoordinateSystem::parse("EPSG:4326").unwrap(), CoordinateSystem::WGS84);
    assert_eq!(CoordinateSystem::parse(" epsg:3857 ").unwrap(), CoordinateSystem::WebMercator);
    assert_eq!(CoordinateSystem::parse("32633").unwrap(), CoordinateSystem::UTM(33, true));
    assert_eq!(CoordinateSystem::parse("EPSG:32719").unwrap(), CoordinateSystem::UTM(19, false));
    assert_eq!(CoordinateSystem::parse("EPSG:2056").unwrap(), CoordinateSystem::Other(2056));
    assert!(CoordinateSystem::parse("WGS84").is_err());
}

#[test]
fn test_descriptions() {
    assert_eq!(CoordinateSystem::UTM(33, true).description(), "UTM Zone 33N (EPSG:32633)");
    assert_eq!(CoordinateSystem::Other(2056).description(), "EPSG:2056");
}
