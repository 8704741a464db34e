use crate::navigation::NavError;
use crate::utils::coordinate_utils::{parse_geo_point, parse_scene_point};

#[test]
fn test_plain_pairs_are_lon_then_lat() {
    for text in ["35.2,25.1", "35.2, 25.1", " 35.2 25.1 ", "35.2;25.1"] {
        let point = parse_geo_point(text).unwrap();
        assert_eq!((point.lon, point.lat), (35.2, 25.1), "input {:?}", text);
    }

    let point = parse_geo_point("-21.5,-.5").unwrap();
    assert_eq!((point.lon, point.lat), (-21.5, -0.5));
}

#[test]
fn test_hemisphere_letters() {
    let point = parse_geo_point("25.1N 35.2E").unwrap();
    assert_eq!((point.lon, point.lat), (35.2, 25.1));

    let point = parse_geo_point("21.9W, 64.1N").unwrap();
    assert_eq!((point.lon, point.lat), (-21.9, 64.1));

    let point = parse_geo_point("33.9s 18.4e").unwrap();
    assert_eq!((point.lon, point.lat), (18.4, -33.9));

    // One letter is enough to fix the order
    let point = parse_geo_point("10, 20E").unwrap();
    assert_eq!((point.lon, point.lat), (20.0, 10.0));
}

#[test]
fn test_rejected_input() {
    for text in ["", "35.2", "abc, def", "1,2,3", "10N 20S", "10E,20W"] {
        assert!(matches!(parse_geo_point(text), Err(NavError::InvalidCoordinate(_))), "accepted {:?}", text);
    }
}

#[test]
fn test_scene_points() {
    let point = parse_scene_point("320, -12.5").unwrap();
    assert_eq!((point.x, point.y), (320.0, -12.5));

    assert!(parse_scene_point("10N, 20E").is_err());
}
