//! Parsing of typed coordinates
//!
//! Accepts what users paste into a "go to coordinate" box: two decimal
//! numbers separated by a comma, semicolon or whitespace, each optionally
//! followed by a hemisphere letter.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::coordinate::{GeoPoint, Point};
use crate::navigation::errors::{NavError, NavResult};

lazy_static! {
    static ref COORDINATE_PAIR: Regex = Regex::new(
        r"^\s*([+-]?(?:\d+(?:\.\d*)?|\.\d+))\s*([NSEWnsew])?\s*[,;\s]\s*([+-]?(?:\d+(?:\.\d*)?|\.\d+))\s*([NSEWnsew])?\s*$"
    ).expect("coordinate pattern is valid");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Longitude,
    Latitude,
}

fn hemisphere(letter: Option<&str>) -> Option<(Axis, f64)> {
    match letter?.to_ascii_uppercase().as_str() {
        "E" => Some((Axis::Longitude, 1.0)),
        "W" => Some((Axis::Longitude, -1.0)),
        "N" => Some((Axis::Latitude, 1.0)),
        "S" => Some((Axis::Latitude, -1.0)),
        _ => None,
    }
}

struct RawPair<'t> {
    first: f64,
    first_letter: Option<&'t str>,
    second: f64,
    second_letter: Option<&'t str>,
}

fn split_pair(text: &str) -> NavResult<RawPair<'_>> {
    let caps = COORDINATE_PAIR.captures(text)
        .ok_or_else(|| NavError::InvalidCoordinate(format!("'{}' is not a coordinate pair", text.trim())))?;

    let number = |index: usize| {
        caps[index].parse::<f64>()
            .map_err(|_| NavError::InvalidCoordinate(format!("Invalid number: {}", &caps[index])))
    };

    Ok(RawPair {
        first: number(1)?,
        first_letter: caps.get(2).map(|m| m.as_str()),
        second: number(3)?,
        second_letter: caps.get(4).map(|m| m.as_str()),
    })
}

/// Parse "lon, lat" text into a geographic point
///
/// Without hemisphere letters the order is longitude then latitude. Letters
/// may reorder the pair ("25N 35E") and W/S negate their value.
pub fn parse_geo_point(text: &str) -> NavResult<GeoPoint> {
    let raw = split_pair(text)?;

    let first_hemi = hemisphere(raw.first_letter);
    let second_hemi = hemisphere(raw.second_letter);

    let first_axis = first_hemi.map(|(axis, _)| axis);
    let second_axis = second_hemi.map(|(axis, _)| axis);
    if first_axis.is_some() && first_axis == second_axis {
        return Err(NavError::InvalidCoordinate(format!("'{}' names the same axis twice", text.trim())));
    }

    let first_value = raw.first * first_hemi.map_or(1.0, |(_, sign)| sign);
    let second_value = raw.second * second_hemi.map_or(1.0, |(_, sign)| sign);

    let latitude_first = first_axis == Some(Axis::Latitude) || second_axis == Some(Axis::Longitude);
    let point = if latitude_first {
        GeoPoint::new(second_value, first_value)
    } else {
        GeoPoint::new(first_value, second_value)
    };

    debug!("Parsed coordinate '{}' as {}", text.trim(), point);
    Ok(point)
}

/// Parse "x, y" text into a scene point; hemisphere letters are rejected
pub fn parse_scene_point(text: &str) -> NavResult<Point> {
    let raw = split_pair(text)?;
    if raw.first_letter.is_some() || raw.second_letter.is_some() {
        return Err(NavError::InvalidCoordinate(format!(
            "'{}' has hemisphere letters but scene coordinates have none", text.trim())));
    }
    Ok(Point::new(raw.first, raw.second))
}
