//! Parsing of free-text coordinates typed into the search box.
//!
//! Accepted forms: `37.77, -122.41`, `37.77 -122.41`, and hemisphere
//! suffixes such as `37.77N 122.41W` (latitude first).

use crate::{core::geo::GeoPoint, MapError, Result};

pub fn parse_coordinates(input: &str) -> Result<GeoPoint> {
    let parts: Vec<&str> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();

    let [lat, lng] = parts.as_slice() else {
        return Err(MapError::InvalidCoordinates(format!(
            "expected 'lat, lng', got '{}'",
            input.trim()
        )));
    };

    let lat = parse_component(lat, 'N', 'S')?;
    let lng = parse_component(lng, 'E', 'W')?;

    if !(-90.0..=90.0).contains(&lat) {
        return Err(MapError::InvalidCoordinates(format!(
            "latitude {lat} out of range"
        )));
    }
    if !(-180.0..=180.0).contains(&lng) {
        return Err(MapError::InvalidCoordinates(format!(
            "longitude {lng} out of range"
        )));
    }

    Ok(GeoPoint::new(lat, lng))
}

fn parse_component(raw: &str, positive: char, negative: char) -> Result<f64> {
    let raw = raw.trim_end_matches('°');
    let (number, sign) = match raw.chars().last().map(|c| c.to_ascii_uppercase()) {
        Some(c) if c == positive => (&raw[..raw.len() - 1], 1.0),
        Some(c) if c == negative => (&raw[..raw.len() - 1], -1.0),
        _ => (raw, 1.0),
    };

    let value: f64 = number
        .trim_end_matches('°')
        .parse()
        .map_err(|_| MapError::InvalidCoordinates(format!("'{raw}' is not a number")))?;

    if !value.is_finite() {
        return Err(MapError::InvalidCoordinates(format!("'{raw}' is not finite")));
    }
    if sign < 0.0 && value < 0.0 {
        return Err(MapError::InvalidCoordinates(format!(
            "'{raw}' mixes a sign with a hemisphere"
        )));
    }

    Ok(value * sign)
}
