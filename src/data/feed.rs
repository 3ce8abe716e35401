//! Normalization of earthquake catalog feeds into [`EventMarker`]s.
//!
//! Accepts the GeoJSON `FeatureCollection` layout served by the USGS
//! real-time feeds. Fetching is left to the caller; this module only turns
//! the document into markers in render order.

use crate::{
    core::geo::GeoPoint,
    data::event::EventMarker,
    MapError, Result,
};
use fxhash::FxHashSet;
use serde::Deserialize;
use std::path::Path;

const UNKNOWN_PLACE: &str = "Unknown location";

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    features: Vec<QuakeFeature>,
}

#[derive(Debug, Deserialize)]
struct QuakeFeature {
    id: Option<serde_json::Value>,
    geometry: Option<QuakeGeometry>,
    #[serde(default)]
    properties: QuakeProperties,
}

#[derive(Debug, Deserialize)]
struct QuakeGeometry {
    #[serde(default)]
    coordinates: Vec<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct QuakeProperties {
    mag: Option<f64>,
    place: Option<String>,
    time: Option<i64>,
}

/// Which events from a feed to keep
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedFilter {
    pub min_magnitude: Option<f64>,
    /// Drop events older than this epoch timestamp
    pub since_millis: Option<i64>,
}

impl FeedFilter {
    pub fn accepts(&self, marker: &EventMarker) -> bool {
        self.min_magnitude.map_or(true, |min| marker.magnitude >= min)
            && self.since_millis.map_or(true, |since| marker.timestamp_millis >= since)
    }
}

/// Parses a feed document, applies `filter`, and returns markers newest first.
///
/// Features without an id are dropped, duplicate ids keep their first
/// occurrence, and features without usable geometry are kept with
/// `location: None` so the list still reflects the catalog.
pub fn parse_feed(json: &str, filter: &FeedFilter) -> Result<Vec<EventMarker>> {
    let collection: FeatureCollection = serde_json::from_str(json)?;
    if collection.kind != "FeatureCollection" {
        return Err(MapError::Feed(format!(
            "expected FeatureCollection, got {}",
            collection.kind
        )));
    }

    let mut seen = FxHashSet::default();
    let mut markers = Vec::with_capacity(collection.features.len());

    for feature in collection.features {
        let Some(id) = feature_id(feature.id.as_ref()) else {
            log::debug!("dropping feed feature without id");
            continue;
        };
        if !seen.insert(id.clone()) {
            log::debug!("dropping duplicate feed feature {id}");
            continue;
        }

        let location = feature.geometry.as_ref().and_then(geometry_location);
        if location.is_none() {
            log::debug!("feed feature {id} has no usable geometry");
        }

        let marker = EventMarker {
            id,
            location,
            magnitude: feature.properties.mag.unwrap_or(0.0).max(0.0),
            place: feature
                .properties
                .place
                .unwrap_or_else(|| UNKNOWN_PLACE.to_string()),
            timestamp_millis: feature.properties.time.unwrap_or(0),
        };

        if filter.accepts(&marker) {
            markers.push(marker);
        }
    }

    markers.sort_by(|a, b| b.timestamp_millis.cmp(&a.timestamp_millis));
    log::debug!("parsed {} feed events", markers.len());
    Ok(markers)
}

/// Reads a saved feed document from disk and parses it
pub fn load_feed(path: impl AsRef<Path>, filter: &FeedFilter) -> Result<Vec<EventMarker>> {
    let path = path.as_ref();
    log::debug!("loading feed from {}", path.display());
    let json = std::fs::read_to_string(path)?;
    parse_feed(&json, filter)
}

fn feature_id(id: Option<&serde_json::Value>) -> Option<String> {
    match id? {
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn geometry_location(geometry: &QuakeGeometry) -> Option<GeoPoint> {
    match geometry.coordinates.as_slice() {
        // GeoJSON order is [lng, lat, depth?]
        [lng, lat, ..] => {
            let point = GeoPoint::new(*lat, *lng);
            (point.is_finite() && point.is_valid()).then_some(point)
        }
        _ => None,
    }
}
