//! Proximity alerting: which events happened close to the user.

use crate::{core::geo::GeoPoint, data::event::EventMarker};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProximityAlert {
    pub event_id: String,
    pub distance_km: f64,
    pub magnitude: f64,
    pub place: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProximityAlertEvaluator {
    pub radius_km: f64,
    pub min_magnitude: f64,
}

impl Default for ProximityAlertEvaluator {
    fn default() -> Self {
        Self {
            radius_km: 500.0,
            min_magnitude: 4.0,
        }
    }
}

impl ProximityAlertEvaluator {
    pub fn new(radius_km: f64, min_magnitude: f64) -> Self {
        Self {
            radius_km,
            min_magnitude,
        }
    }

    /// Alerts for every event within the radius, nearest first.
    /// Events without a location never alert.
    pub fn evaluate(&self, user: &GeoPoint, markers: &[EventMarker]) -> Vec<ProximityAlert> {
        if !user.is_finite() {
            return Vec::new();
        }

        let mut alerts: Vec<ProximityAlert> = markers
            .iter()
            .filter(|m| m.magnitude >= self.min_magnitude)
            .filter_map(|m| {
                let distance_km = user.distance_km(&m.drawable_location()?);
                (distance_km <= self.radius_km).then(|| ProximityAlert {
                    event_id: m.id.clone(),
                    distance_km,
                    magnitude: m.magnitude,
                    place: m.place.clone(),
                })
            })
            .collect();

        alerts.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
        if !alerts.is_empty() {
            log::debug!("{} events within {} km", alerts.len(), self.radius_km);
        }
        alerts
    }
}
