use crate::core::geo::GeoPoint;
use serde::{Deserialize, Serialize};

/// A single seismic event as handed over by the data layer.
///
/// The map only reads markers during a render or hit-test pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventMarker {
    pub id: String,
    /// `None` when the catalog entry had no usable geometry
    pub location: Option<GeoPoint>,
    pub magnitude: f64,
    pub place: String,
    pub timestamp_millis: i64,
}

impl EventMarker {
    pub fn new(id: impl Into<String>, location: GeoPoint, magnitude: f64) -> Self {
        Self {
            id: id.into(),
            location: Some(location),
            magnitude,
            place: String::new(),
            timestamp_millis: 0,
        }
    }

    pub fn with_place(mut self, place: impl Into<String>) -> Self {
        self.place = place.into();
        self
    }

    pub fn with_timestamp(mut self, timestamp_millis: i64) -> Self {
        self.timestamp_millis = timestamp_millis;
        self
    }

    /// Location if it is present and finite; markers without one are skipped
    pub fn drawable_location(&self) -> Option<GeoPoint> {
        self.location.filter(GeoPoint::is_finite)
    }

    pub fn bucket(&self) -> MagnitudeBucket {
        MagnitudeBucket::from_magnitude(self.magnitude)
    }
}

/// Magnitude classes driving marker radius and color
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MagnitudeBucket {
    /// Below 3
    Minor,
    /// [3, 4)
    Light,
    /// [4, 5)
    Moderate,
    /// [5, 6)
    Strong,
    /// [6, 7)
    Major,
    /// 7 and above
    Great,
}

impl MagnitudeBucket {
    pub const ALL: [MagnitudeBucket; 6] = [
        MagnitudeBucket::Minor,
        MagnitudeBucket::Light,
        MagnitudeBucket::Moderate,
        MagnitudeBucket::Strong,
        MagnitudeBucket::Major,
        MagnitudeBucket::Great,
    ];

    pub fn from_magnitude(magnitude: f64) -> Self {
        // NaN falls through every comparison into the lowest bucket
        if magnitude >= 7.0 {
            Self::Great
        } else if magnitude >= 6.0 {
            Self::Major
        } else if magnitude >= 5.0 {
            Self::Strong
        } else if magnitude >= 4.0 {
            Self::Moderate
        } else if magnitude >= 3.0 {
            Self::Light
        } else {
            Self::Minor
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Minor => "<3",
            Self::Light => "[3,4)",
            Self::Moderate => "[4,5)",
            Self::Strong => "[5,6)",
            Self::Major => "[6,7)",
            Self::Great => ">=7",
        }
    }
}

impl std::fmt::Display for MagnitudeBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
