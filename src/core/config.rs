//! Configuration for map interaction and appearance
//!
//! A [`MapProfile`] resolves to a concrete [`MapConfig`]; configs can also be
//! loaded from JSON and are validated before use.

use crate::{
    core::constants::{
        DEFAULT_ZOOM_MAX, DEFAULT_ZOOM_MIN, DRAG_THRESHOLD_PX, GRID_SPACING_DEG,
        MAX_GRID_SPACING_DEG, MIN_GRID_SPACING_DEG, SEARCH_ZOOM, USER_LOCATION_ZOOM,
        WHEEL_ZOOM_IN_FACTOR, WHEEL_ZOOM_OUT_FACTOR,
    },
    rendering::style::MapStyle,
    MapError, Result,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum MapProfile {
    #[default]
    Default,
    /// Small embedded maps: tighter zoom range, smaller markers
    Compact,
    /// Large displays: deeper zoom and bolder markers
    Presentation,
    Custom(MapConfig),
}

impl MapProfile {
    pub fn resolve(&self) -> MapConfig {
        match self {
            Self::Default => MapConfig::default(),
            Self::Compact => {
                let mut style = MapStyle::default();
                for marker in style.markers.iter_mut() {
                    marker.radius *= 0.75;
                }
                MapConfig {
                    zoom_max: 3.0,
                    search_zoom: 3.0,
                    user_location_zoom: 3.0,
                    style,
                    ..MapConfig::default()
                }
            }
            Self::Presentation => {
                let mut style = MapStyle::default();
                for marker in style.markers.iter_mut() {
                    marker.radius *= 1.25;
                }
                style.grid_width = 1.5;
                MapConfig {
                    zoom_max: 8.0,
                    grid_spacing_deg: 15.0,
                    style,
                    ..MapConfig::default()
                }
            }
            Self::Custom(config) => config.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub zoom_min: f64,
    pub zoom_max: f64,
    pub wheel_zoom_in_factor: f64,
    pub wheel_zoom_out_factor: f64,
    pub drag_threshold_px: f64,
    pub search_zoom: f64,
    pub user_location_zoom: f64,
    pub grid_spacing_deg: f64,
    pub style: MapStyle,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            zoom_min: DEFAULT_ZOOM_MIN,
            zoom_max: DEFAULT_ZOOM_MAX,
            wheel_zoom_in_factor: WHEEL_ZOOM_IN_FACTOR,
            wheel_zoom_out_factor: WHEEL_ZOOM_OUT_FACTOR,
            drag_threshold_px: DRAG_THRESHOLD_PX,
            search_zoom: SEARCH_ZOOM,
            user_location_zoom: USER_LOCATION_ZOOM,
            grid_spacing_deg: GRID_SPACING_DEG,
            style: MapStyle::default(),
        }
    }
}

impl MapConfig {
    /// Parses and validates a JSON config; missing fields take defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: MapConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.zoom_min > 0.0) || !self.zoom_max.is_finite() {
            return Err(MapError::Config(format!(
                "zoom bounds must be positive and finite, got [{}, {}]",
                self.zoom_min, self.zoom_max
            )));
        }
        if self.zoom_min > self.zoom_max {
            return Err(MapError::Config(format!(
                "zoom_min {} exceeds zoom_max {}",
                self.zoom_min, self.zoom_max
            )));
        }
        if !(self.wheel_zoom_in_factor > 1.0) || !(self.wheel_zoom_out_factor > 0.0 && self.wheel_zoom_out_factor < 1.0) {
            return Err(MapError::Config(
                "wheel zoom factors must satisfy out in (0, 1) and in > 1".to_string(),
            ));
        }
        if !(self.drag_threshold_px >= 0.0) {
            return Err(MapError::Config("drag_threshold_px must be >= 0".to_string()));
        }
        if !(MIN_GRID_SPACING_DEG..=MAX_GRID_SPACING_DEG).contains(&self.grid_spacing_deg) {
            return Err(MapError::Config(format!(
                "grid_spacing_deg must be in [{MIN_GRID_SPACING_DEG}, {MAX_GRID_SPACING_DEG}], got {}",
                self.grid_spacing_deg
            )));
        }
        self.style.validate()
    }
}
