//! # quakemap
//!
//! Interactive world map for near-real-time seismic events.
//!
//! The core is a small projection-and-interaction engine: an equirectangular
//! projection, a pan/zoom viewport transform, a renderer that paints a
//! stylized backdrop plus magnitude-scaled markers, and an interaction
//! controller that turns pointer input into pan, pivot-preserving zoom and
//! marker selection.

pub mod alerts;
pub mod core;
pub mod data;
pub mod input;
pub mod prelude;
pub mod rendering;
pub mod search;
#[cfg(feature = "egui")]
pub mod ui;
pub use crate::core::constants;

// Receivers handed out by `QuakeMap::subscribe`
pub use crossbeam_channel;

// Re-export public API
pub use crate::core::{
    config::{MapConfig, MapProfile},
    geo::{DevicePoint, GeoPoint, PlanePoint, Point, Size},
    map::QuakeMap,
    viewport::ViewportTransform,
};

pub use data::{event::EventMarker, event::MagnitudeBucket, feed::load_feed, feed::parse_feed, feed::FeedFilter};

pub use input::{controller::InteractionController, events::InputEvent, events::MapEvent};

pub use rendering::{context::RenderContext, renderer::Renderer, surface::DrawSurface};

pub use alerts::proximity::ProximityAlertEvaluator;

pub use search::coords::parse_coordinates;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Feed error: {0}")]
    Feed(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Error type alias for convenience
pub type Error = MapError;
