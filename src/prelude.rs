//! Prelude module for common quakemap types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use quakemap::prelude::*;`

pub use crate::core::{
    config::{MapConfig, MapProfile},
    geo::{DevicePoint, GeoPoint, PlanePoint, Point, Size},
    map::QuakeMap,
    projection::{project, unproject, Equirectangular},
    viewport::ViewportTransform,
};

pub use crate::data::{
    event::{EventMarker, MagnitudeBucket},
    feed::{load_feed, parse_feed, FeedFilter},
};

pub use crate::input::{
    controller::{GestureState, InteractionController, PointerDragState},
    events::{EventHandled, InputEvent, InputResponse, MapEvent},
};

pub use crate::rendering::{
    context::{DrawCommand, RenderContext},
    renderer::{MarkerPlacement, RenderScene, Renderer},
    style::{Color, MapStyle, MarkerStyle},
    surface::DrawSurface,
};

pub use crate::alerts::proximity::{ProximityAlert, ProximityAlertEvaluator};

pub use crate::search::coords::parse_coordinates;

#[cfg(feature = "egui")]
pub use crate::{rendering::egui_surface::EguiSurface, ui::widget::QuakeMapWidget};

#[cfg(feature = "wasm")]
pub use crate::rendering::web_surface::WebCanvasSurface;

pub use crate::{Error as MapError, Result};
