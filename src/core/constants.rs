//! Engine-wide defaults for the seismic map.
//! Keeping them in a single place makes it easier to tweak magic numbers.

/// Lower zoom bound used when no configuration overrides it.
pub const DEFAULT_ZOOM_MIN: f64 = 0.5;

/// Upper zoom bound used when no configuration overrides it.
pub const DEFAULT_ZOOM_MAX: f64 = 5.0;

/// Floor applied to any configured minimum zoom so `to_plane` never divides by zero.
pub const MIN_POSITIVE_ZOOM: f64 = 1e-6;

/// Zoom multiplier for one wheel tick towards the user (deltaY < 0).
pub const WHEEL_ZOOM_IN_FACTOR: f64 = 1.1;

/// Zoom multiplier for one wheel tick away from the user (deltaY > 0).
pub const WHEEL_ZOOM_OUT_FACTOR: f64 = 0.9;

/// Pointer travel (device px) after which a press no longer counts as a click.
pub const DRAG_THRESHOLD_PX: f64 = 3.0;

/// Zoom applied when centering on a searched location.
pub const SEARCH_ZOOM: f64 = 5.0;

/// Zoom applied when centering on the user's own location.
pub const USER_LOCATION_ZOOM: f64 = 4.0;

/// Spacing of the graticule in degrees.
pub const GRID_SPACING_DEG: f64 = 30.0;

/// Finest graticule the renderer will draw; caps a pass at a few hundred lines.
pub const MIN_GRID_SPACING_DEG: f64 = 1.0;

/// Coarsest graticule: a single line per axis beyond the edges.
pub const MAX_GRID_SPACING_DEG: f64 = 180.0;

/// Marker opacity when not highlighted.
pub const MARKER_OPACITY: f32 = 0.7;

/// Marker opacity for the highlighted event.
pub const HIGHLIGHT_OPACITY: f32 = 1.0;

/// Decorative continent blocks as fractions of the plane: (x, y, width, height).
/// Placement is stylized, not geodata.
pub const LANDMASSES: [(f64, f64, f64, f64); 6] = [
    (0.10, 0.18, 0.20, 0.24), // North America
    (0.22, 0.50, 0.10, 0.26), // South America
    (0.45, 0.16, 0.10, 0.16), // Europe
    (0.45, 0.36, 0.13, 0.30), // Africa
    (0.57, 0.14, 0.28, 0.28), // Asia
    (0.80, 0.58, 0.10, 0.12), // Australia
];
