use crate::core::{
    constants::{DEFAULT_ZOOM_MAX, DEFAULT_ZOOM_MIN, MIN_POSITIVE_ZOOM},
    geo::{DevicePoint, GeoPoint, PlanePoint, Point, Size},
    projection,
};
use serde::{Deserialize, Serialize};

/// Pan offset and zoom scale mapping plane coordinates to device pixels.
///
/// `device = plane * zoom + pan`. Zoom is always kept inside
/// `[zoom_min, zoom_max]`; pan is unconstrained so the map can be dragged
/// past the data extents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportTransform {
    pan: Point,
    zoom: f64,
    zoom_min: f64,
    zoom_max: f64,
}

impl ViewportTransform {
    /// Creates an identity transform (zoom 1, pan 0) with the given zoom bounds
    pub fn new(zoom_min: f64, zoom_max: f64) -> Self {
        let zoom_min = if zoom_min.is_finite() {
            zoom_min.max(MIN_POSITIVE_ZOOM)
        } else {
            DEFAULT_ZOOM_MIN
        };
        let zoom_max = if zoom_max.is_finite() {
            zoom_max.max(zoom_min)
        } else {
            DEFAULT_ZOOM_MAX.max(zoom_min)
        };

        Self {
            pan: Point::default(),
            zoom: 1.0_f64.clamp(zoom_min, zoom_max),
            zoom_min,
            zoom_max,
        }
    }

    pub fn pan(&self) -> Point {
        self.pan
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn zoom_bounds(&self) -> (f64, f64) {
        (self.zoom_min, self.zoom_max)
    }

    /// Maps a plane point to device pixels
    pub fn to_device(&self, plane: &PlanePoint) -> DevicePoint {
        plane.multiply(self.zoom).add(&self.pan)
    }

    /// Maps a device pixel back to the plane
    pub fn to_plane(&self, device: &DevicePoint) -> PlanePoint {
        // zoom >= MIN_POSITIVE_ZOOM by construction
        device.subtract(&self.pan).multiply(1.0 / self.zoom)
    }

    /// Sets the zoom directly, clamped to bounds
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() {
            self.zoom = zoom.clamp(self.zoom_min, self.zoom_max);
        }
    }

    pub fn set_pan(&mut self, pan: Point) {
        self.pan = pan;
    }

    /// Adds a device-pixel delta to the pan offset
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan = Point::new(self.pan.x + dx, self.pan.y + dy);
    }

    /// Multiplies zoom by `factor` while keeping the plane point under
    /// `pivot` at the same device position.
    ///
    /// Non-positive or non-finite factors are ignored.
    pub fn zoom_at(&mut self, pivot: &DevicePoint, factor: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            log::debug!("ignoring zoom factor {factor}");
            return;
        }

        let anchor = self.to_plane(pivot);
        self.zoom = (self.zoom * factor).clamp(self.zoom_min, self.zoom_max);
        self.pan = pivot.subtract(&anchor.multiply(self.zoom));
    }

    /// Sets pan and zoom so that `geo` lands in the middle of the device.
    /// A non-finite location leaves the view unchanged.
    pub fn center_on(&mut self, geo: &GeoPoint, plane: Size, device: Size, target_zoom: f64) {
        if !geo.is_finite() {
            log::debug!("ignoring center_on for non-finite location {geo:?}");
            return;
        }
        self.set_zoom(target_zoom);
        let projected = projection::project(geo, plane);
        self.pan = device.center().subtract(&projected.multiply(self.zoom));
    }

    /// Returns to zoom 1 and zero pan
    pub fn reset(&mut self) {
        self.pan = Point::default();
        self.zoom = 1.0_f64.clamp(self.zoom_min, self.zoom_max);
    }
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self::new(DEFAULT_ZOOM_MIN, DEFAULT_ZOOM_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(diff < 1e-9, "expected {expected}, got {actual} (diff: {diff})");
    }

    #[test]
    fn test_default_transform() {
        let t = ViewportTransform::default();
        assert_eq!(t.zoom(), 1.0);
        assert_eq!(t.pan(), Point::new(0.0, 0.0));
        assert_eq!(t.zoom_bounds(), (0.5, 5.0));
    }

    #[test]
    fn test_device_plane_roundtrip() {
        let mut t = ViewportTransform::default();
        t.set_pan(Point::new(120.0, -48.0));
        t.set_zoom(2.75);

        for (x, y) in [(-250.0, -100.0), (0.0, 0.0), (13.5, 92.25), (800.0, -64.0)] {
            let d = Point::new(x, y);
            let back = t.to_device(&t.to_plane(&d));
            assert_close(back.x, d.x);
            assert_close(back.y, d.y);
        }
    }

    #[test]
    fn test_zoom_at_preserves_pivot() {
        let mut t = ViewportTransform::default();
        t.set_pan(Point::new(-35.0, 12.0));
        let pivot = Point::new(321.0, 97.0);

        let before = t.to_plane(&pivot);
        t.zoom_at(&pivot, 1.1);
        let after = t.to_plane(&pivot);

        assert_close(t.zoom(), 1.1);
        assert_close(after.x, before.x);
        assert_close(after.y, before.y);
    }

    #[test]
    fn test_zoom_at_preserves_pivot_when_clamped() {
        let mut t = ViewportTransform::default();
        let pivot = Point::new(50.0, 400.0);
        let before = t.to_plane(&pivot);

        t.zoom_at(&pivot, 1000.0);
        assert_eq!(t.zoom(), 5.0);
        let after = t.to_plane(&pivot);
        assert_close(after.x, before.x);
        assert_close(after.y, before.y);
    }

    #[test]
    fn test_zoom_stays_within_bounds() {
        let mut t = ViewportTransform::default();
        let pivot = Point::new(10.0, 10.0);
        for factor in [0.1, 0.01, 3.0, 10.0, 0.9, 1.1, 1e9, 1e-9, -2.0, f64::NAN, 0.0] {
            t.zoom_at(&pivot, factor);
            assert!(t.zoom() >= 0.5 && t.zoom() <= 5.0, "zoom {} escaped", t.zoom());
        }
    }

    #[test]
    fn test_center_on() {
        let mut t = ViewportTransform::default();
        let sf = GeoPoint::new(37.7749, -122.4194);
        let size = Size::new(800.0, 600.0);

        t.center_on(&sf, size, size, 5.0);

        let device = t.to_device(&projection::project(&sf, size));
        assert_eq!(t.zoom(), 5.0);
        assert_close(device.x, 400.0);
        assert_close(device.y, 300.0);
    }

    #[test]
    fn test_center_on_clamps_target_zoom() {
        let mut t = ViewportTransform::default();
        let size = Size::new(800.0, 600.0);
        t.center_on(&GeoPoint::new(0.0, 0.0), size, size, 50.0);
        assert_eq!(t.zoom(), 5.0);
    }

    #[test]
    fn test_center_on_ignores_non_finite_location() {
        let mut t = ViewportTransform::default();
        let size = Size::new(800.0, 600.0);
        t.center_on(&GeoPoint::new(10.0, 20.0), size, size, 2.0);
        let before = t.clone();

        t.center_on(&GeoPoint::new(f64::NAN, 20.0), size, size, 4.0);
        t.center_on(&GeoPoint::new(10.0, f64::INFINITY), size, size, 4.0);

        assert_eq!(t, before);
        assert!(t.pan().x.is_finite() && t.pan().y.is_finite());
    }

    #[test]
    fn test_pan_by_accumulates() {
        let mut t = ViewportTransform::default();
        t.pan_by(10.0, -5.0);
        t.pan_by(2.5, 2.5);
        assert_eq!(t.pan(), Point::new(12.5, -2.5));
    }

    #[test]
    fn test_degenerate_bounds_are_repaired() {
        let t = ViewportTransform::new(0.0, -1.0);
        let (min, max) = t.zoom_bounds();
        assert!(min > 0.0);
        assert!(max >= min);
        assert!(t.zoom() > 0.0);
    }
}
