//! Equirectangular projection between geographic and plane coordinates.
//!
//! Longitude maps linearly onto x and latitude onto y, with north at the
//! top of the plane. The plane is sized by the caller (normally the canvas
//! size) and is independent of pan and zoom.

use crate::core::geo::{GeoPoint, PlanePoint, Size};

/// Projects a geographic coordinate onto a plane of the given size
pub fn project(geo: &GeoPoint, plane: Size) -> PlanePoint {
    PlanePoint::new(
        (geo.lng + 180.0) / 360.0 * plane.width,
        (90.0 - geo.lat) / 180.0 * plane.height,
    )
}

/// Inverse of [`project`]
pub fn unproject(point: &PlanePoint, plane: Size) -> GeoPoint {
    GeoPoint::new(
        90.0 - point.y / plane.height * 180.0,
        point.x / plane.width * 360.0 - 180.0,
    )
}

/// Projection bound to a fixed plane size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equirectangular {
    pub plane: Size,
}

impl Equirectangular {
    pub fn new(plane: Size) -> Self {
        Self { plane }
    }

    pub fn project(&self, geo: &GeoPoint) -> PlanePoint {
        project(geo, self.plane)
    }

    pub fn unproject(&self, point: &PlanePoint) -> GeoPoint {
        unproject(point, self.plane)
    }

    /// Plane x of a meridian
    pub fn x_for_lng(&self, lng: f64) -> f64 {
        (lng + 180.0) / 360.0 * self.plane.width
    }

    /// Plane y of a parallel
    pub fn y_for_lat(&self, lat: f64) -> f64 {
        (90.0 - lat) / 180.0 * self.plane.height
    }
}
