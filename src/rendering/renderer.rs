//! Paints the world backdrop and event markers onto a [`DrawSurface`].
//!
//! Draw order matters: background, graticule, landmasses, markers, search
//! ring, then the user location on top. Everything after the background is
//! drawn in plane units under the viewport transform, with radii and line
//! widths divided by the zoom so their apparent size stays constant.

use crate::{
    core::{
        constants::{
            GRID_SPACING_DEG, HIGHLIGHT_OPACITY, LANDMASSES, MARKER_OPACITY,
            MAX_GRID_SPACING_DEG, MIN_GRID_SPACING_DEG,
        },
        geo::{GeoPoint, PlanePoint, Point, Size},
        projection::Equirectangular,
        viewport::ViewportTransform,
    },
    data::event::EventMarker,
    rendering::{style::MapStyle, surface::DrawSurface},
};

/// Everything one render pass reads
#[derive(Debug, Clone, Copy)]
pub struct RenderScene<'a> {
    pub markers: &'a [EventMarker],
    pub transform: &'a ViewportTransform,
    pub highlighted: Option<&'a str>,
    pub search_point: Option<GeoPoint>,
    pub user_point: Option<GeoPoint>,
}

/// Where a marker ended up in the last render pass
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerPlacement {
    pub id: String,
    pub plane: PlanePoint,
    /// Apparent radius on screen; divide by zoom for plane units
    pub radius_px: f64,
}

#[derive(Debug, Clone)]
pub struct Renderer {
    style: MapStyle,
    grid_spacing_deg: f64,
    placements: Vec<MarkerPlacement>,
    plane: Size,
}

impl Renderer {
    /// Out-of-range grid spacing falls back to the default
    pub fn new(style: MapStyle, grid_spacing_deg: f64) -> Self {
        let grid_spacing_deg =
            if (MIN_GRID_SPACING_DEG..=MAX_GRID_SPACING_DEG).contains(&grid_spacing_deg) {
                grid_spacing_deg
            } else {
                log::warn!("grid spacing {grid_spacing_deg} out of range, using {GRID_SPACING_DEG}");
                GRID_SPACING_DEG
            };

        Self {
            style,
            grid_spacing_deg,
            placements: Vec::new(),
            plane: Size::default(),
        }
    }

    pub fn grid_spacing_deg(&self) -> f64 {
        self.grid_spacing_deg
    }

    pub fn style(&self) -> &MapStyle {
        &self.style
    }

    /// Marker placements from the last pass, in draw order
    pub fn placements(&self) -> &[MarkerPlacement] {
        &self.placements
    }

    /// Plane size used by the last pass or layout
    pub fn plane(&self) -> Size {
        self.plane
    }

    /// Recomputes marker placements for `plane` without drawing, so hit
    /// testing follows a new marker list or size before the next frame.
    pub fn layout(&mut self, markers: &[EventMarker], plane: Size) {
        self.plane = plane;
        let projection = Equirectangular::new(plane);
        self.placements = markers
            .iter()
            .filter_map(|marker| self.place(marker, &projection))
            .collect();
    }

    fn place(&self, marker: &EventMarker, projection: &Equirectangular) -> Option<MarkerPlacement> {
        let Some(location) = marker.drawable_location() else {
            log::debug!("skipping marker {} without coordinates", marker.id);
            return None;
        };

        Some(MarkerPlacement {
            id: marker.id.clone(),
            plane: projection.project(&location),
            radius_px: self.style.marker(marker.bucket()).radius,
        })
    }

    /// Paints one frame. The plane is sized to the surface.
    pub fn render(&mut self, surface: &mut dyn DrawSurface, scene: &RenderScene<'_>) {
        let size = surface.size();
        if size.is_empty() {
            log::debug!("skipping render on empty surface {}x{}", size.width, size.height);
            return;
        }

        self.plane = size;
        let projection = Equirectangular::new(size);
        let zoom = scene.transform.zoom();

        surface.clear();
        surface.reset_transform();
        surface.fill_rect(
            Point::new(0.0, 0.0),
            Point::new(size.width, size.height),
            self.style.background,
        );

        surface.set_transform(scene.transform.pan(), zoom);
        self.draw_grid(surface, &projection, zoom);
        self.draw_landmasses(surface, size);
        self.draw_markers(surface, &projection, scene, zoom);

        if let Some(search) = scene.search_point.filter(GeoPoint::is_finite) {
            let center = projection.project(&search);
            surface.stroke_circle(
                center,
                self.style.search_ring_radius / zoom,
                self.style.search_ring_width / zoom,
                self.style.search_ring,
            );
        }

        if let Some(user) = scene.user_point.filter(GeoPoint::is_finite) {
            let center = projection.project(&user);
            surface.fill_circle(center, self.style.user_halo_radius / zoom, self.style.user_halo);
            surface.fill_circle(center, self.style.user_radius / zoom, self.style.user_fill);
            surface.stroke_circle(
                center,
                self.style.user_radius / zoom,
                self.style.user_ring_width / zoom,
                self.style.user_ring,
            );
        }

        surface.reset_transform();

        #[cfg(feature = "debug")]
        log::trace!(
            "rendered {} of {} markers at zoom {:.3}",
            self.placements.len(),
            scene.markers.len(),
            zoom
        );
    }

    fn draw_grid(&self, surface: &mut dyn DrawSurface, projection: &Equirectangular, zoom: f64) {
        let width = self.style.grid_width / zoom;
        let plane = projection.plane;

        let meridians = (360.0 / self.grid_spacing_deg).floor() as usize;
        for i in 0..=meridians {
            let x = projection.x_for_lng(-180.0 + i as f64 * self.grid_spacing_deg);
            surface.line(Point::new(x, 0.0), Point::new(x, plane.height), width, self.style.grid);
        }

        let parallels = (180.0 / self.grid_spacing_deg).floor() as usize;
        for i in 0..=parallels {
            let y = projection.y_for_lat(-90.0 + i as f64 * self.grid_spacing_deg);
            surface.line(Point::new(0.0, y), Point::new(plane.width, y), width, self.style.grid);
        }
    }

    fn draw_landmasses(&self, surface: &mut dyn DrawSurface, plane: Size) {
        for (fx, fy, fw, fh) in LANDMASSES {
            let min = Point::new(fx * plane.width, fy * plane.height);
            let max = Point::new((fx + fw) * plane.width, (fy + fh) * plane.height);
            surface.fill_rect(min, max, self.style.landmass);
        }
    }

    fn draw_markers(
        &mut self,
        surface: &mut dyn DrawSurface,
        projection: &Equirectangular,
        scene: &RenderScene<'_>,
        zoom: f64,
    ) {
        self.placements.clear();

        for marker in scene.markers {
            let Some(placement) = self.place(marker, projection) else {
                continue;
            };

            let fill = self.style.marker(marker.bucket()).fill;
            let center = placement.plane;
            let radius = placement.radius_px / zoom;

            if scene.highlighted == Some(marker.id.as_str()) {
                surface.fill_circle(center, radius, fill.with_opacity(HIGHLIGHT_OPACITY));
                surface.stroke_circle(
                    center,
                    radius,
                    self.style.highlight_outline_width / zoom,
                    self.style.highlight_outline,
                );
            } else {
                surface.fill_circle(center, radius, fill.with_opacity(MARKER_OPACITY));
            }

            self.placements.push(placement);
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(MapStyle::default(), GRID_SPACING_DEG)
    }
}
