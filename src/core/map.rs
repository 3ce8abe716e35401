use crate::{
    core::{
        config::{MapConfig, MapProfile},
        geo::{GeoPoint, Size},
        viewport::ViewportTransform,
    },
    data::event::EventMarker,
    input::{
        controller::InteractionController,
        events::{InputEvent, InputResponse, MapEvent},
    },
    rendering::{
        renderer::{MarkerPlacement, RenderScene, Renderer},
        surface::DrawSurface,
    },
    Result,
};
use crossbeam_channel::Receiver;

/// Seismic event map: owns the marker list, the interaction controller and
/// the renderer, and re-renders on demand.
///
/// Every state change that affects the picture returns or implies a render
/// request; the host calls [`QuakeMap::render`] once per request.
pub struct QuakeMap {
    config: MapConfig,
    controller: InteractionController,
    renderer: Renderer,
    markers: Vec<EventMarker>,
    highlighted: Option<String>,
    search_point: Option<GeoPoint>,
    user_point: Option<GeoPoint>,
}

impl QuakeMap {
    pub fn new(size: Size) -> Self {
        Self::with_config(MapConfig::default(), size)
    }

    pub fn with_profile(profile: MapProfile, size: Size) -> Result<Self> {
        let config = profile.resolve();
        config.validate()?;
        Ok(Self::with_config(config, size))
    }

    pub fn with_config(config: MapConfig, size: Size) -> Self {
        let controller = InteractionController::new(&config, size);
        let mut renderer = Renderer::new(config.style.clone(), config.grid_spacing_deg);
        renderer.layout(&[], size);
        Self {
            config,
            controller,
            renderer,
            markers: Vec::new(),
            highlighted: None,
            search_point: None,
            user_point: None,
        }
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    pub fn transform(&self) -> &ViewportTransform {
        self.controller.transform()
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    pub fn markers(&self) -> &[EventMarker] {
        &self.markers
    }

    /// Placements from the last render or marker change, which is what
    /// clicks are tested against
    pub fn placements(&self) -> &[MarkerPlacement] {
        self.renderer.placements()
    }

    pub fn subscribe(&mut self) -> Receiver<MapEvent> {
        self.controller.subscribe()
    }

    /// Replaces the marker list. The order given here is both the draw
    /// order and the hit-test order; the view is left untouched.
    pub fn set_markers(&mut self, markers: Vec<EventMarker>) {
        log::debug!("map now holds {} markers", markers.len());
        self.markers = markers;
        let plane = self.renderer.plane();
        self.renderer.layout(&self.markers, plane);
    }

    pub fn set_highlighted(&mut self, id: Option<String>) {
        self.highlighted = id;
    }

    pub fn highlighted(&self) -> Option<&str> {
        self.highlighted.as_deref()
    }

    /// Shows the search ring and centers on it at the configured search zoom
    pub fn set_search_point(&mut self, point: Option<GeoPoint>) {
        self.search_point = point;
        if let Some(point) = point {
            self.controller
                .center_on(&point, self.renderer.plane(), self.config.search_zoom);
        }
    }

    pub fn search_point(&self) -> Option<GeoPoint> {
        self.search_point
    }

    /// Shows the user marker and centers on it
    pub fn set_user_location(&mut self, point: Option<GeoPoint>) {
        self.user_point = point;
        if let Some(point) = point {
            self.controller
                .center_on(&point, self.renderer.plane(), self.config.user_location_zoom);
        }
    }

    pub fn user_location(&self) -> Option<GeoPoint> {
        self.user_point
    }

    /// Direct "go to location" at an explicit zoom
    pub fn center_on(&mut self, point: &GeoPoint, zoom: f64) {
        self.controller.center_on(point, self.renderer.plane(), zoom);
    }

    /// Back to zoom 1 and zero pan
    pub fn reset_view(&mut self) {
        self.controller.reset_view();
    }

    /// New canvas size. Pan and zoom are kept; markers are re-placed on
    /// the resized plane.
    pub fn resize(&mut self, size: Size) {
        self.controller.resize(size);
        self.renderer.layout(&self.markers, size);
    }

    pub fn handle_input(&mut self, event: &InputEvent) -> InputResponse {
        if let InputEvent::Resize { size } = event {
            self.resize(*size);
            return InputResponse::handled(true);
        }
        self.controller
            .handle_event(event, self.renderer.placements())
    }

    /// Paints one frame. A missing surface (not mounted or not laid out
    /// yet) skips the frame.
    pub fn render(&mut self, surface: Option<&mut dyn DrawSurface>) {
        let Some(surface) = surface else {
            log::warn!("no drawing surface available, skipping render");
            return;
        };

        let size = surface.size();
        if !size.is_empty() && size != self.controller.device_size() {
            log::debug!("surface is {}x{}, following it", size.width, size.height);
            self.controller.resize(size);
        }

        let scene = RenderScene {
            markers: &self.markers,
            transform: self.controller.transform(),
            highlighted: self.highlighted.as_deref(),
            search_point: self.search_point,
            user_point: self.user_point,
        };
        self.renderer.render(surface, &scene);
    }
}
