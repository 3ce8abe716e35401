use crate::{
    core::{
        config::MapConfig,
        geo::{DevicePoint, GeoPoint, Point, Size},
        viewport::ViewportTransform,
    },
    input::events::{InputEvent, InputResponse, MapEvent},
    rendering::renderer::MarkerPlacement,
};
use crossbeam_channel::{Receiver, Sender};

/// Bookkeeping for a drag gesture in progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerDragState {
    pub anchor: DevicePoint,
    pub pan_at_drag_start: Point,
    /// Pointer travelled past the drag threshold at some point
    pub moved: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging(PointerDragState),
}

/// Owns the viewport transform and turns pointer input into transform
/// changes and marker selections.
pub struct InteractionController {
    transform: ViewportTransform,
    gesture: GestureState,
    device_size: Size,
    /// Set when the last down/up pair was a drag; swallows the trailing click
    suppress_click: bool,
    wheel_zoom_in_factor: f64,
    wheel_zoom_out_factor: f64,
    drag_threshold_px: f64,
    subscribers: Vec<Sender<MapEvent>>,
}

impl InteractionController {
    pub fn new(config: &MapConfig, device_size: Size) -> Self {
        Self {
            transform: ViewportTransform::new(config.zoom_min, config.zoom_max),
            gesture: GestureState::Idle,
            device_size,
            suppress_click: false,
            wheel_zoom_in_factor: config.wheel_zoom_in_factor,
            wheel_zoom_out_factor: config.wheel_zoom_out_factor,
            drag_threshold_px: config.drag_threshold_px,
            subscribers: Vec::new(),
        }
    }

    pub fn transform(&self) -> &ViewportTransform {
        &self.transform
    }

    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, GestureState::Dragging(_))
    }

    pub fn device_size(&self) -> Size {
        self.device_size
    }

    /// Receives every [`MapEvent`] emitted from now on
    pub fn subscribe(&mut self) -> Receiver<MapEvent> {
        let (tx, rx) = crossbeam_channel::unbounded();
        self.subscribers.push(tx);
        rx
    }

    fn emit(&mut self, event: MapEvent) {
        // Receivers that were dropped are forgotten
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    fn emit_view_changed(&mut self) {
        let event = MapEvent::ViewChanged {
            pan: self.transform.pan(),
            zoom: self.transform.zoom(),
        };
        self.emit(event);
    }

    /// Dispatches one input event. `placements` is the marker layout from
    /// the most recent render pass and is only consulted for clicks.
    pub fn handle_event(&mut self, event: &InputEvent, placements: &[MarkerPlacement]) -> InputResponse {
        match event {
            InputEvent::PointerDown { position } => self.pointer_down(*position),
            InputEvent::PointerMove { position } => self.pointer_move(*position),
            InputEvent::PointerUp { .. } | InputEvent::PointerLeave => self.pointer_release(),
            InputEvent::Wheel { delta_y, position } => self.wheel(*delta_y, *position),
            InputEvent::Click { position } => self.click(*position, placements),
            InputEvent::Resize { size } => {
                self.resize(*size);
                InputResponse::handled(true)
            }
        }
    }

    pub fn pointer_down(&mut self, position: DevicePoint) -> InputResponse {
        self.suppress_click = false;
        self.gesture = GestureState::Dragging(PointerDragState {
            anchor: position,
            pan_at_drag_start: self.transform.pan(),
            moved: false,
        });
        InputResponse::handled(false)
    }

    pub fn pointer_move(&mut self, position: DevicePoint) -> InputResponse {
        let GestureState::Dragging(ref mut drag) = self.gesture else {
            return InputResponse::ignored();
        };

        if position.distance_to(&drag.anchor) > self.drag_threshold_px {
            drag.moved = true;
        }

        // Absolute from the gesture start so per-frame rounding cannot drift
        let pan = position.subtract(&drag.anchor).add(&drag.pan_at_drag_start);
        self.transform.set_pan(pan);
        InputResponse::handled(true)
    }

    /// Pointer up or leave: ends any drag
    pub fn pointer_release(&mut self) -> InputResponse {
        match std::mem::take(&mut self.gesture) {
            GestureState::Dragging(drag) => {
                self.suppress_click = drag.moved;
                if drag.moved {
                    self.emit_view_changed();
                }
                InputResponse::handled(false)
            }
            GestureState::Idle => InputResponse::ignored(),
        }
    }

    /// Wheel zoom pivoting on the pointer. Always asks the host to cancel
    /// the platform scroll.
    pub fn wheel(&mut self, delta_y: f64, position: DevicePoint) -> InputResponse {
        let factor = if delta_y > 0.0 {
            self.wheel_zoom_out_factor
        } else if delta_y < 0.0 {
            self.wheel_zoom_in_factor
        } else {
            return InputResponse::handled(false).with_prevent_default();
        };

        let before = self.transform.zoom();
        self.transform.zoom_at(&position, factor);
        let changed = self.transform.zoom() != before;
        if changed {
            self.emit_view_changed();
        }
        InputResponse::handled(changed).with_prevent_default()
    }

    /// Click: selects the first placement under the pointer unless the
    /// click ends a drag
    pub fn click(&mut self, position: DevicePoint, placements: &[MarkerPlacement]) -> InputResponse {
        if std::mem::take(&mut self.suppress_click) {
            log::trace!("click after drag ignored");
            return InputResponse::handled(false);
        }

        match self.hit_test(position, placements) {
            Some(placement) => {
                let id = placement.id.clone();
                log::debug!("marker {id} selected");
                self.emit(MapEvent::MarkerSelected { id });
                InputResponse::handled(false)
            }
            None => InputResponse::ignored(),
        }
    }

    /// First placement (in draw order) whose disc contains the device point
    pub fn hit_test<'a>(
        &self,
        position: DevicePoint,
        placements: &'a [MarkerPlacement],
    ) -> Option<&'a MarkerPlacement> {
        let plane = self.transform.to_plane(&position);
        let zoom = self.transform.zoom();
        placements
            .iter()
            .find(|p| plane.distance_to(&p.plane) <= p.radius_px / zoom)
    }

    /// External "go to location" command. `plane` is the size the renderer
    /// projects onto. Leaves any drag state alone.
    pub fn center_on(&mut self, geo: &GeoPoint, plane: Size, target_zoom: f64) {
        if !geo.is_finite() {
            log::debug!("ignoring center_on for non-finite location");
            return;
        }
        self.transform
            .center_on(geo, plane, self.device_size, target_zoom);
        self.emit_view_changed();
    }

    /// New device size; pan and zoom are kept as they are
    pub fn resize(&mut self, size: Size) {
        self.device_size = size;
    }

    pub fn reset_view(&mut self) {
        self.transform.reset();
        self.emit_view_changed();
    }
}
