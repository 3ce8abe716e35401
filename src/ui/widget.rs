use crate::{
    core::{
        geo::{Point, Size},
        map::QuakeMap,
    },
    input::events::{InputEvent, InputResponse},
    rendering::egui_surface::EguiSurface,
};
use egui::{CursorIcon, Pos2, Rect, Response, Sense, Ui, Vec2, Widget};

/// egui widget that feeds pointer input into a [`QuakeMap`] and paints it
pub struct QuakeMapWidget<'a> {
    map: &'a mut QuakeMap,
    size: Option<Vec2>,
    interactive: bool,
}

impl<'a> QuakeMapWidget<'a> {
    pub fn new(map: &'a mut QuakeMap) -> Self {
        Self {
            map,
            size: None,
            interactive: true,
        }
    }

    pub fn size(mut self, size: Vec2) -> Self {
        self.size = Some(size);
        self
    }

    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    fn to_device(rect: Rect, pos: Pos2) -> Point {
        Point::new((pos.x - rect.min.x) as f64, (pos.y - rect.min.y) as f64)
    }

    fn feed(&mut self, event: InputEvent, response: &mut Response) -> InputResponse {
        let result = self.map.handle_input(&event);
        if result.needs_render {
            response.mark_changed();
        }
        result
    }

    fn handle_pointer(&mut self, ui: &Ui, rect: Rect, response: &mut Response) {
        let (pressed, released, latest, moving, scroll) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.latest_pos(),
                i.pointer.is_moving(),
                i.raw_scroll_delta.y,
            )
        });

        if response.hovered() && scroll != 0.0 {
            if let Some(pos) = latest {
                // egui reports wheel-up as positive; the controller expects DOM sign
                self.feed(
                    InputEvent::Wheel {
                        delta_y: -scroll as f64,
                        position: Self::to_device(rect, pos),
                    },
                    response,
                );
            }
        }

        if pressed && response.hovered() {
            if let Some(pos) = latest {
                self.feed(
                    InputEvent::PointerDown {
                        position: Self::to_device(rect, pos),
                    },
                    response,
                );
            }
        }

        if moving && self.map.controller().is_dragging() {
            if let Some(pos) = latest {
                self.feed(
                    InputEvent::PointerMove {
                        position: Self::to_device(rect, pos),
                    },
                    response,
                );
            }
        }

        if released {
            let event = match latest {
                Some(pos) => InputEvent::PointerUp {
                    position: Self::to_device(rect, pos),
                },
                None => InputEvent::PointerLeave,
            };
            self.feed(event, response);
        } else if latest.is_none() && self.map.controller().is_dragging() {
            self.feed(InputEvent::PointerLeave, response);
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.feed(
                    InputEvent::Click {
                        position: Self::to_device(rect, pos),
                    },
                    response,
                );
            }
        }
    }
}

impl Widget for QuakeMapWidget<'_> {
    fn ui(mut self, ui: &mut Ui) -> Response {
        let desired_size = self.size.unwrap_or_else(|| ui.available_size());
        let (rect, mut response) = ui.allocate_exact_size(desired_size, Sense::click_and_drag());

        let size = Size::new(rect.width() as f64, rect.height() as f64);
        if self.map.controller().device_size() != size {
            self.map.handle_input(&InputEvent::Resize { size });
        }

        if self.interactive {
            self.handle_pointer(ui, rect, &mut response);
        }

        let painter = ui.painter_at(rect);
        let mut surface = EguiSurface::new(&painter, rect);
        self.map.render(Some(&mut surface));

        let cursor = if self.map.controller().is_dragging() {
            CursorIcon::Grabbing
        } else {
            CursorIcon::Grab
        };
        response.on_hover_cursor(cursor)
    }
}
