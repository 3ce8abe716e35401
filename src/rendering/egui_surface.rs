use crate::{
    core::geo::{Point, Size},
    rendering::{style::Color, surface::DrawSurface},
};
use egui::{Color32, Painter, Pos2, Rect, Stroke};

/// Draws through an egui painter clipped to the map rect
pub struct EguiSurface<'a> {
    painter: &'a Painter,
    rect: Rect,
    pan: Point,
    scale: f64,
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: &'a Painter, rect: Rect) -> Self {
        Self {
            painter,
            rect,
            pan: Point::default(),
            scale: 1.0,
        }
    }

    fn pos(&self, point: Point) -> Pos2 {
        let device = point.multiply(self.scale).add(&self.pan);
        Pos2::new(
            self.rect.min.x + device.x as f32,
            self.rect.min.y + device.y as f32,
        )
    }

    fn length(&self, length: f64) -> f32 {
        (length * self.scale) as f32
    }
}

impl DrawSurface for EguiSurface<'_> {
    fn size(&self) -> Size {
        Size::new(self.rect.width() as f64, self.rect.height() as f64)
    }

    fn clear(&mut self) {
        // egui repaints every frame; the background fill covers the rect
    }

    fn set_transform(&mut self, pan: Point, scale: f64) {
        self.pan = pan;
        self.scale = scale;
    }

    fn reset_transform(&mut self) {
        self.pan = Point::default();
        self.scale = 1.0;
    }

    fn fill_rect(&mut self, min: Point, max: Point, color: Color) {
        self.painter
            .rect_filled(Rect::from_two_pos(self.pos(min), self.pos(max)), 0.0, Color32::from(color));
    }

    fn line(&mut self, from: Point, to: Point, width: f64, color: Color) {
        self.painter.line_segment(
            [self.pos(from), self.pos(to)],
            Stroke::new(self.length(width), Color32::from(color)),
        );
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.painter
            .circle_filled(self.pos(center), self.length(radius), Color32::from(color));
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, width: f64, color: Color) {
        self.painter.circle_stroke(
            self.pos(center),
            self.length(radius),
            Stroke::new(self.length(width), Color32::from(color)),
        );
    }
}
