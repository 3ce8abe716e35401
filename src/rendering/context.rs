use crate::{
    core::geo::{Point, Size},
    rendering::{style::Color, surface::DrawSurface},
};

/// Commands recorded by [`RenderContext`], resolved to device pixels
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Rect {
        min: Point,
        max: Point,
        color: Color,
    },
    Line {
        from: Point,
        to: Point,
        width: f64,
        color: Color,
    },
    FillCircle {
        center: Point,
        radius: f64,
        color: Color,
    },
    StrokeCircle {
        center: Point,
        radius: f64,
        width: f64,
        color: Color,
    },
}

/// Headless surface that records draw calls into a queue.
///
/// Used for tests and for backends that replay commands later.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub width: f64,
    pub height: f64,
    drawing_queue: Vec<DrawCommand>,
    pan: Point,
    scale: f64,
}

impl RenderContext {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            drawing_queue: Vec::new(),
            pan: Point::default(),
            scale: 1.0,
        }
    }

    /// Get the current drawing queue
    pub fn get_drawing_queue(&self) -> &[DrawCommand] {
        &self.drawing_queue
    }

    /// Filled circles in draw order
    pub fn filled_circles(&self) -> impl Iterator<Item = (Point, f64, Color)> + '_ {
        self.drawing_queue.iter().filter_map(|cmd| match cmd {
            DrawCommand::FillCircle {
                center,
                radius,
                color,
            } => Some((*center, *radius, *color)),
            _ => None,
        })
    }

    fn to_device(&self, point: Point) -> Point {
        point.multiply(self.scale).add(&self.pan)
    }
}

impl DrawSurface for RenderContext {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    fn clear(&mut self) {
        self.drawing_queue.clear();
        self.drawing_queue.push(DrawCommand::Clear);
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
        self.drawing_queue.push(DrawCommand::Rect {
            min: self.to_device(min),
            max: self.to_device(max),
            color,
        });
    }

    fn line(&mut self, from: Point, to: Point, width: f64, color: Color) {
        self.drawing_queue.push(DrawCommand::Line {
            from: self.to_device(from),
            to: self.to_device(to),
            width: width * self.scale,
            color,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.drawing_queue.push(DrawCommand::FillCircle {
            center: self.to_device(center),
            radius: radius * self.scale,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, width: f64, color: Color) {
        self.drawing_queue.push(DrawCommand::StrokeCircle {
            center: self.to_device(center),
            radius: radius * self.scale,
            width: width * self.scale,
            color,
        });
    }
}
