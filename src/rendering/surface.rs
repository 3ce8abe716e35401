use crate::{
    core::geo::{Point, Size},
    rendering::style::Color,
};

/// Immediate-mode 2D drawing target used by the renderer.
///
/// Geometry passed to the drawing calls is interpreted through the current
/// transform: `device = point * scale + pan`. Lengths (radii, line widths)
/// are scaled by the same factor, which is why the renderer pre-divides
/// them by the zoom before drawing in plane units.
pub trait DrawSurface {
    /// Device size of the surface in pixels
    fn size(&self) -> Size;

    /// Wipes the whole surface
    fn clear(&mut self);

    /// Sets the transform applied to subsequent geometry
    fn set_transform(&mut self, pan: Point, scale: f64);

    /// Back to identity (geometry in device pixels)
    fn reset_transform(&mut self);

    fn fill_rect(&mut self, min: Point, max: Point, color: Color);

    fn line(&mut self, from: Point, to: Point, width: f64, color: Color);

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color);

    fn stroke_circle(&mut self, center: Point, radius: f64, width: f64, color: Color);
}
