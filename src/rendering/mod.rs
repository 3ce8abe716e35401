pub mod context;
pub mod renderer;
pub mod style;
pub mod surface;

#[cfg(feature = "egui")]
pub mod egui_surface;

#[cfg(feature = "wasm")]
pub mod web_surface;

// Re-export main types
pub use context::{DrawCommand, RenderContext};
pub use renderer::{MarkerPlacement, RenderScene, Renderer};
pub use style::{Color, MapStyle, MarkerStyle};
pub use surface::DrawSurface;
