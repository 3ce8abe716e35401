pub mod widget;

pub use widget::QuakeMapWidget;
