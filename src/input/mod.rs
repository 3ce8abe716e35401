pub mod controller;
pub mod events;

// Re-export the essential types
pub use controller::{GestureState, InteractionController, PointerDragState};
pub use events::{EventHandled, InputEvent, InputResponse, MapEvent};
