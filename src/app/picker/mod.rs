//! Closest-Vertex-Picker: Polyline skizzieren und nächsten Vertex picken.

pub mod controller;
pub mod events;
mod intent_mapping;
pub mod state;
pub mod use_cases;

pub use controller::PickerController;
pub use events::{PickerCommand, PickerIntent};
pub use state::{PickerState, SketchMode};
