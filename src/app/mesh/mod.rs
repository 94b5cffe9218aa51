//! Mesh-Editor: Dots platzieren, Kanten ziehen, Dreiecke zusammenstellen.

pub mod controller;
pub mod events;
mod intent_mapping;
pub mod state;
pub mod use_cases;

pub use controller::MeshController;
pub use events::{MeshCommand, MeshIntent, ModifierKey};
pub use state::{ArmedModifier, MeshState};
