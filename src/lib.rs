//! Graphpaper-Editor Library.
//! Interaktives Modell der beiden Graphenpapier-Demos (Mesh-Editor und
//! Closest-Vertex-Picker), als Library exportiert für Tests und GUI-Hosts.

pub mod app;
pub mod core;
pub mod scene;
pub mod shared;

pub use app::mesh::{ArmedModifier, MeshCommand, MeshController, MeshIntent, MeshState, ModifierKey};
pub use app::picker::{PickerCommand, PickerController, PickerIntent, PickerState, SketchMode};
pub use app::CommandLog;
pub use core::{
    Dot, DotId, DotStore, EdgeKey, EdgeSet, ToggleOutcome, TriangleBuilder, TriangleKey,
    TriangleSet,
};
pub use scene::{Canvas, Color, Drawable, DrawableId, SceneCanvas};
pub use shared::EditorOptions;
