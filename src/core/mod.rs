//! Core-Domänentypen: Dots, Punkt-Speicher, Kanten- und Dreiecksmengen.

pub mod dot;
pub mod dot_store;
pub mod edge_set;
pub mod triangle_set;

pub use dot::{Dot, DotId};
pub use dot_store::DotStore;
pub use edge_set::{EdgeKey, EdgeSet};
pub use triangle_set::{TriangleBuilder, TriangleKey, TriangleSet};

/// Ergebnis einer Toggle-Operation auf Kanten- oder Dreiecksmenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Der Eintrag existierte nicht und wurde angelegt
    Added,
    /// Der Eintrag existierte und wurde entfernt
    Removed,
}
