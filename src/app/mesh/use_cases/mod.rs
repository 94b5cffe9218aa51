//! Use-Cases des Mesh-Editors.

pub mod edge_draw;
pub mod options;
pub mod place_dot;
pub mod reset;
pub mod triangle_pick;
