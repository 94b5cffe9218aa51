//! Use-Cases des Closest-Vertex-Pickers.

pub mod options;
pub mod pick;
pub mod reset;
pub mod sketch;
