//! Canvas-Vertrag zwischen Modell und GUI-Shell: Drawables und Hit-Tests.

pub mod canvas;
pub mod drawable;

pub use canvas::{Canvas, SceneCanvas};
pub use drawable::{Color, Drawable, DrawableId};
