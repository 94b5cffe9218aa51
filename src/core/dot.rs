//! Repräsentiert einen platzierten Punkt ("Dot") mit Highlight-Zustand.

use glam::Vec2;

use crate::scene::{Color, DrawableId};

/// ID eines Dots: stabiler Index im `DotStore` bis zum nächsten Reset.
pub type DotId = usize;

/// Ein platzierter Punkt mit zugehörigem Marker-Drawable.
///
/// Die Position ist nach der Erstellung unveränderlich; nur der
/// Highlight-Stroke wechselt (None = transparent / unselektiert).
#[derive(Debug, Clone, PartialEq)]
pub struct Dot {
    /// Position in Canvas-Koordinaten
    pub position: Vec2,
    /// Highlight-Stroke (None = transparent)
    pub stroke: Option<Color>,
    /// Marker-Drawable dieses Dots
    pub marker: DrawableId,
}

impl Dot {
    /// Erstellt einen unselektierten Dot.
    pub fn new(position: Vec2, marker: DrawableId) -> Self {
        Self {
            position,
            stroke: None,
            marker,
        }
    }
}
