//! Drawable-Primitive als expliziter Übergabevertrag zwischen Modell und Canvas.

use glam::Vec2;

/// RGBA-Farbe, Kanäle 0.0–1.0.
pub type Color = [f32; 4];

/// Eindeutige ID eines Drawables innerhalb eines Canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DrawableId(pub u64);

/// Primitive, die das Modell an den Canvas übergibt.
///
/// Das Modell kennt nur diese Formen; wie sie gezeichnet werden,
/// entscheidet der Host.
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    /// Punktmarkierung eines Dots mit optionalem Highlight-Ring
    Marker {
        /// Mittelpunkt in Canvas-Koordinaten
        center: Vec2,
        /// Sichtbarer Radius (zugleich Hitbox)
        radius: f32,
        /// Highlight-Stroke (None = transparent)
        stroke: Option<Color>,
    },
    /// Liniensegment einer Kante
    Segment {
        /// Startpunkt
        start: Vec2,
        /// Endpunkt
        end: Vec2,
        /// Linienstärke
        width: f32,
    },
    /// Geschlossenes Polygon eines Dreiecks
    Polygon {
        /// Eckpunkte in Klick-Reihenfolge
        points: Vec<Vec2>,
        /// Linienstärke der Umrandung
        stroke_width: f32,
    },
    /// Offener, zusammenhängender Linienzug (Sketch-Polyline)
    Polyline {
        /// Punkte in Zeichenreihenfolge
        points: Vec<Vec2>,
        /// Linienstärke
        width: f32,
    },
}
