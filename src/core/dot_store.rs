//! Punkt-Speicher mit linearer Nearest-Abfrage.

use glam::Vec2;

use super::{Dot, DotId};
use crate::scene::{Canvas, Color};

/// Geordneter Speicher aller platzierten Dots.
///
/// IDs sind Indizes in Einfügereihenfolge und bleiben bis zum nächsten
/// `reset` gültig.
#[derive(Debug, Default)]
pub struct DotStore {
    dots: Vec<Dot>,
}

impl DotStore {
    /// Erstellt einen leeren Speicher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt einen Dot an und gibt seine stabile ID (Index) zurück.
    pub fn add(&mut self, dot: Dot) -> DotId {
        self.dots.push(dot);
        self.dots.len() - 1
    }

    /// Findet den Dot mit minimaler euklidischer Distanz zur Query-Position.
    ///
    /// Linearer Scan; bei Gleichstand gewinnt die niedrigste ID (strikter
    /// Kleiner-Vergleich). `None` nur bei leerem Speicher.
    pub fn nearest(&self, query: Vec2) -> Option<DotId> {
        let mut best: Option<(DotId, f32)> = None;
        for (id, dot) in self.dots.iter().enumerate() {
            let dist = dot.position.distance_squared(query);
            let closer = match best {
                Some((_, best_dist)) => dist < best_dist,
                None => true,
            };
            if closer {
                best = Some((id, dist));
            }
        }
        best.map(|(id, _)| id)
    }

    /// Gibt den Dot zur ID zurück.
    pub fn get(&self, id: DotId) -> Option<&Dot> {
        self.dots.get(id)
    }

    /// Gibt den Dot zur ID mutierbar zurück.
    pub fn get_mut(&mut self, id: DotId) -> Option<&mut Dot> {
        self.dots.get_mut(id)
    }

    /// Read-only Sicht auf alle Dots in Einfügereihenfolge.
    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    /// Setzt den Highlight-Stroke eines Dots konsistent in Speicher und Canvas.
    pub fn set_stroke(
        &mut self,
        canvas: &mut dyn Canvas,
        id: DotId,
        stroke: Option<Color>,
    ) -> bool {
        let Some(dot) = self.dots.get_mut(id) else {
            return false;
        };
        dot.stroke = stroke;
        canvas.set_marker_stroke(dot.marker, stroke)
    }

    /// Setzt alle Highlight-Strokes auf transparent zurück.
    pub fn clear_strokes(&mut self, canvas: &mut dyn Canvas) {
        for dot in &mut self.dots {
            dot.stroke = None;
            canvas.set_marker_stroke(dot.marker, None);
        }
    }

    /// Gibt die Anzahl der Dots zurück.
    pub fn len(&self) -> usize {
        self.dots.len()
    }

    /// Gibt `true` zurück, wenn keine Dots vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    /// Entfernt alle Dots und invalidiert alle bisher vergebenen IDs.
    pub fn reset(&mut self) {
        self.dots.clear();
    }
}
