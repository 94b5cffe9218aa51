//! Canvas-Schnittstelle und In-Memory-Referenzimplementierung.

use glam::Vec2;
use indexmap::IndexMap;

use super::{Color, Drawable, DrawableId};

/// Schnittstelle zum Zeichenuntergrund.
///
/// Die GUI-Shell implementiert diese Schnittstelle; das Modell mutiert den
/// Canvas ausschließlich synchron aus seinen Event-Handlern heraus.
/// `SceneCanvas` dient als Referenzimplementierung für Tests und
/// Headless-Betrieb.
pub trait Canvas {
    /// Fügt ein Drawable hinzu und vergibt eine neue ID.
    fn add_drawable(&mut self, drawable: Drawable) -> DrawableId;

    /// Entfernt ein Drawable. `false` wenn die ID unbekannt ist.
    fn remove_drawable(&mut self, id: DrawableId) -> bool;

    /// Setzt den Highlight-Ring eines Markers (None = transparent).
    fn set_marker_stroke(&mut self, id: DrawableId, stroke: Option<Color>) -> bool;

    /// Hängt einen Punkt an eine Polyline an.
    fn push_polyline_point(&mut self, id: DrawableId, point: Vec2) -> bool;

    /// Leert die Punktliste einer Polyline; das Drawable selbst bleibt bestehen.
    fn clear_polyline(&mut self, id: DrawableId) -> bool;

    /// Prüft ob die Position innerhalb der sichtbaren Grenzen des Drawables liegt.
    fn hit_test(&self, id: DrawableId, pos: Vec2) -> bool;
}

/// In-Memory-Canvas mit deterministischer Drawable-Reihenfolge.
#[derive(Debug, Default)]
pub struct SceneCanvas {
    drawables: IndexMap<DrawableId, Drawable>,
    next_id: u64,
}

impl SceneCanvas {
    /// Erstellt einen leeren Canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt das Drawable zur ID zurück.
    pub fn get(&self, id: DrawableId) -> Option<&Drawable> {
        self.drawables.get(&id)
    }

    /// Iterator über alle Drawables in Einfügereihenfolge.
    pub fn drawables(&self) -> impl Iterator<Item = (DrawableId, &Drawable)> {
        self.drawables.iter().map(|(id, d)| (*id, d))
    }

    /// Gibt die Gesamtzahl der Drawables zurück.
    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    /// Gibt `true` zurück, wenn der Canvas leer ist.
    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }

    /// Zählt Marker-Drawables (Testhelfer).
    pub fn marker_count(&self) -> usize {
        self.count(|d| matches!(d, Drawable::Marker { .. }))
    }

    /// Zählt Segment-Drawables (Testhelfer).
    pub fn segment_count(&self) -> usize {
        self.count(|d| matches!(d, Drawable::Segment { .. }))
    }

    /// Zählt Polygon-Drawables (Testhelfer).
    pub fn polygon_count(&self) -> usize {
        self.count(|d| matches!(d, Drawable::Polygon { .. }))
    }

    fn count(&self, predicate: fn(&Drawable) -> bool) -> usize {
        self.drawables.values().filter(|d| predicate(d)).count()
    }
}

impl Canvas for SceneCanvas {
    fn add_drawable(&mut self, drawable: Drawable) -> DrawableId {
        let id = DrawableId(self.next_id);
        self.next_id += 1;
        self.drawables.insert(id, drawable);
        id
    }

    fn remove_drawable(&mut self, id: DrawableId) -> bool {
        self.drawables.shift_remove(&id).is_some()
    }

    fn set_marker_stroke(&mut self, id: DrawableId, new_stroke: Option<Color>) -> bool {
        match self.drawables.get_mut(&id) {
            Some(Drawable::Marker { stroke, .. }) => {
                *stroke = new_stroke;
                true
            }
            _ => false,
        }
    }

    fn push_polyline_point(&mut self, id: DrawableId, point: Vec2) -> bool {
        match self.drawables.get_mut(&id) {
            Some(Drawable::Polyline { points, .. }) => {
                points.push(point);
                true
            }
            _ => false,
        }
    }

    fn clear_polyline(&mut self, id: DrawableId) -> bool {
        match self.drawables.get_mut(&id) {
            Some(Drawable::Polyline { points, .. }) => {
                points.clear();
                true
            }
            _ => false,
        }
    }

    fn hit_test(&self, id: DrawableId, pos: Vec2) -> bool {
        match self.drawables.get(&id) {
            Some(Drawable::Marker { center, radius, .. }) => {
                pos.distance_squared(*center) <= radius * radius
            }
            Some(Drawable::Segment { start, end, width }) => {
                distance_to_segment(pos, *start, *end) <= width * 0.5
            }
            Some(Drawable::Polygon { points, .. }) => point_in_polygon(pos, points),
            Some(Drawable::Polyline { points, width }) => points
                .windows(2)
                .any(|pair| distance_to_segment(pos, pair[0], pair[1]) <= width * 0.5),
            None => false,
        }
    }
}

/// Kürzeste Distanz eines Punkts zu einem Liniensegment.
fn distance_to_segment(pos: Vec2, start: Vec2, end: Vec2) -> f32 {
    let segment = end - start;
    let length_sq = segment.length_squared();
    if length_sq == 0.0 {
        return pos.distance(start);
    }
    let t = ((pos - start).dot(segment) / length_sq).clamp(0.0, 1.0);
    pos.distance(start + segment * t)
}

/// Even-Odd-Test: liegt der Punkt im Polygon?
fn point_in_polygon(pos: Vec2, points: &[Vec2]) -> bool {
    let mut inside = false;
    let n = points.len();
    if n < 3 {
        return false;
    }
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (points[i], points[j]);
        if (pi.y > pos.y) != (pj.y > pos.y)
            && pos.x < (pj.x - pi.x) * (pos.y - pi.y) / (pj.y - pi.y) + pi.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}
