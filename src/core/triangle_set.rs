//! Dreiecksmenge über ungeordnete Dot-Tripel plus Auswahl-Akkumulator.

use indexmap::IndexMap;

use super::DotId;
use crate::scene::DrawableId;

/// Normalisierter Schlüssel eines ungeordneten Dot-Tripels (aufsteigend sortiert).
///
/// Dient ausschließlich dem Lookup; die Polygon-Geometrie folgt der
/// Klick-Reihenfolge und wird nicht umsortiert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TriangleKey {
    ids: [DotId; 3],
}

impl TriangleKey {
    /// Erstellt den normalisierten Schlüssel. `None` wenn die IDs nicht
    /// paarweise verschieden sind.
    pub fn new(a: DotId, b: DotId, c: DotId) -> Option<Self> {
        if a == b || b == c || a == c {
            return None;
        }
        let mut ids = [a, b, c];
        ids.sort_unstable();
        Some(Self { ids })
    }

    /// IDs in aufsteigender Reihenfolge.
    pub fn ids(&self) -> [DotId; 3] {
        self.ids
    }
}

/// Dreiecksmenge; jedes Dreieck besitzt genau ein Polygon-Drawable.
#[derive(Debug, Default)]
pub struct TriangleSet {
    polygons: IndexMap<TriangleKey, DrawableId>,
}

impl TriangleSet {
    /// Erstellt eine leere Dreiecksmenge.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prüft ob ein Dreieck für den Schlüssel existiert.
    pub fn contains(&self, key: &TriangleKey) -> bool {
        self.polygons.contains_key(key)
    }

    /// Registriert ein Dreieck mit seinem Polygon-Drawable.
    pub fn insert(&mut self, key: TriangleKey, polygon: DrawableId) {
        self.polygons.insert(key, polygon);
    }

    /// Liefert das Polygon-Drawable eines Dreiecks.
    pub fn get(&self, key: &TriangleKey) -> Option<DrawableId> {
        self.polygons.get(key).copied()
    }

    /// Entfernt ein Dreieck und gibt sein Polygon-Drawable zurück.
    pub fn remove(&mut self, key: &TriangleKey) -> Option<DrawableId> {
        self.polygons.shift_remove(key)
    }

    /// Entfernt alle Dreiecke und liefert die Polygone in Einfügereihenfolge.
    pub fn drain(&mut self) -> Vec<DrawableId> {
        self.polygons.drain(..).map(|(_, polygon)| polygon).collect()
    }

    /// Gibt die Anzahl der Dreiecke zurück.
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    /// Gibt `true` zurück, wenn keine Dreiecke vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}

/// Auswahl-Akkumulator für das nächste Dreieck (höchstens drei Mitglieder).
#[derive(Debug, Default)]
pub struct TriangleBuilder {
    picked: Vec<DotId>,
}

impl TriangleBuilder {
    /// Erstellt einen leeren Akkumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Nimmt eine Dot-ID auf. Duplikate sind ein No-op (`false`);
    /// die Mitgliedsprüfung geht dem Anhängen voraus.
    pub fn push(&mut self, id: DotId) -> bool {
        if self.picked.contains(&id) {
            return false;
        }
        self.picked.push(id);
        true
    }

    /// Prüft ob die Dot-ID bereits aufgenommen wurde.
    pub fn contains(&self, id: DotId) -> bool {
        self.picked.contains(&id)
    }

    /// `true` sobald genau drei Mitglieder gesammelt sind.
    pub fn is_complete(&self) -> bool {
        self.picked.len() == 3
    }

    /// Mitglieder in Klick-Reihenfolge.
    pub fn members(&self) -> &[DotId] {
        &self.picked
    }

    /// Entnimmt die gesammelten IDs in Klick-Reihenfolge und leert den Akkumulator.
    pub fn take(&mut self) -> Vec<DotId> {
        std::mem::take(&mut self.picked)
    }

    /// Verwirft alle gesammelten IDs.
    pub fn reset(&mut self) {
        self.picked.clear();
    }

    /// Gibt die Anzahl gesammelter Mitglieder zurück.
    pub fn len(&self) -> usize {
        self.picked.len()
    }

    /// Gibt `true` zurück, wenn der Akkumulator leer ist.
    pub fn is_empty(&self) -> bool {
        self.picked.is_empty()
    }
}
