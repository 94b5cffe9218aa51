//! Ungerichtete Kantenmenge mit kanonischem Paar-Schlüssel.

use std::cmp::Ordering;

use indexmap::IndexMap;

use super::DotId;
use crate::scene::DrawableId;

/// Kanonischer Schlüssel eines ungeordneten Dot-Paars (sortiert, a < b).
///
/// Ersetzt das doppelte Einfügen beider Orderings: Lookup ist durch die
/// Konstruktion symmetrisch, halbe Einträge können nicht entstehen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    a: DotId,
    b: DotId,
}

impl EdgeKey {
    /// Erstellt den kanonischen Schlüssel. `None` bei Self-Loop (a == b).
    pub fn new(a: DotId, b: DotId) -> Option<Self> {
        match a.cmp(&b) {
            Ordering::Less => Some(Self { a, b }),
            Ordering::Greater => Some(Self { a: b, b: a }),
            Ordering::Equal => None,
        }
    }

    /// Endpunkte in kanonischer Reihenfolge.
    pub fn endpoints(&self) -> (DotId, DotId) {
        (self.a, self.b)
    }
}

/// Kantenmenge; jede Kante besitzt genau ein Segment-Drawable.
///
/// Invariante: pro ungeordnetem Paar höchstens ein Eintrag.
#[derive(Debug, Default)]
pub struct EdgeSet {
    segments: IndexMap<EdgeKey, DrawableId>,
}

impl EdgeSet {
    /// Erstellt eine leere Kantenmenge.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prüft ob eine Kante für den Schlüssel existiert.
    pub fn contains(&self, key: &EdgeKey) -> bool {
        self.segments.contains_key(key)
    }

    /// Registriert eine Kante mit ihrem Segment-Drawable.
    pub fn insert(&mut self, key: EdgeKey, segment: DrawableId) {
        self.segments.insert(key, segment);
    }

    /// Liefert das Segment-Drawable einer Kante.
    pub fn get(&self, key: &EdgeKey) -> Option<DrawableId> {
        self.segments.get(key).copied()
    }

    /// Entfernt eine Kante und gibt ihr Segment-Drawable zurück.
    pub fn remove(&mut self, key: &EdgeKey) -> Option<DrawableId> {
        self.segments.shift_remove(key)
    }

    /// Entfernt alle Kanten und liefert die Segmente in Einfügereihenfolge.
    pub fn drain(&mut self) -> Vec<DrawableId> {
        self.segments.drain(..).map(|(_, segment)| segment).collect()
    }

    /// Gibt die Anzahl der Kanten zurück.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Gibt `true` zurück, wenn keine Kanten vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
