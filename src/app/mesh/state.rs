//! Zustand des Mesh-Editors.

use crate::app::CommandLog;
use crate::core::{DotId, DotStore, EdgeSet, TriangleBuilder, TriangleSet};
use crate::shared::EditorOptions;

use super::events::MeshCommand;

/// Scharfgeschalteter Modifier für den nächsten Pointer-Down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArmedModifier {
    /// Kein Modifier: Pointer-Down platziert Dots bzw. schließt Kanten ab
    #[default]
    None,
    /// Shift: nächster Klick markiert den Startvertex einer Kante
    Edge,
    /// Ctrl: nächster Klick nimmt einen Vertex in den Dreiecks-Akkumulator auf
    Triangle,
}

/// Hauptzustand des Mesh-Editors.
///
/// Gehört dem Host-Fenster; alle Mutationen laufen synchron über den
/// `MeshController` innerhalb eines einzelnen Event-Handlers.
pub struct MeshState {
    /// Alle platzierten Dots
    pub dots: DotStore,
    /// Ungerichtete Kantenmenge
    pub edges: EdgeSet,
    /// Dreiecksmenge
    pub triangles: TriangleSet,
    /// Auswahl-Akkumulator für das nächste Dreieck
    pub triangle_builder: TriangleBuilder,
    /// Wartender Startvertex der nächsten Kante
    pub starting_vertex: Option<DotId>,
    /// Zuletzt scharfgeschalteter Modifier
    pub armed: ArmedModifier,
    /// Laufzeit-Optionen (Radien, Farben, Linienstärken)
    pub options: EditorOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog<MeshCommand>,
    /// Erst nach vollständiger Konstruktion reagieren Options-Callbacks
    pub ready: bool,
    /// Ob die Beenden-Bestätigung angezeigt wird
    pub show_exit_confirmation: bool,
    /// Signalisiert dem Host das kontrollierte Beenden
    pub should_exit: bool,
}

impl MeshState {
    /// Erstellt einen leeren Editor-Zustand.
    pub fn new(options: EditorOptions) -> Self {
        Self {
            dots: DotStore::new(),
            edges: EdgeSet::new(),
            triangles: TriangleSet::new(),
            triangle_builder: TriangleBuilder::new(),
            starting_vertex: None,
            armed: ArmedModifier::None,
            options,
            command_log: CommandLog::new(),
            ready: true,
            show_exit_confirmation: false,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Dots zurück (für UI-Anzeige).
    pub fn dot_count(&self) -> usize {
        self.dots.len()
    }

    /// Gibt die Anzahl der Kanten zurück (für UI-Anzeige).
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Gibt die Anzahl der Dreiecke zurück (für UI-Anzeige).
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }
}

impl Default for MeshState {
    fn default() -> Self {
        Self::new(EditorOptions::default())
    }
}
