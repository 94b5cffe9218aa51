//! Mesh-Intent und Mesh-Command Events.

use glam::Vec2;

use crate::shared::EditorOptions;

use super::state::ArmedModifier;

/// Tastenklassen mit Bedeutung für den Mesh-Editor.
///
/// Die GUI-Shell bildet konkrete Keycodes hierauf ab (linke wie rechte
/// Modifier-Tasten fallen zusammen).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierKey {
    /// Shift-Taste (Kanten-Modus scharfschalten)
    Shift,
    /// Ctrl-Taste (Dreiecks-Modus scharfschalten)
    Ctrl,
    /// Jede andere Taste (entschärft den Modifier)
    Other,
}

/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum MeshIntent {
    /// Pointer-Down an Canvas-Position
    PointerDownRequested { pos: Vec2 },
    /// Pointer-Up (nur protokolliert)
    PointerUpRequested { pos: Vec2 },
    /// Pointer-Move (nur protokolliert)
    PointerMoveRequested { pos: Vec2 },
    /// Taste gedrückt
    KeyDownRequested { key: ModifierKey },
    /// Alle Kanten entfernen
    ResetEdgesRequested,
    /// Alle Dreiecke entfernen
    ResetTrianglesRequested,
    /// Alle Dots entfernen (kaskadiert über Kanten und Dreiecke)
    ResetVerticesRequested,
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: EditorOptions },
    /// Anwendung beenden (zeigt Bestätigung)
    ExitRequested,
    /// Beenden bestätigt
    ExitConfirmed,
    /// Beenden abgebrochen
    ExitCancelled,
}

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum MeshCommand {
    /// Neuen Dot an Position platzieren
    PlaceDot { pos: Vec2 },
    /// Nächstgelegenen Dot als Startvertex markieren
    MarkStartingVertex { pos: Vec2 },
    /// Nächstgelegenen Dot in den Dreiecks-Akkumulator aufnehmen
    AccumulateTriangleVertex { pos: Vec2 },
    /// Wartende Kante zum Klickziel abschließen (Toggle)
    CompleteEdge { pos: Vec2 },
    /// Modifier-Zustand setzen
    ArmModifier { armed: ArmedModifier },
    /// Alle Kanten entfernen
    ResetEdges,
    /// Alle Dreiecke entfernen
    ResetTriangles,
    /// Alle Dots entfernen (Kanten/Dreiecke sind durch das Mapping bereits weg)
    ResetVertices,
    /// Geänderte Optionen übernehmen
    ApplyOptions { options: EditorOptions },
    /// Beenden-Bestätigung anzeigen
    RequestExit,
    /// Beenden bestätigen
    ConfirmExit,
    /// Beenden abbrechen
    CancelExit,
}
