//! Picker-Intent und Picker-Command Events.

use glam::Vec2;

use crate::shared::EditorOptions;

use super::state::SketchMode;

/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum PickerIntent {
    /// Pointer-Down an Canvas-Position
    PointerDownRequested { pos: Vec2 },
    /// Eingabemodus umschalten
    ModeChangeRequested { mode: SketchMode },
    /// Skizze und Dots verwerfen
    ResetRequested,
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
pub enum PickerCommand {
    /// Polyline verlängern und Dot an Position setzen
    SketchDot { pos: Vec2 },
    /// Nächstgelegenen Dot highlighten
    PickNearestDot { pos: Vec2 },
    /// Eingabemodus setzen
    SetMode { mode: SketchMode },
    /// Skizze und Dots verwerfen (Polyline-Drawable bleibt)
    ResetAll,
    /// Geänderte Optionen übernehmen
    ApplyOptions { options: EditorOptions },
    /// Beenden-Bestätigung anzeigen
    RequestExit,
    /// Beenden bestätigen
    ConfirmExit,
    /// Beenden abbrechen
    CancelExit,
}
