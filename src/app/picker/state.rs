//! Zustand des Closest-Vertex-Pickers.

use crate::app::CommandLog;
use crate::core::DotStore;
use crate::scene::{Canvas, Drawable, DrawableId};
use crate::shared::EditorOptions;

use super::events::PickerCommand;

/// Eingabemodus des Pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SketchMode {
    /// Klicks verlängern die Polyline und setzen Dots
    #[default]
    Draw,
    /// Klicks picken den nächstgelegenen Dot
    Pick,
}

/// Hauptzustand des Pickers.
///
/// Die Polyline wird einmalig beim Konstruieren angelegt und überlebt alle
/// Resets; nur ihre Punktliste wird geleert.
pub struct PickerState {
    /// Alle skizzierten Dots
    pub dots: DotStore,
    /// Das eine Polyline-Drawable der Sitzung
    pub polyline: DrawableId,
    /// Aktueller Eingabemodus
    pub mode: SketchMode,
    /// Laufzeit-Optionen (Radien, Farben, Linienstärken)
    pub options: EditorOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog<PickerCommand>,
    /// Erst nach vollständiger Konstruktion reagieren Options-Callbacks
    pub ready: bool,
    /// Ob die Beenden-Bestätigung angezeigt wird
    pub show_exit_confirmation: bool,
    /// Signalisiert dem Host das kontrollierte Beenden
    pub should_exit: bool,
}

impl PickerState {
    /// Erstellt den Zustand und legt die leere Polyline auf dem Canvas an.
    pub fn new(canvas: &mut dyn Canvas, options: EditorOptions) -> Self {
        let polyline = canvas.add_drawable(Drawable::Polyline {
            points: Vec::new(),
            width: options.polyline_width,
        });

        Self {
            dots: DotStore::new(),
            polyline,
            mode: SketchMode::Draw,
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
}
