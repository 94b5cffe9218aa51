//! Use-Case: Editor-Optionen übernehmen.

use crate::app::mesh::MeshState;
use crate::shared::options::EditorOptions;

/// Übernimmt neue Optionen in den Zustand.
///
/// Vor Abschluss der Initialisierung (`ready == false`) werden Änderungen
/// verworfen; die Shell feuert während des Aufbaus bereits Change-Events.
pub fn apply_options(state: &mut MeshState, options: EditorOptions) {
    if !state.ready {
        log::debug!("Optionen verworfen: Initialisierung läuft noch");
        return;
    }

    state.options = options;
    log::info!("Optionen übernommen");
}
