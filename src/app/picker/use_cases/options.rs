//! Use-Case: Editor-Optionen übernehmen.

use crate::app::picker::PickerState;
use crate::shared::options::EditorOptions;

/// Übernimmt neue Optionen in den Zustand.
///
/// Vor Abschluss der Initialisierung (`ready == false`) werden Änderungen
/// verworfen.
pub fn apply_options(state: &mut PickerState, options: EditorOptions) {
    if !state.ready {
        log::debug!("Optionen verworfen: Initialisierung läuft noch");
        return;
    }

    state.options = options;
    log::info!("Optionen übernommen");
}
