//! Mapping von UI-Intents auf mutierende Picker-Commands.

use super::state::SketchMode;
use super::{PickerCommand, PickerIntent, PickerState};

/// Übersetzt einen `PickerIntent` in eine Sequenz ausführbarer `PickerCommand`s.
///
/// Pointer-Down verzweigt über den aktuellen Eingabemodus.
pub fn map_intent_to_commands(state: &PickerState, intent: PickerIntent) -> Vec<PickerCommand> {
    match intent {
        PickerIntent::PointerDownRequested { pos } => match state.mode {
            SketchMode::Draw => vec![PickerCommand::SketchDot { pos }],
            SketchMode::Pick => vec![PickerCommand::PickNearestDot { pos }],
        },
        PickerIntent::ModeChangeRequested { mode } => vec![PickerCommand::SetMode { mode }],
        PickerIntent::ResetRequested => vec![PickerCommand::ResetAll],
        PickerIntent::OptionsChanged { options } => vec![PickerCommand::ApplyOptions { options }],
        PickerIntent::ExitRequested => vec![PickerCommand::RequestExit],
        PickerIntent::ExitConfirmed => vec![PickerCommand::ConfirmExit],
        PickerIntent::ExitCancelled => vec![PickerCommand::CancelExit],
    }
}
