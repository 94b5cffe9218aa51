//! Picker-Controller für zentrale Event-Verarbeitung.

use crate::scene::Canvas;

use super::{PickerCommand, PickerIntent, PickerState};

/// Orchestriert UI-Events und Use-Cases auf dem PickerState.
#[derive(Default)]
pub struct PickerController;

impl PickerController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent→Command-Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut PickerState,
        canvas: &mut dyn Canvas,
        intent: PickerIntent,
    ) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, canvas, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem PickerState aus.
    pub fn handle_command(
        &mut self,
        state: &mut PickerState,
        canvas: &mut dyn Canvas,
        command: PickerCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::use_cases;

        match command {
            PickerCommand::SketchDot { pos } => {
                use_cases::sketch::sketch_dot(state, canvas, pos);
            }
            PickerCommand::PickNearestDot { pos } => {
                use_cases::pick::pick_nearest(state, canvas, pos)
            }
            PickerCommand::SetMode { mode } => state.mode = mode,
            PickerCommand::ResetAll => use_cases::reset::reset_all(state, canvas),
            PickerCommand::ApplyOptions { options } => {
                use_cases::options::apply_options(state, options)
            }
            PickerCommand::RequestExit => state.show_exit_confirmation = true,
            PickerCommand::ConfirmExit => {
                state.show_exit_confirmation = false;
                state.should_exit = true;
            }
            PickerCommand::CancelExit => state.show_exit_confirmation = false,
        }

        Ok(())
    }
}
