//! Mesh-Controller für zentrale Event-Verarbeitung.

use crate::scene::Canvas;

use super::{MeshCommand, MeshIntent, MeshState};

/// Orchestriert UI-Events und Use-Cases auf dem MeshState.
#[derive(Default)]
pub struct MeshController;

impl MeshController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent→Command-Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut MeshState,
        canvas: &mut dyn Canvas,
        intent: MeshIntent,
    ) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, canvas, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem MeshState aus.
    pub fn handle_command(
        &mut self,
        state: &mut MeshState,
        canvas: &mut dyn Canvas,
        command: MeshCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::use_cases;

        match command {
            MeshCommand::PlaceDot { pos } => {
                use_cases::place_dot::place_dot(state, canvas, pos);
            }
            MeshCommand::MarkStartingVertex { pos } => {
                use_cases::edge_draw::mark_starting_vertex(state, canvas, pos)
            }
            MeshCommand::AccumulateTriangleVertex { pos } => {
                use_cases::triangle_pick::accumulate_nearest(state, canvas, pos)
            }
            MeshCommand::CompleteEdge { pos } => {
                use_cases::edge_draw::complete_edge(state, canvas, pos)
            }
            MeshCommand::ArmModifier { armed } => state.armed = armed,
            MeshCommand::ResetEdges => use_cases::reset::reset_edges(state, canvas),
            MeshCommand::ResetTriangles => use_cases::reset::reset_triangles(state, canvas),
            MeshCommand::ResetVertices => use_cases::reset::reset_vertices(state, canvas),
            MeshCommand::ApplyOptions { options } => {
                use_cases::options::apply_options(state, options)
            }
            MeshCommand::RequestExit => state.show_exit_confirmation = true,
            MeshCommand::ConfirmExit => {
                state.show_exit_confirmation = false;
                state.should_exit = true;
            }
            MeshCommand::CancelExit => state.show_exit_confirmation = false,
        }

        Ok(())
    }
}
