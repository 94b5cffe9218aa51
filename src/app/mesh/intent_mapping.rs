//! Mapping von UI-Intents auf mutierende Mesh-Commands.

use super::state::ArmedModifier;
use super::{MeshCommand, MeshIntent, MeshState, ModifierKey};

/// Übersetzt einen `MeshIntent` in eine Sequenz ausführbarer `MeshCommand`s.
///
/// Hier liegt die Dispatch-Regel für Pointer-Down: der scharfgeschaltete
/// Modifier entscheidet vor dem wartenden Startvertex, der Default ist
/// Dot-Platzierung.
pub fn map_intent_to_commands(state: &MeshState, intent: MeshIntent) -> Vec<MeshCommand> {
    match intent {
        MeshIntent::PointerDownRequested { pos } => match state.armed {
            ArmedModifier::Edge => vec![MeshCommand::MarkStartingVertex { pos }],
            ArmedModifier::Triangle => vec![MeshCommand::AccumulateTriangleVertex { pos }],
            ArmedModifier::None => {
                if state.starting_vertex.is_some() {
                    vec![MeshCommand::CompleteEdge { pos }]
                } else {
                    vec![MeshCommand::PlaceDot { pos }]
                }
            }
        },
        MeshIntent::PointerUpRequested { pos } => {
            log::debug!("Pointer-Up bei ({:.1}, {:.1})", pos.x, pos.y);
            vec![]
        }
        MeshIntent::PointerMoveRequested { .. } => vec![],
        MeshIntent::KeyDownRequested { key } => match key {
            // Shift wird ignoriert solange ein Startvertex auf sein Ziel wartet,
            // damit der Vertex nicht mitten im Kantenzug neu zugewiesen wird.
            // Ctrl kennt diese Sperre nicht.
            ModifierKey::Shift => {
                if state.starting_vertex.is_none() {
                    vec![MeshCommand::ArmModifier {
                        armed: ArmedModifier::Edge,
                    }]
                } else {
                    log::debug!("Shift ignoriert: Startvertex wartet auf Ziel");
                    vec![]
                }
            }
            ModifierKey::Ctrl => vec![MeshCommand::ArmModifier {
                armed: ArmedModifier::Triangle,
            }],
            ModifierKey::Other => vec![MeshCommand::ArmModifier {
                armed: ArmedModifier::None,
            }],
        },
        MeshIntent::ResetEdgesRequested => vec![MeshCommand::ResetEdges],
        MeshIntent::ResetTrianglesRequested => vec![MeshCommand::ResetTriangles],
        // Kaskade: ein Dot-freier Canvas darf keine abhängigen Drawables behalten.
        MeshIntent::ResetVerticesRequested => vec![
            MeshCommand::ResetEdges,
            MeshCommand::ResetTriangles,
            MeshCommand::ResetVertices,
        ],
        MeshIntent::OptionsChanged { options } => vec![MeshCommand::ApplyOptions { options }],
        MeshIntent::ExitRequested => vec![MeshCommand::RequestExit],
        MeshIntent::ExitConfirmed => vec![MeshCommand::ConfirmExit],
        MeshIntent::ExitCancelled => vec![MeshCommand::CancelExit],
    }
}
