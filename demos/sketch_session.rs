//! Headless-Session: beide Apps skriptgesteuert durchspielen.
//!
//! Ausführen mit `cargo run --example sketch_session`, Log-Level über
//! `RUST_LOG` (z.B. `RUST_LOG=info`).

use glam::Vec2;
use graphpaper_editor::{
    EditorOptions, MeshController, MeshIntent, MeshState, ModifierKey, PickerController,
    PickerIntent, PickerState, SceneCanvas, SketchMode,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    mesh_session()?;
    picker_session()?;

    Ok(())
}

/// Mesh-Editor: drei Dots, eine Kante, ein Dreieck.
fn mesh_session() -> anyhow::Result<()> {
    let mut controller = MeshController::new();
    let mut state = MeshState::new(EditorOptions::load_from_file(&EditorOptions::config_path()));
    let mut canvas = SceneCanvas::new();

    for (x, y) in [(0.0, 0.0), (40.0, 0.0), (20.0, 30.0)] {
        controller.handle_intent(
            &mut state,
            &mut canvas,
            MeshIntent::PointerDownRequested {
                pos: Vec2::new(x, y),
            },
        )?;
    }

    // Kante 0–1 über Shift-Startvertex
    controller.handle_intent(
        &mut state,
        &mut canvas,
        MeshIntent::KeyDownRequested {
            key: ModifierKey::Shift,
        },
    )?;
    controller.handle_intent(
        &mut state,
        &mut canvas,
        MeshIntent::PointerDownRequested {
            pos: Vec2::new(0.0, 0.0),
        },
    )?;
    controller.handle_intent(
        &mut state,
        &mut canvas,
        MeshIntent::PointerDownRequested {
            pos: Vec2::new(40.0, 0.0),
        },
    )?;

    // Dreieck aus allen drei Dots über Ctrl-Picks
    for (x, y) in [(0.0, 0.0), (40.0, 0.0), (20.0, 30.0)] {
        controller.handle_intent(
            &mut state,
            &mut canvas,
            MeshIntent::KeyDownRequested {
                key: ModifierKey::Ctrl,
            },
        )?;
        controller.handle_intent(
            &mut state,
            &mut canvas,
            MeshIntent::PointerDownRequested {
                pos: Vec2::new(x, y),
            },
        )?;
    }

    println!(
        "Mesh-Session: {} Dots, {} Kanten, {} Dreiecke, {} Drawables",
        state.dot_count(),
        state.edge_count(),
        state.triangle_count(),
        canvas.len()
    );

    Ok(())
}

/// Picker: Polyline skizzieren, dann nächsten Vertex picken.
fn picker_session() -> anyhow::Result<()> {
    let mut controller = PickerController::new();
    let mut canvas = SceneCanvas::new();
    let mut state = PickerState::new(&mut canvas, EditorOptions::default());

    for (x, y) in [(0.0, 0.0), (30.0, 10.0), (60.0, 0.0), (80.0, 25.0)] {
        controller.handle_intent(
            &mut state,
            &mut canvas,
            PickerIntent::PointerDownRequested {
                pos: Vec2::new(x, y),
            },
        )?;
    }

    controller.handle_intent(
        &mut state,
        &mut canvas,
        PickerIntent::ModeChangeRequested {
            mode: SketchMode::Pick,
        },
    )?;
    controller.handle_intent(
        &mut state,
        &mut canvas,
        PickerIntent::PointerDownRequested {
            pos: Vec2::new(55.0, 5.0),
        },
    )?;

    let picked = state
        .dots
        .dots()
        .iter()
        .position(|dot| dot.stroke.is_some());
    println!(
        "Picker-Session: {} Dots skizziert, gepickt: {:?}",
        state.dot_count(),
        picked
    );

    Ok(())
}
