use glam::Vec2;
use graphpaper_editor::{
    Drawable, EditorOptions, PickerCommand, PickerController, PickerIntent, PickerState,
    SceneCanvas, SketchMode,
};

fn make_picker() -> (PickerController, PickerState, SceneCanvas) {
    let mut canvas = SceneCanvas::new();
    let state = PickerState::new(&mut canvas, EditorOptions::default());
    (PickerController::new(), state, canvas)
}

fn pointer_down(
    controller: &mut PickerController,
    state: &mut PickerState,
    canvas: &mut SceneCanvas,
    x: f32,
    y: f32,
) {
    controller
        .handle_intent(
            state,
            canvas,
            PickerIntent::PointerDownRequested {
                pos: Vec2::new(x, y),
            },
        )
        .expect("PointerDown sollte ohne Fehler durchlaufen");
}

fn set_mode(
    controller: &mut PickerController,
    state: &mut PickerState,
    canvas: &mut SceneCanvas,
    mode: SketchMode,
) {
    controller
        .handle_intent(state, canvas, PickerIntent::ModeChangeRequested { mode })
        .expect("ModeChange sollte ohne Fehler durchlaufen");
}

fn polyline_points(canvas: &SceneCanvas, state: &PickerState) -> Vec<Vec2> {
    match canvas.get(state.polyline) {
        Some(Drawable::Polyline { points, .. }) => points.clone(),
        other => panic!("Polyline erwartet, war {:?}", other),
    }
}

#[test]
fn test_draw_mode_extends_polyline_and_places_dots() {
    let (mut controller, mut state, mut canvas) = make_picker();

    pointer_down(&mut controller, &mut state, &mut canvas, 0.0, 0.0);
    pointer_down(&mut controller, &mut state, &mut canvas, 10.0, 0.0);
    pointer_down(&mut controller, &mut state, &mut canvas, 10.0, 10.0);

    assert_eq!(state.dot_count(), 3);
    assert_eq!(canvas.marker_count(), 3);
    assert_eq!(
        polyline_points(&canvas, &state),
        vec![Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0)]
    );

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        PickerCommand::SketchDot { pos } => assert_eq!(*pos, Vec2::new(10.0, 10.0)),
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_pick_mode_highlights_nearest_dot() {
    let (mut controller, mut state, mut canvas) = make_picker();

    pointer_down(&mut controller, &mut state, &mut canvas, 0.0, 0.0);
    pointer_down(&mut controller, &mut state, &mut canvas, 10.0, 0.0);

    set_mode(&mut controller, &mut state, &mut canvas, SketchMode::Pick);
    pointer_down(&mut controller, &mut state, &mut canvas, 9.0, 1.0);

    assert!(state.dots.get(0).unwrap().stroke.is_none());
    assert_eq!(
        state.dots.get(1).unwrap().stroke,
        Some(state.options.pick_color)
    );

    // Pick-Klicks zeichnen weder Dots noch Polyline-Punkte
    assert_eq!(state.dot_count(), 2);
    assert_eq!(polyline_points(&canvas, &state).len(), 2);
}

#[test]
fn test_pick_moves_highlight_to_new_nearest() {
    let (mut controller, mut state, mut canvas) = make_picker();

    pointer_down(&mut controller, &mut state, &mut canvas, 0.0, 0.0);
    pointer_down(&mut controller, &mut state, &mut canvas, 10.0, 0.0);
    set_mode(&mut controller, &mut state, &mut canvas, SketchMode::Pick);

    pointer_down(&mut controller, &mut state, &mut canvas, 9.0, 0.0);
    pointer_down(&mut controller, &mut state, &mut canvas, 1.0, 0.0);

    assert_eq!(
        state.dots.get(0).unwrap().stroke,
        Some(state.options.pick_color)
    );
    assert!(state.dots.get(1).unwrap().stroke.is_none());
}

#[test]
fn test_pick_tie_prefers_lowest_id() {
    let (mut controller, mut state, mut canvas) = make_picker();

    pointer_down(&mut controller, &mut state, &mut canvas, -5.0, 0.0);
    pointer_down(&mut controller, &mut state, &mut canvas, 5.0, 0.0);
    set_mode(&mut controller, &mut state, &mut canvas, SketchMode::Pick);

    // Exakt mittig zwischen beiden Dots
    pointer_down(&mut controller, &mut state, &mut canvas, 0.0, 0.0);

    assert_eq!(
        state.dots.get(0).unwrap().stroke,
        Some(state.options.pick_color)
    );
    assert!(state.dots.get(1).unwrap().stroke.is_none());
}

#[test]
fn test_pick_on_empty_canvas_is_a_noop() {
    let (mut controller, mut state, mut canvas) = make_picker();
    set_mode(&mut controller, &mut state, &mut canvas, SketchMode::Pick);

    pointer_down(&mut controller, &mut state, &mut canvas, 3.0, 3.0);

    assert_eq!(state.dot_count(), 0);
    assert!(polyline_points(&canvas, &state).is_empty());
}

#[test]
fn test_reset_clears_sketch_but_keeps_polyline_drawable() {
    let (mut controller, mut state, mut canvas) = make_picker();

    pointer_down(&mut controller, &mut state, &mut canvas, 0.0, 0.0);
    pointer_down(&mut controller, &mut state, &mut canvas, 10.0, 0.0);

    controller
        .handle_intent(&mut state, &mut canvas, PickerIntent::ResetRequested)
        .expect("Reset sollte ohne Fehler durchlaufen");

    assert_eq!(state.dot_count(), 0);
    assert_eq!(canvas.marker_count(), 0);
    assert!(polyline_points(&canvas, &state).is_empty());

    // Die Polyline-ID bleibt gültig: Weiterzeichnen funktioniert nahtlos
    pointer_down(&mut controller, &mut state, &mut canvas, 5.0, 5.0);
    assert_eq!(state.dot_count(), 1);
    assert_eq!(polyline_points(&canvas, &state), vec![Vec2::new(5.0, 5.0)]);
}

#[test]
fn test_reset_does_not_change_mode() {
    let (mut controller, mut state, mut canvas) = make_picker();
    set_mode(&mut controller, &mut state, &mut canvas, SketchMode::Pick);

    controller
        .handle_intent(&mut state, &mut canvas, PickerIntent::ResetRequested)
        .expect("Reset sollte ohne Fehler durchlaufen");

    assert_eq!(state.mode, SketchMode::Pick);
}

#[test]
fn test_exit_flow_with_confirmation() {
    let (mut controller, mut state, mut canvas) = make_picker();

    controller
        .handle_intent(&mut state, &mut canvas, PickerIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");
    assert!(state.show_exit_confirmation);
    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, &mut canvas, PickerIntent::ExitCancelled)
        .expect("ExitCancelled sollte ohne Fehler durchlaufen");
    assert!(!state.show_exit_confirmation);

    controller
        .handle_intent(&mut state, &mut canvas, PickerIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, &mut canvas, PickerIntent::ExitConfirmed)
        .expect("ExitConfirmed sollte ohne Fehler durchlaufen");
    assert!(state.should_exit);
}

#[test]
fn test_options_changes_respect_ready_guard() {
    let (mut controller, mut state, mut canvas) = make_picker();

    let mut changed = EditorOptions::default();
    changed.pick_color = [0.0, 1.0, 0.0, 1.0];

    state.ready = false;
    controller
        .handle_intent(
            &mut state,
            &mut canvas,
            PickerIntent::OptionsChanged {
                options: changed.clone(),
            },
        )
        .expect("OptionsChanged sollte ohne Fehler durchlaufen");
    assert_eq!(state.options, EditorOptions::default());

    state.ready = true;
    controller
        .handle_intent(
            &mut state,
            &mut canvas,
            PickerIntent::OptionsChanged {
                options: changed.clone(),
            },
        )
        .expect("OptionsChanged sollte ohne Fehler durchlaufen");
    assert_eq!(state.options, changed);
}
