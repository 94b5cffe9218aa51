//! Use-Case: Nächstgelegenen Dot picken und highlighten.

use glam::Vec2;

use crate::app::picker::PickerState;
use crate::scene::Canvas;

/// Highlightet den Dot mit minimaler Distanz zur Klickposition.
///
/// Es trägt höchstens ein Dot das Pick-Highlight; vorherige Picks werden
/// gelöscht. Ohne Dots ist der Klick ein No-op.
pub fn pick_nearest(state: &mut PickerState, canvas: &mut dyn Canvas, pos: Vec2) {
    let Some(id) = state.dots.nearest(pos) else {
        log::debug!("Kein Dot vorhanden, Pick ignoriert");
        return;
    };

    state.dots.clear_strokes(canvas);
    let color = state.options.pick_color;
    state.dots.set_stroke(canvas, id, Some(color));

    log::info!("Dot {} gepickt", id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::picker::use_cases::sketch::sketch_dot;
    use crate::scene::SceneCanvas;
    use crate::shared::EditorOptions;

    #[test]
    fn pick_highlights_only_the_nearest_dot() {
        let mut canvas = SceneCanvas::new();
        let mut state = PickerState::new(&mut canvas, EditorOptions::default());
        sketch_dot(&mut state, &mut canvas, Vec2::new(0.0, 0.0));
        sketch_dot(&mut state, &mut canvas, Vec2::new(10.0, 0.0));

        pick_nearest(&mut state, &mut canvas, Vec2::new(9.0, 1.0));
        assert!(state.dots.get(0).unwrap().stroke.is_none());
        assert_eq!(
            state.dots.get(1).unwrap().stroke,
            Some(state.options.pick_color)
        );

        // Neuer Pick verschiebt das Highlight
        pick_nearest(&mut state, &mut canvas, Vec2::new(1.0, 1.0));
        assert_eq!(
            state.dots.get(0).unwrap().stroke,
            Some(state.options.pick_color)
        );
        assert!(state.dots.get(1).unwrap().stroke.is_none());
    }

    #[test]
    fn pick_on_empty_store_is_a_noop() {
        let mut canvas = SceneCanvas::new();
        let mut state = PickerState::new(&mut canvas, EditorOptions::default());

        pick_nearest(&mut state, &mut canvas, Vec2::ZERO);
        assert!(state.dots.is_empty());
    }
}
