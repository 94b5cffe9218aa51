//! Use-Case: Polyline-Punkt skizzieren.

use glam::Vec2;

use crate::app::picker::PickerState;
use crate::core::{Dot, DotId};
use crate::scene::{Canvas, Drawable};

/// Verlängert die Polyline um die Klickposition und setzt dort einen Dot.
pub fn sketch_dot(state: &mut PickerState, canvas: &mut dyn Canvas, pos: Vec2) -> DotId {
    canvas.push_polyline_point(state.polyline, pos);

    let marker = canvas.add_drawable(Drawable::Marker {
        center: pos,
        radius: state.options.dot_radius,
        stroke: None,
    });
    let id = state.dots.add(Dot::new(pos, marker));

    log::info!("Skizzen-Dot {} an ({:.1}, {:.1})", id, pos.x, pos.y);
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SceneCanvas;
    use crate::shared::EditorOptions;

    #[test]
    fn sketch_extends_polyline_and_places_dot() {
        let mut canvas = SceneCanvas::new();
        let mut state = PickerState::new(&mut canvas, EditorOptions::default());

        sketch_dot(&mut state, &mut canvas, Vec2::new(1.0, 2.0));
        sketch_dot(&mut state, &mut canvas, Vec2::new(3.0, 4.0));

        assert_eq!(state.dots.len(), 2);
        assert_eq!(canvas.marker_count(), 2);
        match canvas.get(state.polyline) {
            Some(Drawable::Polyline { points, .. }) => {
                assert_eq!(points, &vec![Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)]);
            }
            other => panic!("Polyline erwartet, war {:?}", other),
        }
    }
}
