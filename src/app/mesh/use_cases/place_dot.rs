//! Use-Case: Neuen Dot an einer Canvas-Position platzieren.

use glam::Vec2;

use crate::app::mesh::MeshState;
use crate::core::{Dot, DotId};
use crate::scene::{Canvas, Drawable};

/// Platziert einen neuen, unselektierten Dot samt Marker-Drawable.
pub fn place_dot(state: &mut MeshState, canvas: &mut dyn Canvas, pos: Vec2) -> DotId {
    let marker = canvas.add_drawable(Drawable::Marker {
        center: pos,
        radius: state.options.dot_radius,
        stroke: None,
    });
    let id = state.dots.add(Dot::new(pos, marker));

    log::info!("Dot {} an Position ({:.1}, {:.1}) platziert", id, pos.x, pos.y);
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SceneCanvas;

    #[test]
    fn place_dot_creates_store_entry_and_marker() {
        let mut state = MeshState::default();
        let mut canvas = SceneCanvas::new();

        let id = place_dot(&mut state, &mut canvas, Vec2::new(3.0, 4.0));

        assert_eq!(id, 0);
        assert_eq!(state.dots.len(), 1);
        assert_eq!(canvas.marker_count(), 1);
        let dot = state.dots.get(id).expect("Dot erwartet");
        assert_eq!(dot.position, Vec2::new(3.0, 4.0));
        assert!(dot.stroke.is_none());
        assert!(canvas.hit_test(dot.marker, Vec2::new(3.0, 4.0)));
    }
}
