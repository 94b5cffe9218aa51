//! Use-Case: Kanten zeichnen — Startvertex markieren, Kante abschließen.

use glam::Vec2;

use crate::app::mesh::state::ArmedModifier;
use crate::app::mesh::MeshState;
use crate::core::{DotId, EdgeKey, ToggleOutcome};
use crate::scene::{Canvas, Drawable};

use super::place_dot::place_dot;

/// Markiert den nächstgelegenen Dot als Startvertex der nächsten Kante.
///
/// Ohne Dots bleibt der Modifier scharf (kein Treffer, Klick nicht verbraucht).
/// Ein eventuell schon markierter Startvertex verliert sein Highlight.
pub fn mark_starting_vertex(state: &mut MeshState, canvas: &mut dyn Canvas, pos: Vec2) {
    let Some(id) = state.dots.nearest(pos) else {
        log::debug!("Kein Dot vorhanden, Startvertex unverändert");
        return;
    };

    if let Some(previous) = state.starting_vertex {
        state.dots.set_stroke(canvas, previous, None);
    }

    let color = state.options.start_vertex_color;
    state.dots.set_stroke(canvas, id, Some(color));
    state.starting_vertex = Some(id);
    state.armed = ArmedModifier::None;

    log::info!("Startvertex {} markiert", id);
}

/// Schließt die wartende Kante zum Klickziel ab (Toggle).
///
/// Liegt der Klick außerhalb des Markers des nächstgelegenen Dots, wird dort
/// ein neuer Dot platziert und als Ziel verwendet. Startvertex-Markierung und
/// Highlight werden unabhängig vom Ausgang zurückgesetzt.
pub fn complete_edge(state: &mut MeshState, canvas: &mut dyn Canvas, pos: Vec2) {
    let Some(start) = state.starting_vertex.take() else {
        log::warn!("Kein Startvertex gesetzt, Kante nicht möglich");
        return;
    };

    let hit = state
        .dots
        .nearest(pos)
        .and_then(|id| state.dots.get(id).map(|dot| (id, dot.marker)))
        .filter(|&(_, marker)| canvas.hit_test(marker, pos));
    let target = match hit {
        Some((nearest, _)) => nearest,
        None => place_dot(state, canvas, pos),
    };

    if target != start {
        let _ = toggle_edge(state, canvas, start, target);
    }

    state.dots.set_stroke(canvas, start, None);
}

/// Toggle-Operation: existierende Kante entfernen, fehlende anlegen.
///
/// Involution: zweifache Anwendung ohne andere Mutation stellt den
/// Ausgangszustand wieder her. Self-Loops sind kein gültiger Input.
pub fn toggle_edge(
    state: &mut MeshState,
    canvas: &mut dyn Canvas,
    a: DotId,
    b: DotId,
) -> Option<ToggleOutcome> {
    let Some(key) = EdgeKey::new(a, b) else {
        log::warn!("Self-Loop nicht erlaubt (Dot {})", a);
        return None;
    };

    if let Some(segment) = state.edges.remove(&key) {
        canvas.remove_drawable(segment);
        log::info!("Kante {}–{} entfernt", a, b);
        return Some(ToggleOutcome::Removed);
    }

    let (Some(dot_a), Some(dot_b)) = (state.dots.get(a), state.dots.get(b)) else {
        log::warn!("Kante nicht möglich: Dot {} oder {} existiert nicht", a, b);
        return None;
    };

    let segment = canvas.add_drawable(Drawable::Segment {
        start: dot_a.position,
        end: dot_b.position,
        width: state.options.edge_width,
    });
    state.edges.insert(key, segment);

    log::info!("Kante {}–{} erstellt", a, b);
    Some(ToggleOutcome::Added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SceneCanvas;

    fn state_with_dots(positions: &[(f32, f32)]) -> (MeshState, SceneCanvas) {
        let mut state = MeshState::default();
        let mut canvas = SceneCanvas::new();
        for &(x, y) in positions {
            place_dot(&mut state, &mut canvas, Vec2::new(x, y));
        }
        (state, canvas)
    }

    #[test]
    fn toggle_edge_is_an_involution() {
        let (mut state, mut canvas) = state_with_dots(&[(0.0, 0.0), (10.0, 0.0)]);

        assert_eq!(
            toggle_edge(&mut state, &mut canvas, 0, 1),
            Some(ToggleOutcome::Added)
        );
        assert_eq!(state.edges.len(), 1);
        assert_eq!(canvas.segment_count(), 1);

        // Umgekehrte Reihenfolge trifft denselben Schlüssel
        assert_eq!(
            toggle_edge(&mut state, &mut canvas, 1, 0),
            Some(ToggleOutcome::Removed)
        );
        assert!(state.edges.is_empty());
        assert_eq!(canvas.segment_count(), 0);
    }

    #[test]
    fn toggle_edge_rejects_self_loop() {
        let (mut state, mut canvas) = state_with_dots(&[(0.0, 0.0)]);
        assert_eq!(toggle_edge(&mut state, &mut canvas, 0, 0), None);
        assert!(state.edges.is_empty());
    }

    #[test]
    fn mark_starting_vertex_highlights_nearest() {
        let (mut state, mut canvas) = state_with_dots(&[(0.0, 0.0), (10.0, 0.0)]);

        mark_starting_vertex(&mut state, &mut canvas, Vec2::new(9.0, 1.0));

        assert_eq!(state.starting_vertex, Some(1));
        assert_eq!(
            state.dots.get(1).unwrap().stroke,
            Some(state.options.start_vertex_color)
        );
        assert_eq!(state.armed, ArmedModifier::None);
    }

    #[test]
    fn mark_starting_vertex_on_empty_store_keeps_armed_state() {
        let mut state = MeshState::default();
        let mut canvas = SceneCanvas::new();
        state.armed = ArmedModifier::Edge;

        mark_starting_vertex(&mut state, &mut canvas, Vec2::ZERO);

        assert_eq!(state.starting_vertex, None);
        assert_eq!(state.armed, ArmedModifier::Edge);
    }

    #[test]
    fn complete_edge_reuses_hit_dot_and_clears_marker() {
        let (mut state, mut canvas) = state_with_dots(&[(0.0, 0.0), (10.0, 0.0)]);
        mark_starting_vertex(&mut state, &mut canvas, Vec2::new(0.0, 0.0));

        // Klick innerhalb des Marker-Radius von Dot 1: kein neuer Dot
        complete_edge(&mut state, &mut canvas, Vec2::new(10.5, 0.0));

        assert_eq!(state.dots.len(), 2);
        assert_eq!(state.edges.len(), 1);
        assert_eq!(state.starting_vertex, None);
        assert!(state.dots.get(0).unwrap().stroke.is_none());
    }

    #[test]
    fn complete_edge_places_new_dot_outside_marker_bounds() {
        let (mut state, mut canvas) = state_with_dots(&[(0.0, 0.0), (10.0, 0.0)]);
        mark_starting_vertex(&mut state, &mut canvas, Vec2::new(0.0, 0.0));

        // Klick weit weg von beiden Markern: neuer Dot wird Ziel
        complete_edge(&mut state, &mut canvas, Vec2::new(50.0, 50.0));

        assert_eq!(state.dots.len(), 3);
        assert_eq!(state.edges.len(), 1);
        assert!(state
            .edges
            .contains(&EdgeKey::new(0, 2).expect("kein Self-Loop")));
    }

    #[test]
    fn complete_edge_onto_starting_vertex_creates_nothing() {
        let (mut state, mut canvas) = state_with_dots(&[(0.0, 0.0), (10.0, 0.0)]);
        mark_starting_vertex(&mut state, &mut canvas, Vec2::new(0.0, 0.0));

        // Klick auf den Startvertex selbst
        complete_edge(&mut state, &mut canvas, Vec2::new(0.5, 0.0));

        assert_eq!(state.dots.len(), 2);
        assert!(state.edges.is_empty());
        assert_eq!(state.starting_vertex, None);
    }
}
