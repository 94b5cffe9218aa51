//! Use-Cases: Kanten, Dreiecke und Dots zurücksetzen.

use crate::app::mesh::MeshState;
use crate::scene::Canvas;

/// Entfernt alle Kanten samt Segment-Drawables.
///
/// Ein wartender Startvertex wird mit aufgeräumt, damit keine halbe Kante
/// über den Reset hinaus lebt.
pub fn reset_edges(state: &mut MeshState, canvas: &mut dyn Canvas) {
    if let Some(start) = state.starting_vertex.take() {
        state.dots.set_stroke(canvas, start, None);
    }

    let removed = state.edges.drain();
    for segment in &removed {
        canvas.remove_drawable(*segment);
    }

    log::info!("{} Kanten entfernt", removed.len());
}

/// Entfernt alle Dreiecke samt Polygon-Drawables und leert den Akkumulator.
pub fn reset_triangles(state: &mut MeshState, canvas: &mut dyn Canvas) {
    for &member in state.triangle_builder.members() {
        state.dots.set_stroke(canvas, member, None);
    }
    state.triangle_builder.reset();

    let removed = state.triangles.drain();
    for polygon in &removed {
        canvas.remove_drawable(*polygon);
    }

    log::info!("{} Dreiecke entfernt", removed.len());
}

/// Entfernt alle Dots samt Marker-Drawables.
///
/// Setzt voraus, dass Kanten und Dreiecke bereits zurückgesetzt wurden;
/// das Intent-Mapping stellt die Kaskade sicher.
pub fn reset_vertices(state: &mut MeshState, canvas: &mut dyn Canvas) {
    let count = state.dots.len();
    for dot in state.dots.dots() {
        canvas.remove_drawable(dot.marker);
    }
    state.dots.reset();

    log::info!("{} Dots entfernt", count);
}
