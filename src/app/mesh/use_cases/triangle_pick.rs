//! Use-Case: Dreiecke über drei nacheinander gepickte Dots togglen.

use glam::Vec2;

use crate::app::mesh::state::ArmedModifier;
use crate::app::mesh::MeshState;
use crate::core::{DotId, ToggleOutcome, TriangleKey};
use crate::scene::{Canvas, Drawable};

/// Nimmt den nächstgelegenen Dot in den Dreieck-Akkumulator auf.
///
/// Leerer Store und Duplikate verbrauchen den Klick nicht, der Modifier
/// bleibt scharf. Beim dritten Mitglied wird das Dreieck getoggelt und
/// alle Highlights werden gelöscht.
pub fn accumulate_nearest(state: &mut MeshState, canvas: &mut dyn Canvas, pos: Vec2) {
    let Some(id) = state.dots.nearest(pos) else {
        log::debug!("Kein Dot vorhanden, Dreieck-Pick ignoriert");
        return;
    };

    if !state.triangle_builder.push(id) {
        log::debug!("Dot {} bereits im Akkumulator", id);
        return;
    }

    let color = state.options.accumulate_color;
    state.dots.set_stroke(canvas, id, Some(color));

    if state.triangle_builder.is_complete() {
        let picked = state.triangle_builder.take();
        let _ = commit_triangle(state, canvas, &picked);
        for member in picked {
            state.dots.set_stroke(canvas, member, None);
        }
    }

    state.armed = ArmedModifier::None;
}

/// Toggle-Operation für ein vollständig gepicktes Dreieck.
///
/// Der Schlüssel ist reihenfolgeunabhängig, die Polygon-Geometrie folgt
/// der Klickreihenfolge.
pub fn commit_triangle(
    state: &mut MeshState,
    canvas: &mut dyn Canvas,
    picked: &[DotId],
) -> Option<ToggleOutcome> {
    let [a, b, c] = picked else {
        log::warn!("Dreieck braucht genau drei Dots, {} erhalten", picked.len());
        return None;
    };

    let Some(key) = TriangleKey::new(*a, *b, *c) else {
        log::warn!("Dreieck mit doppelten Dots verworfen: {:?}", picked);
        return None;
    };

    if let Some(polygon) = state.triangles.remove(&key) {
        canvas.remove_drawable(polygon);
        log::info!("Dreieck {:?} entfernt", key.ids());
        return Some(ToggleOutcome::Removed);
    }

    let mut points = Vec::with_capacity(3);
    for &id in picked {
        let Some(dot) = state.dots.get(id) else {
            log::warn!("Dreieck nicht möglich: Dot {} existiert nicht", id);
            return None;
        };
        points.push(dot.position);
    }

    let polygon = canvas.add_drawable(Drawable::Polygon {
        points,
        stroke_width: state.options.triangle_stroke_width,
    });
    state.triangles.insert(key, polygon);

    log::info!("Dreieck {:?} erstellt", key.ids());
    Some(ToggleOutcome::Added)
}
