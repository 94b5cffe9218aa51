//! Use-Case: Skizze und Dots verwerfen.

use crate::app::picker::PickerState;
use crate::scene::Canvas;

/// Leert die Polyline-Punktliste und entfernt alle Dots samt Markern.
///
/// Das Polyline-Drawable selbst bleibt bestehen, seine ID ist über den
/// Reset hinaus gültig.
pub fn reset_all(state: &mut PickerState, canvas: &mut dyn Canvas) {
    canvas.clear_polyline(state.polyline);

    let count = state.dots.len();
    for dot in state.dots.dots() {
        canvas.remove_drawable(dot.marker);
    }
    state.dots.reset();

    log::info!("Skizze verworfen ({} Dots entfernt)", count);
}
