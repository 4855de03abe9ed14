//! Handler für das aktive Zeichen-Werkzeug.

use crate::app::use_cases;
use crate::app::WidgetState;
use glam::DVec2;

/// Setzt einen Stützpunkt im aktiven Zeichen-Werkzeug.
pub fn click(state: &mut WidgetState, pos: DVec2) {
    let Some(draw) = state
        .toolbar
        .as_mut()
        .and_then(|toolbar| toolbar.active_draw_tool_mut())
    else {
        return;
    };
    let events = draw.pointer_down(pos);
    use_cases::store_edit::apply_draw_events(state, events);
}

/// Schließt die laufende Skizze ab.
pub fn finish(state: &mut WidgetState) {
    let Some(draw) = state
        .toolbar
        .as_mut()
        .and_then(|toolbar| toolbar.active_draw_tool_mut())
    else {
        return;
    };
    if let Some(event) = draw.finish() {
        use_cases::store_edit::apply_draw_events(state, vec![event]);
    }
}

/// Verwirft die laufende Skizze.
pub fn abort(state: &mut WidgetState) {
    if let Some(draw) = state
        .toolbar
        .as_mut()
        .and_then(|toolbar| toolbar.active_draw_tool_mut())
    {
        draw.abort();
    }
}
