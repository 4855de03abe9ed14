//! Handler für Auswahl und Stützpunkt-Drag des Bearbeiten-Werkzeugs.

use crate::app::use_cases;
use crate::app::WidgetState;
use glam::DVec2;

/// Wählt das Feature unter dem Klickpunkt.
pub fn select_at(state: &mut WidgetState, pos: DVec2, tolerance: f64, additive: bool) {
    let WidgetState { toolbar, store, .. } = state;
    if let Some(modify) = toolbar.as_mut().and_then(|t| t.modify_tool_mut()) {
        modify.select_at(pos, tolerance, store, additive);
    }
}

/// Beginnt einen Stützpunkt-Drag.
pub fn begin_drag(state: &mut WidgetState, pos: DVec2, tolerance: f64) {
    let WidgetState { toolbar, store, .. } = state;
    if let Some(modify) = toolbar.as_mut().and_then(|t| t.modify_tool_mut()) {
        if !modify.begin_vertex_drag(pos, tolerance, store) {
            log::debug!("Kein Stuetzpunkt in Reichweite");
        }
    }
}

/// Verschiebt den gezogenen Stützpunkt.
pub fn drag_to(state: &mut WidgetState, pos: DVec2) {
    let edit = state
        .toolbar
        .as_ref()
        .and_then(|t| t.modify_tool())
        .and_then(|modify| modify.drag_to(pos, &state.store));
    if let Some(edit) = edit {
        use_cases::store_edit::apply_store_edit(state, edit);
    }
}

/// Beendet den Stützpunkt-Drag.
pub fn end_drag(state: &mut WidgetState) {
    if let Some(modify) = state.toolbar.as_mut().and_then(|t| t.modify_tool_mut()) {
        modify.end_drag();
    }
}
