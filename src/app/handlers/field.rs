//! Handler für programmatisches Setzen des Feldwerts.

use crate::app::WidgetState;

/// Ersetzt den Store-Inhalt aus einem Feldwert.
///
/// Bearbeitbare Widgets schreiben den normalisierten Wert einmal zurück,
/// Read-only-Widgets ignorieren den Aufruf.
pub fn set_geometry(state: &mut WidgetState, value: &str) {
    if state.sync.is_none() {
        log::warn!("setGeometry auf nicht bearbeitbarem Widget '{}' ignoriert", state.id);
        return;
    }
    let max_zoom = state.fit_max_zoom();
    let WidgetState {
        sync,
        store,
        field,
        fitter,
        toolbar,
        ..
    } = state;

    let Some(sync) = sync.as_mut() else {
        return;
    };

    if let Some(draw) = toolbar.as_mut().and_then(|t| t.active_draw_tool_mut()) {
        draw.abort();
    }

    let count = sync.set_geometry(value, store, field.as_mut(), fitter.as_mut(), max_zoom);
    // Stilles Befüllen erzeugt keine Benachrichtigung, Auswahl hier bereinigen
    if let Some(modify) = toolbar.as_mut().and_then(|t| t.modify_tool_mut()) {
        modify.on_store_changed(store);
    }
    log::info!("Geometrie gesetzt: {} Features", count);
    state.remember_store_fit(max_zoom);
}
