//! Use-Case: Store-Edits und Zeichen-Ereignisse von Werkzeugen anwenden.

use crate::app::tools::{DrawEvent, StoreEdit};
use crate::app::WidgetState;
use crate::core::Feature;

/// Wendet einen `StoreEdit` auf den Store an.
///
/// Read-only-Widgets werden nie verändert.
pub fn apply_store_edit(state: &mut WidgetState, edit: StoreEdit) {
    if state.sync.is_none() {
        log::warn!(
            "Store-Edit in nicht bearbeitbarem Widget '{}' verworfen",
            state.id
        );
        return;
    }

    match edit {
        StoreEdit::Clear => {
            log::info!("Alle Features entfernt ({})", state.store.len());
            state.store.clear();
        }
        StoreEdit::ClearForSingleton => {
            if !state.store.is_empty() {
                state.store.clear();
            }
        }
        StoreEdit::Add(feature) => {
            state.store.add(feature);
        }
        StoreEdit::ReplaceGeometry { id, geometry } => {
            if !state.store.replace_geometry(id, geometry) {
                log::warn!("Feature {:?} existiert nicht mehr", id);
            }
        }
    }
}

/// Übersetzt Zeichen-Ereignisse in Store-Edits.
///
/// Im Einzel-Modus wird der Store zu Beginn jeder neuen Skizze geleert, damit
/// höchstens ein Feature existiert.
pub fn apply_draw_events(state: &mut WidgetState, events: Vec<DrawEvent>) {
    for event in events {
        match event {
            DrawEvent::Started => {
                if !state.controls.is_multi_geometry {
                    apply_store_edit(state, StoreEdit::ClearForSingleton);
                }
            }
            DrawEvent::Completed(geometry) => {
                log::debug!("Skizze abgeschlossen: {:?}", geometry.geometry_type());
                apply_store_edit(state, StoreEdit::Add(Feature::new(geometry)));
            }
        }
    }
}
