//! Use-Case: Auswahl eines Features in einer Relations-Auswahl-Karte.

use crate::app::WidgetState;
use crate::core::{Feature, FeatureId};
use glam::DVec2;

/// Feld-Darstellung der externen ID eines Features.
pub fn external_id_value(feature: &Feature) -> Option<String> {
    match feature.external_id.as_ref()? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}

/// Wählt das nächste Feature innerhalb von `tolerance` und schreibt seine ID ins Feld.
///
/// Ein Klick ins Leere hebt die Auswahl auf und schreibt `""`.
pub fn pick_feature(state: &mut WidgetState, pos: DVec2, tolerance: f64) -> Option<FeatureId> {
    let hit = state
        .store
        .iter()
        .map(|(id, feature)| (id, feature.geometry.distance_to(pos)))
        .filter(|(_, distance)| *distance <= tolerance)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(id, _)| id);

    match hit {
        Some(id) if state.selected_relation != Some(id) => {
            let value = state
                .store
                .get(id)
                .and_then(external_id_value)
                .unwrap_or_default();
            if value.is_empty() {
                log::warn!("Ausgewaehltes Feature hat keine ID");
            }
            state.selected_relation = Some(id);
            state.field.write(&value);
            log::debug!("Relation ausgewaehlt: '{}'", value);
        }
        Some(_) => {}
        None => {
            if state.selected_relation.take().is_some() {
                state.field.write("");
                log::debug!("Relations-Auswahl aufgehoben");
            }
        }
    }
    hit
}
