//! Use-Case: geladene Feature-Quelle einer Anzeige-Karte übernehmen.

use crate::app::WidgetState;
use crate::core::parse_feature_collection;
use anyhow::Result;

/// Befüllt den Store aus einer GeoJSON-FeatureCollection und passt den Viewport an.
///
/// Ist eine Feature-ID vorausgewählt und vorhanden, wird auf dieses Feature
/// gezoomt, sonst auf alle Features. Gibt die Anzahl geladener Features zurück.
pub fn apply_feature_collection(state: &mut WidgetState, text: &str) -> Result<usize> {
    let features = parse_feature_collection(text)?;
    let ids = state.store.seed(features);
    let max_zoom = state.fit_max_zoom();

    let preselected = state
        .options
        .feature_source
        .as_ref()
        .and_then(|source| source.feature_id.clone())
        .or_else(|| Some(state.field.value()).filter(|value| !value.is_empty()));

    state.selected_relation = preselected.as_deref().and_then(|wanted| {
        ids.iter()
            .copied()
            .find(|id| state.store.get(*id).is_some_and(|f| f.has_external_id(wanted)))
    });

    let extent = match state.selected_relation {
        Some(id) => state.store.get(id).and_then(|f| f.geometry.extent()),
        None => {
            if let Some(wanted) = &preselected {
                log::warn!("Vorausgewaehltes Feature '{}' nicht gefunden", wanted);
            }
            state.store.extent()
        }
    };
    if let Some(extent) = extent {
        state.fit_view(extent, max_zoom);
    }

    log::info!(
        "Feature-Quelle fuer Widget '{}' geladen: {} Features",
        state.id,
        ids.len()
    );
    Ok(ids.len())
}
