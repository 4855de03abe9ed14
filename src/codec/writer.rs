//! Writer: Features → Feldwert.

use crate::core::{Extent, Feature, Geometry};
use crate::shared::ControlsDefinition;

/// Packt die Geometrien der Features gemäß Controls-Definition zu einer Geometrie.
///
/// - keine Features → `None`
/// - Einzel-Modus → Geometrie des ersten Features
/// - Multi-Modus mit genau einem Typ → `Multi*` in Store-Reihenfolge
/// - sonst → `GeometryCollection` in Store-Reihenfolge
pub fn pack<'a>(
    features: impl IntoIterator<Item = &'a Feature>,
    controls: &ControlsDefinition,
) -> Option<Geometry> {
    let geometries: Vec<&Geometry> = features.into_iter().map(|f| &f.geometry).collect();
    let first = *geometries.first()?;

    if !controls.is_multi_geometry {
        if geometries.len() > 1 {
            log::warn!(
                "Einzel-Widget enthaelt {} Features, nur das erste wird geschrieben",
                geometries.len()
            );
        }
        return Some(first.clone());
    }

    if let Some(base) = controls.single_base_type() {
        if let Some(multi) = Geometry::pack_multi(base, geometries.iter().copied()) {
            return Some(multi);
        }
        log::warn!(
            "Features passen nicht zum Typ {:?}, schreibe GeometryCollection",
            base
        );
    }

    Some(Geometry::GeometryCollection {
        geometries: geometries.into_iter().cloned().collect(),
    })
}

/// Serialisiert die Features als Feldwert. Leere Menge → `""`.
pub fn encode<'a>(
    features: impl IntoIterator<Item = &'a Feature>,
    controls: &ControlsDefinition,
) -> String {
    let Some(geometry) = pack(features, controls) else {
        return String::new();
    };
    match serde_json::to_string(&geometry) {
        Ok(text) => text,
        Err(e) => {
            log::error!("Geometrie konnte nicht serialisiert werden: {}", e);
            String::new()
        }
    }
}

/// Gemeinsamer Extent aller Features.
pub fn features_extent<'a>(features: impl IntoIterator<Item = &'a Feature>) -> Option<Extent> {
    features
        .into_iter()
        .filter_map(|f| f.geometry.extent())
        .reduce(Extent::union)
}
