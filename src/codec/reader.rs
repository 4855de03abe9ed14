//! Reader: Feldwert → Features.

use super::ewkt;
use crate::core::{Feature, Geometry};
use crate::shared::ControlsDefinition;
use anyhow::{Context, Result};

/// Liest einen Feldwert als Geometrie.
///
/// Leerer Text, `null` und Geometrien ohne Koordinaten ergeben `Ok(None)`.
pub fn try_decode(text: &str) -> Result<Option<Geometry>> {
    let text = text.trim();
    if text.is_empty() || text == "null" {
        return Ok(None);
    }

    let geometry = if ewkt::looks_like_wkt(text) {
        ewkt::parse_wkt(text).context("Ungueltige WKT-Geometrie")?
    } else {
        Some(
            serde_json::from_str::<Geometry>(text)
                .context("Ungueltige GeoJSON-Geometrie")?,
        )
    };

    Ok(geometry.filter(|g| g.extent().is_some()))
}

/// Zerlegt eine Geometrie in Features.
///
/// Nur im Multi-Modus wird zerlegt: `GeometryCollection` in ihre Teile, `Multi*` wenn
/// genau der passende Typ aktiviert ist. Im Einzel-Modus entsteht immer genau ein Feature.
pub fn unpack(geometry: Geometry, controls: &ControlsDefinition) -> Vec<Feature> {
    if !controls.is_multi_geometry {
        return vec![Feature::new(geometry)];
    }

    if let Geometry::GeometryCollection { geometries } = geometry {
        return geometries.into_iter().map(Feature::new).collect();
    }

    if let Some(parts) = controls
        .single_base_type()
        .and_then(|base| geometry.explode(base))
    {
        return parts.into_iter().map(Feature::new).collect();
    }

    vec![Feature::new(geometry)]
}

/// Liest einen Feldwert als Features. Fehlerhafte Werte gelten als leer.
pub fn decode(text: &str, controls: &ControlsDefinition) -> Vec<Feature> {
    match try_decode(text) {
        Ok(Some(geometry)) => unpack(geometry, controls),
        Ok(None) => Vec::new(),
        Err(e) => {
            log::warn!("Feldwert nicht lesbar, behandle als leer: {:#}", e);
            Vec::new()
        }
    }
}
