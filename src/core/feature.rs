//! Features: eine Geometrie plus optionale, für den Kern opake Attribute.

use super::Geometry;
use anyhow::{Context, Result};
use serde::Deserialize;

/// Vom `FeatureStore` vergebener Schlüssel, stabil solange das Feature lebt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeatureId(pub u64);

/// Eine editierbare Geometrie-Einheit.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    /// Geometrie des Features
    pub geometry: Geometry,
    /// Externe ID (z.B. aus einer GeoJSON-FeatureCollection)
    pub external_id: Option<serde_json::Value>,
    /// Attribute, nicht Teil des Feld-Formats
    pub properties: serde_json::Map<String, serde_json::Value>,
}

impl Feature {
    /// Erstellt ein Feature ohne ID und Attribute.
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            external_id: None,
            properties: serde_json::Map::new(),
        }
    }

    /// Vergleicht die externe ID mit einem Feld-Wert (String oder Zahl).
    pub fn has_external_id(&self, id: &str) -> bool {
        match &self.external_id {
            Some(serde_json::Value::String(s)) => s == id,
            Some(serde_json::Value::Number(n)) => n.to_string() == id,
            _ => false,
        }
    }
}

impl From<Geometry> for Feature {
    fn from(geometry: Geometry) -> Self {
        Feature::new(geometry)
    }
}

#[derive(Deserialize)]
struct RawFeature {
    #[serde(default)]
    id: Option<serde_json::Value>,
    geometry: Option<Geometry>,
    #[serde(default)]
    properties: Option<serde_json::Map<String, serde_json::Value>>,
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum RawFeatureCollection {
    FeatureCollection { features: Vec<RawFeature> },
}

/// Liest eine GeoJSON-FeatureCollection (Feature-Quelle einer Anzeige-Karte).
///
/// Features ohne Geometrie (`"geometry": null`) werden übersprungen.
pub fn parse_feature_collection(text: &str) -> Result<Vec<Feature>> {
    let RawFeatureCollection::FeatureCollection { features } =
        serde_json::from_str(text).context("Ungueltige GeoJSON-FeatureCollection")?;

    let total = features.len();
    let parsed: Vec<Feature> = features
        .into_iter()
        .filter_map(|raw| {
            let geometry = raw.geometry?;
            Some(Feature {
                geometry,
                external_id: raw.id,
                properties: raw.properties.unwrap_or_default(),
            })
        })
        .collect();

    if parsed.len() < total {
        log::debug!(
            "{} Features ohne Geometrie uebersprungen",
            total - parsed.len()
        );
    }
    Ok(parsed)
}
