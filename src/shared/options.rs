//! Konfiguration eines Karten-Widgets.
//!
//! `ControlsDefinition` und `WidgetOptions` kommen vom Formular (JSON, camelCase),
//! `WidgetDefaults` sind host-weite Standardwerte aus einer TOML-Datei.

use crate::core::BaseType;
use serde::{Deserialize, Serialize};

// ── Defaults ────────────────────────────────────────────────────────

/// Maximale Zoomstufe beim Anpassen des Viewports an eine Geometrie.
pub const FIT_MAX_ZOOM: f64 = 18.0;
/// Pick-Toleranz (Karten-Einheiten) für Auswahl und Stützpunkt-Drag.
pub const PICK_TOLERANCE: f64 = 10.0;
/// Deckkraft von Basis-Layern ohne eigene Angabe.
pub const BASE_LAYER_OPACITY: f32 = 0.8;
/// Standardgröße des Kartenbereichs in Pixeln.
pub const VIEWPORT_SIZE_PX: [f64; 2] = [640.0, 480.0];

// ── Controls-Definition ─────────────────────────────────────────────

/// Welche Werkzeuge ein Widget anbietet und wie Geometrien gepackt werden.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ControlsDefinition {
    /// Punkte zeichnen
    pub point: bool,
    /// Linien zeichnen
    pub line: bool,
    /// Polygone zeichnen
    pub polygon: bool,
    /// Mehrere Features erlaubt (Multi-Geometrie bzw. GeometryCollection)
    pub is_multi_geometry: bool,
    /// Nur Anzeige, keine Werkzeuge
    pub readonly: bool,
    /// Tooltip des Punkt-Werkzeugs
    pub draw_point_tooltip: String,
    /// Tooltip des Linien-Werkzeugs
    pub draw_line_tooltip: String,
    /// Tooltip des Polygon-Werkzeugs
    pub draw_polygon_tooltip: String,
    /// Tooltip des Bearbeiten-Werkzeugs
    pub modify_tooltip: String,
    /// Tooltip des Löschen-Werkzeugs
    pub clear_tooltip: String,
}

impl ControlsDefinition {
    /// Einfache Definition für genau einen Geometrietyp.
    pub fn single(base: BaseType, is_multi_geometry: bool) -> Self {
        Self {
            point: base == BaseType::Point,
            line: base == BaseType::LineString,
            polygon: base == BaseType::Polygon,
            is_multi_geometry,
            ..Self::default()
        }
    }

    /// Aktivierte Basistypen in Toolbar-Reihenfolge (Punkt, Linie, Polygon).
    pub fn enabled_types(&self) -> Vec<BaseType> {
        [
            (self.point, BaseType::Point),
            (self.line, BaseType::LineString),
            (self.polygon, BaseType::Polygon),
        ]
        .into_iter()
        .filter_map(|(enabled, base)| enabled.then_some(base))
        .collect()
    }

    /// Der Basistyp, wenn genau einer der drei Typen aktiviert ist.
    pub fn single_base_type(&self) -> Option<BaseType> {
        match self.enabled_types().as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    /// Tooltip des Zeichen-Werkzeugs für einen Basistyp.
    pub fn draw_tooltip(&self, base: BaseType) -> &str {
        match base {
            BaseType::Point => &self.draw_point_tooltip,
            BaseType::LineString => &self.draw_line_tooltip,
            BaseType::Polygon => &self.draw_polygon_tooltip,
        }
    }
}

// ── Widget-Optionen ─────────────────────────────────────────────────

/// Start-Ansicht der Karte.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewHint {
    /// Mittelpunkt in Karten-Koordinaten
    pub center: [f64; 2],
    /// Start-Zoomstufe
    pub zoom: f64,
    /// Zoom-Grenze beim Anpassen an eine Geometrie
    pub fit_max_zoom: Option<f64>,
}

impl Default for ViewHint {
    fn default() -> Self {
        Self {
            center: [0.0, 0.0],
            zoom: 2.0,
            fit_max_zoom: None,
        }
    }
}

/// Basis-Layer der Karte. Aufbau und Darstellung übernimmt der Host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type_")]
pub enum BaseLayer {
    #[serde(rename = "OSM")]
    Osm {
        #[serde(default)]
        opacity: Option<f32>,
    },
    #[serde(rename = "XYZ")]
    Xyz {
        url: String,
        #[serde(default)]
        opacity: Option<f32>,
    },
    #[serde(rename = "WMS")]
    Wms { url: String },
    #[serde(rename = "WMTS")]
    Wmts {
        layer: String,
        #[serde(default, rename = "matrixSet")]
        matrix_set: Option<String>,
        #[serde(default)]
        url: Option<String>,
        #[serde(default)]
        opacity: Option<f32>,
    },
}

impl BaseLayer {
    /// Effektive Deckkraft (WMS-Bildlayer sind immer deckend).
    pub fn opacity(&self) -> f32 {
        match self {
            BaseLayer::Osm { opacity } | BaseLayer::Xyz { opacity, .. } => {
                opacity.unwrap_or(BASE_LAYER_OPACITY)
            }
            BaseLayer::Wmts { opacity, .. } => opacity.unwrap_or(BASE_LAYER_OPACITY),
            BaseLayer::Wms { .. } => 1.0,
        }
    }
}

/// Feature-Quelle einer Anzeige-Karte.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureSourceOptions {
    /// URL der GeoJSON-FeatureCollection
    pub url: String,
    /// Vorausgewähltes Feature (externe ID); darauf wird gezoomt
    #[serde(default)]
    pub feature_id: Option<String>,
}

/// Startoptionen eines Widgets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WidgetOptions {
    /// Initialer Feldwert (GeoJSON-Geometrie oder leer)
    pub geojson: String,
    /// Start-Ansicht
    pub view: ViewHint,
    /// Basis-Layer
    pub base_layers: Vec<BaseLayer>,
    /// Optionale Feature-Quelle für Anzeige-Karten
    pub feature_source: Option<FeatureSourceOptions>,
}

impl WidgetOptions {
    /// Effektive Zoom-Grenze für `fit`.
    pub fn fit_max_zoom(&self, defaults: &WidgetDefaults) -> f64 {
        self.view.fit_max_zoom.unwrap_or(defaults.fit_max_zoom)
    }
}

// ── Host-Defaults (TOML) ────────────────────────────────────────────

/// Host-weite Standardwerte.
/// Wird als `geoform_map_widget.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetDefaults {
    /// Zoom-Grenze beim Anpassen an eine Geometrie
    pub fit_max_zoom: f64,
    /// Kleinste Zoomstufe der Kartenansicht
    pub min_zoom: f64,
    /// Pick-Toleranz in Karten-Einheiten
    pub pick_tolerance: f64,
    /// Größe des Kartenbereichs in Pixeln
    pub viewport_size_px: [f64; 2],
}

impl Default for WidgetDefaults {
    fn default() -> Self {
        Self {
            fit_max_zoom: FIT_MAX_ZOOM,
            min_zoom: 0.0,
            pick_tolerance: PICK_TOLERANCE,
            viewport_size_px: VIEWPORT_SIZE_PX,
        }
    }
}

impl WidgetDefaults {
    /// Lädt Defaults aus einer TOML-Datei; bei Fehlern gelten die Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(defaults) => {
                    log::info!("Widget-Defaults geladen aus: {}", path.display());
                    defaults
                }
                Err(e) => {
                    log::warn!("Defaults-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Defaults-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert die Defaults als TOML.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Widget-Defaults gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Standard-Pfad der Defaults-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("geoform_map_widget"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("geoform_map_widget.toml")
    }
}
