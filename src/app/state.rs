//! Widget State: Store, Werkzeuge, Feld und Viewport eines Karten-Widgets.

use super::sync::{seed_from_field, BoundField, SyncBridge};
use super::tools::{DrawingSurface, Toolbar};
use crate::core::{Extent, FeatureId, FeatureStore, ViewportFitter};
use crate::shared::{ControlsDefinition, WidgetDefaults, WidgetOptions};

/// Art des Widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetMode {
    /// Geometrie-Editor mit Toolbar und Rückschreiben ins Feld
    Editor,
    /// Nur Anzeige der Geometrie aus dem Feld
    ReadOnly,
    /// Auswahl eines Features aus einer Feature-Quelle; das Feld hält dessen ID
    RelationSelect,
}

/// Gesamter Zustand eines Widgets.
pub struct WidgetState {
    /// ID des Widgets (Formularfeld-OID)
    pub id: String,
    /// Controls-Definition des Formulars
    pub controls: ControlsDefinition,
    /// Startoptionen
    pub options: WidgetOptions,
    /// Host-Defaults
    pub defaults: WidgetDefaults,
    /// Features des Widgets
    pub store: FeatureStore,
    /// Angehängte Interaktionen
    pub surface: DrawingSurface,
    /// Toolbar (nur Editor)
    pub toolbar: Option<Toolbar>,
    /// Rückschreiben ins Feld (nur Editor)
    pub sync: Option<SyncBridge>,
    /// Gebundenes Formularfeld
    pub field: Box<dyn BoundField>,
    /// Viewport-Kollaborator
    pub fitter: Box<dyn ViewportFitter>,
    /// Ausgewähltes Feature (nur Relations-Auswahl)
    pub selected_relation: Option<FeatureId>,
    last_fit: Option<(Extent, f64)>,
    pub(crate) load_generation: u64,
}

impl WidgetState {
    /// Initialisiert ein Widget: Feldwert (sonst `options.geojson`) laden, Toolbar und Sync aufbauen.
    pub fn new(
        id: impl Into<String>,
        options: WidgetOptions,
        controls: ControlsDefinition,
        defaults: WidgetDefaults,
        field: Box<dyn BoundField>,
        fitter: Box<dyn ViewportFitter>,
    ) -> Self {
        let mut state = Self {
            id: id.into(),
            controls,
            options,
            defaults,
            store: FeatureStore::new(),
            surface: DrawingSurface::new(),
            toolbar: None,
            sync: None,
            field,
            fitter,
            selected_relation: None,
            last_fit: None,
            load_generation: 0,
        };

        match state.mode() {
            WidgetMode::RelationSelect => {}
            WidgetMode::ReadOnly => state.seed_from_field(),
            WidgetMode::Editor => {
                state.seed_from_field();
                state.toolbar = Toolbar::from_controls(&state.controls);
                state.sync = Some(SyncBridge::new(state.controls.clone()));
            }
        }

        log::info!(
            "Widget '{}' initialisiert ({:?}, {} Features)",
            state.id,
            state.mode(),
            state.store.len()
        );
        state
    }

    fn seed_from_field(&mut self) {
        let max_zoom = self.fit_max_zoom();
        seed_from_field(
            self.field.as_ref(),
            &self.options.geojson,
            &self.controls,
            &mut self.store,
            self.fitter.as_mut(),
            max_zoom,
        );
        self.remember_store_fit(max_zoom);
    }

    /// Merkt sich den Store-Extent als letzten Fit (nach stillem Befüllen).
    pub(crate) fn remember_store_fit(&mut self, max_zoom: f64) {
        if let Some(extent) = self.store.extent() {
            self.last_fit = Some((extent, max_zoom));
        }
    }

    /// Art des Widgets.
    pub fn mode(&self) -> WidgetMode {
        if self.options.feature_source.is_some() {
            WidgetMode::RelationSelect
        } else if self.controls.readonly {
            WidgetMode::ReadOnly
        } else {
            WidgetMode::Editor
        }
    }

    /// Effektive Zoom-Grenze beim Anpassen.
    pub fn fit_max_zoom(&self) -> f64 {
        self.options.fit_max_zoom(&self.defaults)
    }

    /// Passt den Viewport an und merkt sich den Extent für `refit_view`.
    pub fn fit_view(&mut self, extent: Extent, max_zoom: f64) {
        self.fitter.fit(extent, max_zoom);
        self.last_fit = Some((extent, max_zoom));
    }

    /// Wendet den letzten Fit erneut an. `false` wenn es noch keinen gab.
    pub fn refit_view(&mut self) -> bool {
        match self.last_fit {
            Some((extent, max_zoom)) => {
                self.fitter.fit(extent, max_zoom);
                true
            }
            None => false,
        }
    }

    /// Zuletzt angepasster Extent.
    pub fn last_fit(&self) -> Option<Extent> {
        self.last_fit.map(|(extent, _)| extent)
    }

    /// Aktueller Feldwert.
    pub fn field_value(&self) -> String {
        self.field.value()
    }
}
