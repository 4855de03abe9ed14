//! Abgleich zwischen `FeatureStore` und dem gebundenen Formularfeld.
//!
//! Start: Feldwert lesen, Store still befüllen, Viewport anpassen.
//! Danach: jede Store-Änderung wird kodiert und ins Feld geschrieben.

use crate::codec;
use crate::core::{FeatureStore, ViewportFitter};
use crate::shared::ControlsDefinition;
use std::cell::RefCell;
use std::rc::Rc;

/// Das externe, versteckte Formularfeld.
pub trait BoundField {
    /// Aktueller Feldwert.
    fn value(&self) -> String;
    /// Schreibt einen neuen Wert und meldet das Feld als geändert.
    fn write(&mut self, value: &str);
}

/// Einfaches Feld, das Änderungs-Ereignisse mitzählt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HiddenInput {
    value: String,
    change_events: usize,
    history: Vec<String>,
}

impl HiddenInput {
    /// Erstellt ein Feld mit Startwert (zählt nicht als Änderung).
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            change_events: 0,
            history: Vec::new(),
        }
    }

    /// Anzahl ausgelöster Änderungs-Ereignisse.
    pub fn change_events(&self) -> usize {
        self.change_events
    }

    /// Alle geschriebenen Werte in Reihenfolge.
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl BoundField for HiddenInput {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn write(&mut self, value: &str) {
        self.value = value.to_string();
        self.change_events += 1;
        self.history.push(self.value.clone());
    }
}

/// Geteiltes Feld: der Host behält einen Handle, das Widget schreibt hinein.
impl<F: BoundField> BoundField for Rc<RefCell<F>> {
    fn value(&self) -> String {
        self.borrow().value()
    }

    fn write(&mut self, value: &str) {
        self.borrow_mut().write(value);
    }
}

/// Befüllt den Store still aus einem Feldwert und passt den Viewport an.
///
/// Fehlerhafte Werte gelten als leer. Gibt die Anzahl geladener Features zurück.
pub fn seed_store(
    text: &str,
    controls: &ControlsDefinition,
    store: &mut FeatureStore,
    fitter: &mut dyn ViewportFitter,
    fit_max_zoom: f64,
) -> usize {
    let features = codec::decode(text, controls);
    let extent = codec::features_extent(&features);
    let count = store.seed(features).len();
    if let Some(extent) = extent {
        fitter.fit(extent, fit_max_zoom);
    }
    count
}

/// Start-Pfad: liest den aktuellen Feldwert in den Store (ohne Rückschreiben).
///
/// Ist das Feld leer, gilt `initial` (die Startgeometrie aus den Widget-Optionen).
pub fn seed_from_field(
    field: &dyn BoundField,
    initial: &str,
    controls: &ControlsDefinition,
    store: &mut FeatureStore,
    fitter: &mut dyn ViewportFitter,
    fit_max_zoom: f64,
) -> usize {
    let value = field.value();
    let (text, source) = if value.trim().is_empty() {
        (initial, "Startoptionen")
    } else {
        (value.as_str(), "Feldwert")
    };
    let count = seed_store(text, controls, store, fitter, fit_max_zoom);
    if count > 0 {
        log::info!("{} Features aus {} geladen", count, source);
    }
    count
}

/// Schreibt Store-Änderungen ins Feld. Nur für bearbeitbare Widgets.
#[derive(Debug, Clone)]
pub struct SyncBridge {
    controls: ControlsDefinition,
    writes: usize,
}

impl SyncBridge {
    pub fn new(controls: ControlsDefinition) -> Self {
        Self {
            controls,
            writes: 0,
        }
    }

    /// Kodiert den aktuellen Store-Inhalt und schreibt ihn ins Feld.
    pub fn on_store_changed(&mut self, store: &FeatureStore, field: &mut dyn BoundField) -> String {
        let value = codec::encode(store.features(), &self.controls);
        field.write(&value);
        self.writes += 1;
        log::debug!("Feld aktualisiert ({} Zeichen)", value.len());
        value
    }

    /// Programmatisches Setzen einer Geometrie.
    ///
    /// Ersetzt den Store-Inhalt, passt den Viewport an und schreibt den
    /// normalisierten Wert genau einmal zurück.
    pub fn set_geometry(
        &mut self,
        text: &str,
        store: &mut FeatureStore,
        field: &mut dyn BoundField,
        fitter: &mut dyn ViewportFitter,
        fit_max_zoom: f64,
    ) -> usize {
        let count = seed_store(text, &self.controls, store, fitter, fit_max_zoom);
        self.on_store_changed(store, field);
        count
    }

    /// Anzahl bisheriger Schreibvorgänge.
    pub fn writes(&self) -> usize {
        self.writes
    }
}
