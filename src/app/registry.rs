//! Registry aller Karten-Widgets einer Seite.
//!
//! Ersetzt eine globale Map-Tabelle: der Host hält die Registry als expliziten
//! Kontext und reicht Intents und Ladeergebnisse pro Widget-ID herein.

use super::sync::BoundField;
use super::use_cases;
use super::{WidgetController, WidgetIntent, WidgetState};
use crate::core::ViewportFitter;
use crate::shared::{ControlsDefinition, WidgetDefaults, WidgetOptions};
use anyhow::{bail, Result};
use indexmap::IndexMap;

/// Ausstehender Ladevorgang einer Feature-Quelle.
///
/// Abschlüsse für abgebaute Widgets oder überholte Tickets werden verworfen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLoadTicket {
    widget_id: String,
    generation: u64,
    /// Zu ladende URL
    pub url: String,
}

impl DisplayLoadTicket {
    /// ID des Widgets, für das geladen wird.
    pub fn widget_id(&self) -> &str {
        &self.widget_id
    }
}

/// Alle Widgets in Initialisierungsreihenfolge.
pub struct WidgetRegistry {
    widgets: IndexMap<String, WidgetState>,
    controller: WidgetController,
    defaults: WidgetDefaults,
    next_generation: u64,
}

impl Default for WidgetRegistry {
    fn default() -> Self {
        Self::new(WidgetDefaults::default())
    }
}

impl WidgetRegistry {
    pub fn new(defaults: WidgetDefaults) -> Self {
        Self {
            widgets: IndexMap::new(),
            controller: WidgetController::new(),
            defaults,
            next_generation: 1,
        }
    }

    /// Initialisiert ein Widget. `false` (No-op) wenn die ID bereits existiert.
    pub fn init_widget(
        &mut self,
        id: &str,
        options: WidgetOptions,
        controls: ControlsDefinition,
        field: Box<dyn BoundField>,
        fitter: Box<dyn ViewportFitter>,
    ) -> bool {
        if self.widgets.contains_key(id) {
            log::debug!("Widget '{}' ist bereits initialisiert", id);
            return false;
        }
        let state = WidgetState::new(id, options, controls, self.defaults.clone(), field, fitter);
        self.widgets.insert(id.to_string(), state);
        true
    }

    pub fn exists(&self, id: &str) -> bool {
        self.widgets.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&WidgetState> {
        self.widgets.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut WidgetState> {
        self.widgets.get_mut(id)
    }

    /// Widget-IDs in Initialisierungsreihenfolge.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.widgets.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Reicht einen Intent an das Widget `id` weiter.
    pub fn handle_intent(&mut self, id: &str, intent: WidgetIntent) -> Result<()> {
        let Some(state) = self.widgets.get_mut(id) else {
            bail!("Unbekanntes Widget: {id}");
        };
        self.controller.handle_intent(state, intent)
    }

    /// Baut ein Widget ab. Offene Ladevorgänge werden dabei ungültig.
    pub fn teardown(&mut self, id: &str) -> bool {
        let Some(mut state) = self.widgets.shift_remove(id) else {
            return false;
        };
        if let Some(toolbar) = state.toolbar.as_mut() {
            toolbar.deactivate_all(&mut state.surface);
        }
        log::info!("Widget '{}' abgebaut", id);
        true
    }

    /// Wendet den letzten Fit jedes Widgets erneut an (z.B. nachdem ein
    /// verborgener Container sichtbar wurde). Gibt die Anzahl angepasster Widgets zurück.
    pub fn reinit_views(&mut self) -> usize {
        self.widgets
            .values_mut()
            .map(WidgetState::refit_view)
            .filter(|refitted| *refitted)
            .count()
    }

    /// Startet das Laden der Feature-Quelle eines Widgets.
    ///
    /// `None` wenn das Widget fehlt oder keine Feature-Quelle hat. Ein neues Ticket
    /// überholt ältere Tickets desselben Widgets.
    pub fn begin_display_load(&mut self, id: &str) -> Option<DisplayLoadTicket> {
        let state = self.widgets.get_mut(id)?;
        let url = state.options.feature_source.as_ref()?.url.clone();

        let generation = self.next_generation;
        self.next_generation += 1;
        state.load_generation = generation;

        log::debug!("Lade Feature-Quelle fuer '{}': {}", id, url);
        Some(DisplayLoadTicket {
            widget_id: id.to_string(),
            generation,
            url,
        })
    }

    /// Übernimmt das Ergebnis eines Ladevorgangs.
    ///
    /// Fehler werden geloggt, nicht weitergereicht. Gibt `true` zurück, wenn
    /// Features übernommen wurden.
    pub fn complete_display_load(
        &mut self,
        ticket: DisplayLoadTicket,
        result: Result<String>,
    ) -> bool {
        let Some(state) = self.widgets.get_mut(&ticket.widget_id) else {
            log::debug!(
                "Ladeergebnis fuer abgebautes Widget '{}' verworfen",
                ticket.widget_id
            );
            return false;
        };
        if state.load_generation != ticket.generation {
            log::debug!("Ueberholtes Ladeergebnis fuer '{}' verworfen", ticket.widget_id);
            return false;
        }

        let text = match result {
            Ok(text) => text,
            Err(e) => {
                log::warn!("Feature-Quelle {} nicht ladbar: {:#}", ticket.url, e);
                return false;
            }
        };

        match use_cases::display_load::apply_feature_collection(state, &text) {
            Ok(_) => true,
            Err(e) => {
                log::warn!("Feature-Quelle {} fehlerhaft: {:#}", ticket.url, e);
                false
            }
        }
    }
}
