//! Bearbeiten-Werkzeug: Auswahl von Features plus Verschieben von Stützpunkten.

use super::{DrawingSurface, Interaction, StoreEdit};
use crate::core::{FeatureId, FeatureStore};
use glam::DVec2;
use indexmap::IndexSet;

/// Laufender Stützpunkt-Drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexDrag {
    /// Bearbeitetes Feature
    pub feature: FeatureId,
    /// Index des Stützpunkts (Zählung wie `Geometry::vertices`)
    pub vertex: usize,
}

/// Bearbeiten-Werkzeug (Select- und Modify-Interaktion).
#[derive(Debug, Clone)]
pub struct ModifyTool {
    tooltip: String,
    active: bool,
    selection: IndexSet<FeatureId>,
    drag: Option<VertexDrag>,
}

impl ModifyTool {
    pub fn new(tooltip: impl Into<String>) -> Self {
        Self {
            tooltip: tooltip.into(),
            active: false,
            selection: IndexSet::new(),
            drag: None,
        }
    }

    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Ausgewählte Features in Auswahlreihenfolge.
    pub fn selection(&self) -> &IndexSet<FeatureId> {
        &self.selection
    }

    /// Laufender Drag, falls vorhanden.
    pub fn drag(&self) -> Option<VertexDrag> {
        self.drag
    }

    pub(super) fn activate(&mut self, surface: &mut DrawingSurface) {
        self.active = true;
        surface.attach(Interaction::Select);
        surface.attach(Interaction::Modify);
    }

    pub(super) fn deactivate(&mut self, surface: &mut DrawingSurface) {
        self.active = false;
        self.reset();
        surface.detach(Interaction::Select);
        surface.detach(Interaction::Modify);
    }

    /// Verwirft Auswahl und laufenden Drag.
    pub fn reset(&mut self) {
        self.selection.clear();
        self.drag = None;
    }

    /// Wählt das nächstgelegene Feature innerhalb von `tolerance`.
    ///
    /// Ohne Treffer wird die Auswahl geleert (außer bei `additive`).
    pub fn select_at(
        &mut self,
        pos: DVec2,
        tolerance: f64,
        store: &FeatureStore,
        additive: bool,
    ) -> Option<FeatureId> {
        let hit = store
            .iter()
            .map(|(id, feature)| (id, feature.geometry.distance_to(pos)))
            .filter(|(_, distance)| *distance <= tolerance)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id);

        if !additive {
            self.selection.clear();
        }
        if let Some(id) = hit {
            self.selection.insert(id);
        }
        hit
    }

    /// Startet einen Drag auf dem nächsten Stützpunkt eines ausgewählten Features.
    pub fn begin_vertex_drag(&mut self, pos: DVec2, tolerance: f64, store: &FeatureStore) -> bool {
        self.drag = self
            .selection
            .iter()
            .filter_map(|id| {
                let feature = store.get(*id)?;
                let (vertex, distance) = feature.geometry.nearest_vertex(pos)?;
                Some((*id, vertex, distance))
            })
            .filter(|(_, _, distance)| *distance <= tolerance)
            .min_by(|a, b| a.2.total_cmp(&b.2))
            .map(|(feature, vertex, _)| VertexDrag { feature, vertex });
        self.drag.is_some()
    }

    /// Verschiebt den gezogenen Stützpunkt. Liefert die neue Geometrie als Store-Edit.
    pub fn drag_to(&self, pos: DVec2, store: &FeatureStore) -> Option<StoreEdit> {
        let drag = self.drag?;
        let mut geometry = store.get(drag.feature)?.geometry.clone();
        if !geometry.move_vertex(drag.vertex, pos) {
            return None;
        }
        Some(StoreEdit::ReplaceGeometry {
            id: drag.feature,
            geometry,
        })
    }

    /// Beendet den Drag. `false` wenn keiner lief.
    pub fn end_drag(&mut self) -> bool {
        self.drag.take().is_some()
    }

    /// Reaktion auf Store-Änderungen: Auswahl darf keine entfernten Features referenzieren.
    pub fn on_store_changed(&mut self, store: &FeatureStore) {
        if store.is_empty() {
            if !self.selection.is_empty() {
                log::debug!("Store geleert, Auswahl zurueckgesetzt");
            }
            self.reset();
            return;
        }
        self.selection.retain(|id| store.contains(*id));
        if self.drag.is_some_and(|d| !store.contains(d.feature)) {
            self.drag = None;
        }
    }
}
