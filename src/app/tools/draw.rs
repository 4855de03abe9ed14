//! Zeichen-Werkzeug für einen Basistyp (Punkt, Linie oder Polygon).

use super::{DrawingSurface, Interaction};
use crate::core::{BaseType, Geometry};
use glam::DVec2;

/// Ereignis einer Zeichen-Geste.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawEvent {
    /// Erster Stützpunkt einer neuen Skizze gesetzt
    Started,
    /// Skizze abgeschlossen
    Completed(Geometry),
}

/// Zeichen-Werkzeug: sammelt Stützpunkte und erzeugt daraus eine Geometrie.
#[derive(Debug, Clone)]
pub struct DrawTool {
    base_type: BaseType,
    tooltip: String,
    active: bool,
    sketch: Vec<DVec2>,
}

impl DrawTool {
    /// Erstellt ein inaktives Zeichen-Werkzeug.
    pub fn new(base_type: BaseType, tooltip: impl Into<String>) -> Self {
        Self {
            base_type,
            tooltip: tooltip.into(),
            active: false,
            sketch: Vec::new(),
        }
    }

    /// Basistyp der erzeugten Geometrien.
    pub fn base_type(&self) -> BaseType {
        self.base_type
    }

    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Bisher gesetzte Stützpunkte der laufenden Skizze.
    pub fn sketch(&self) -> &[DVec2] {
        &self.sketch
    }

    /// Gibt `true` zurück, solange eine Skizze läuft.
    pub fn is_drawing(&self) -> bool {
        !self.sketch.is_empty()
    }

    pub(super) fn activate(&mut self, surface: &mut DrawingSurface) {
        self.active = true;
        surface.attach(Interaction::Draw(self.base_type));
    }

    pub(super) fn deactivate(&mut self, surface: &mut DrawingSurface) {
        self.active = false;
        self.sketch.clear();
        surface.detach(Interaction::Draw(self.base_type));
    }

    /// Setzt einen Stützpunkt.
    ///
    /// Der erste Punkt einer Skizze liefert `Started`; ein Punkt-Werkzeug ist
    /// mit dem ersten Klick fertig und liefert zusätzlich `Completed`.
    pub fn pointer_down(&mut self, pos: DVec2) -> Vec<DrawEvent> {
        let mut events = Vec::with_capacity(2);
        if self.sketch.is_empty() {
            events.push(DrawEvent::Started);
        }
        match self.base_type {
            BaseType::Point => {
                self.sketch.clear();
                events.push(DrawEvent::Completed(Geometry::Point { coordinates: pos }));
            }
            BaseType::LineString | BaseType::Polygon => self.sketch.push(pos),
        }
        events
    }

    /// Schließt die Skizze ab. `None` solange zu wenige Stützpunkte gesetzt sind.
    pub fn finish(&mut self) -> Option<DrawEvent> {
        if self.sketch.len() < self.base_type.min_vertices() {
            log::debug!(
                "Skizze {:?} mit {} Punkten kann nicht abgeschlossen werden",
                self.base_type,
                self.sketch.len()
            );
            return None;
        }
        let coordinates = std::mem::take(&mut self.sketch);
        let geometry = match self.base_type {
            BaseType::Point => Geometry::Point {
                coordinates: coordinates[0],
            },
            BaseType::LineString => Geometry::line_string(coordinates),
            BaseType::Polygon => Geometry::polygon(coordinates),
        };
        Some(DrawEvent::Completed(geometry))
    }

    /// Verwirft die laufende Skizze.
    pub fn abort(&mut self) {
        self.sketch.clear();
    }
}
