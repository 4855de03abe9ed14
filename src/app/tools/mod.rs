//! Werkzeuge der Toolbar: Zeichnen, Bearbeiten, Löschen.
//!
//! Werkzeuge verändern den `FeatureStore` nie direkt. Sie erzeugen reine Daten
//! (`DrawEvent`, `StoreEdit`), die Mutation erfolgt zentral in `apply_store_edit`.

pub mod clear;
pub mod draw;
pub mod modify;
mod surface;
pub mod toolbar;

pub use clear::ClearTool;
pub use draw::{DrawEvent, DrawTool};
pub use modify::{ModifyTool, VertexDrag};
pub use surface::{DrawingSurface, Interaction};
pub use toolbar::{Toolbar, ToolbarOutcome};

use crate::core::{BaseType, Feature, FeatureId, Geometry};

/// Store-Mutation als Daten.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEdit {
    /// Alle Features entfernen (benachrichtigt auch bei leerem Store)
    Clear,
    /// Vor einer neuen Skizze im Einzel-Modus leeren (No-op bei leerem Store)
    ClearForSingleton,
    /// Feature anhängen
    Add(Feature),
    /// Geometrie eines Features ersetzen
    ReplaceGeometry { id: FeatureId, geometry: Geometry },
}

/// Art eines Werkzeugs, z.B. für `Toolbar::find`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    Draw(BaseType),
    Modify,
    Clear,
}

/// Ein Toolbar-Werkzeug.
#[derive(Debug, Clone)]
pub enum Tool {
    Draw(DrawTool),
    Modify(ModifyTool),
    Clear(ClearTool),
}

impl Tool {
    pub fn kind(&self) -> ToolKind {
        match self {
            Tool::Draw(tool) => ToolKind::Draw(tool.base_type()),
            Tool::Modify(_) => ToolKind::Modify,
            Tool::Clear(_) => ToolKind::Clear,
        }
    }

    /// Tooltip des Buttons.
    pub fn tooltip(&self) -> &str {
        match self {
            Tool::Draw(tool) => tool.tooltip(),
            Tool::Modify(tool) => tool.tooltip(),
            Tool::Clear(tool) => tool.tooltip(),
        }
    }

    /// Umschalt-Werkzeuge sind exklusiv aktiv; Löschen ist eine Einmal-Aktion.
    pub fn is_toggle(&self) -> bool {
        !matches!(self, Tool::Clear(_))
    }

    pub fn is_active(&self) -> bool {
        match self {
            Tool::Draw(tool) => tool.is_active(),
            Tool::Modify(tool) => tool.is_active(),
            Tool::Clear(_) => false,
        }
    }

    /// Interaktionen, die das Werkzeug im aktiven Zustand anhängt.
    pub fn interactions(&self) -> Vec<Interaction> {
        match self {
            Tool::Draw(tool) => vec![Interaction::Draw(tool.base_type())],
            Tool::Modify(_) => vec![Interaction::Select, Interaction::Modify],
            Tool::Clear(_) => Vec::new(),
        }
    }

    /// Aktiviert das Werkzeug und hängt seine Interaktionen an.
    pub fn activate(&mut self, surface: &mut DrawingSurface) {
        match self {
            Tool::Draw(tool) => tool.activate(surface),
            Tool::Modify(tool) => tool.activate(surface),
            Tool::Clear(_) => {}
        }
    }

    /// Deaktiviert das Werkzeug und entfernt seine Interaktionen.
    pub fn deactivate(&mut self, surface: &mut DrawingSurface) {
        match self {
            Tool::Draw(tool) => tool.deactivate(surface),
            Tool::Modify(tool) => tool.deactivate(surface),
            Tool::Clear(_) => {}
        }
    }
}
