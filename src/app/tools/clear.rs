//! Löschen-Werkzeug: entfernt alle Features (Einmal-Aktion, kein Umschalter).

use super::StoreEdit;

#[derive(Debug, Clone)]
pub struct ClearTool {
    tooltip: String,
}

impl ClearTool {
    pub fn new(tooltip: impl Into<String>) -> Self {
        Self {
            tooltip: tooltip.into(),
        }
    }

    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    /// Erzeugt die Lösch-Aktion. Der Store wird zentral in `apply_store_edit` geleert.
    pub fn execute(&self) -> StoreEdit {
        StoreEdit::Clear
    }
}
