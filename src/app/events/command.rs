use glam::DVec2;

/// Mutierende Commands auf dem `WidgetState`.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetCommand {
    /// Toolbar-Button auslösen
    ActivateTool { index: usize },
    /// Stützpunkt im aktiven Zeichen-Werkzeug setzen
    DrawClick { pos: DVec2 },
    /// Laufende Skizze abschließen
    FinishSketch,
    /// Laufende Skizze verwerfen
    AbortSketch,
    /// Feature per Klick auswählen
    SelectFeatureAt {
        pos: DVec2,
        tolerance: f64,
        additive: bool,
    },
    /// Stützpunkt-Drag beginnen
    BeginVertexDrag { pos: DVec2, tolerance: f64 },
    /// Gezogenen Stützpunkt verschieben
    DragVertexTo { pos: DVec2 },
    /// Stützpunkt-Drag beenden
    EndVertexDrag,
    /// Store-Inhalt aus einem Feldwert ersetzen
    SetGeometry { value: String },
    /// Relations-Auswahl per Klick
    PickRelationFeature { pos: DVec2, tolerance: f64 },
}
