use glam::DVec2;

/// Eingaben aus UI und Host ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetIntent {
    /// Toolbar-Button geklickt
    ToolButtonClicked { index: usize },
    /// Klick in die Karte (Karten-Koordinaten)
    PointerDown { pos: DVec2, additive: bool },
    /// Skizze abschließen (Doppelklick, Enter)
    FinishSketchRequested,
    /// Skizze verwerfen (Escape)
    AbortSketchRequested,
    /// Maustaste gedrückt und Ziehen begonnen
    DragStarted { pos: DVec2 },
    /// Ziehen fortgesetzt
    DragMoved { pos: DVec2 },
    /// Maustaste losgelassen
    DragEnded,
    /// Geometrie programmatisch setzen (Feldwert-Format)
    SetGeometryRequested { value: String },
}
