//! Feature-Handler für WidgetCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod drawing;
pub mod field;
pub mod modify;
pub mod relation;
pub mod toolbar;
