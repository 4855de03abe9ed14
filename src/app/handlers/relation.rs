//! Handler für Relations-Auswahl-Karten.

use crate::app::use_cases;
use crate::app::WidgetState;
use glam::DVec2;

/// Wählt ein Feature per Klick und schreibt seine ID ins Feld.
pub fn pick(state: &mut WidgetState, pos: DVec2, tolerance: f64) {
    use_cases::relation_select::pick_feature(state, pos, tolerance);
}
