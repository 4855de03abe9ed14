//! Handler für Toolbar-Buttons.

use crate::app::tools::ToolbarOutcome;
use crate::app::use_cases;
use crate::app::WidgetState;

/// Löst den Toolbar-Button `index` aus.
pub fn activate_tool(state: &mut WidgetState, index: usize) {
    let Some(toolbar) = state.toolbar.as_mut() else {
        return;
    };
    if let ToolbarOutcome::Executed(edit) = toolbar.click(index, &mut state.surface) {
        use_cases::store_edit::apply_store_edit(state, edit);
    }
}
