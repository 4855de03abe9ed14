//! Widget Controller für zentrale Event-Verarbeitung.

use super::{WidgetCommand, WidgetIntent, WidgetState};
use crate::core::StoreChange;

/// Orchestriert UI-Events und Use-Cases auf den WidgetState.
#[derive(Default)]
pub struct WidgetController;

impl WidgetController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut WidgetState,
        intent: WidgetIntent,
    ) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &WidgetState, intent: WidgetIntent) -> Vec<WidgetCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem WidgetState aus.
    /// Dispatcht an Feature-Handler in `handlers/` und verteilt danach
    /// die angefallenen Store-Benachrichtigungen.
    pub fn handle_command(
        &mut self,
        state: &mut WidgetState,
        command: WidgetCommand,
    ) -> anyhow::Result<()> {
        log::debug!("Widget '{}': {:?}", state.id, command);
        use super::handlers;

        match command {
            // === Toolbar ===
            WidgetCommand::ActivateTool { index } => handlers::toolbar::activate_tool(state, index),

            // === Zeichnen ===
            WidgetCommand::DrawClick { pos } => handlers::drawing::click(state, pos),
            WidgetCommand::FinishSketch => handlers::drawing::finish(state),
            WidgetCommand::AbortSketch => handlers::drawing::abort(state),

            // === Bearbeiten ===
            WidgetCommand::SelectFeatureAt {
                pos,
                tolerance,
                additive,
            } => handlers::modify::select_at(state, pos, tolerance, additive),
            WidgetCommand::BeginVertexDrag { pos, tolerance } => {
                handlers::modify::begin_drag(state, pos, tolerance)
            }
            WidgetCommand::DragVertexTo { pos } => handlers::modify::drag_to(state, pos),
            WidgetCommand::EndVertexDrag => handlers::modify::end_drag(state),

            // === Feld & Relationen ===
            WidgetCommand::SetGeometry { value } => handlers::field::set_geometry(state, &value),
            WidgetCommand::PickRelationFeature { pos, tolerance } => {
                handlers::relation::pick(state, pos, tolerance)
            }
        }

        Self::dispatch_store_changes(state);
        Ok(())
    }

    /// Verteilt Store-Benachrichtigungen synchron: zuerst an das Bearbeiten-Werkzeug,
    /// dann an den SyncBridge (ein Schreibvorgang pro Änderung).
    fn dispatch_store_changes(state: &mut WidgetState) {
        let changes: Vec<StoreChange> = state.store.take_changes();
        if changes.is_empty() {
            return;
        }

        if let Some(modify) = state.toolbar.as_mut().and_then(|t| t.modify_tool_mut()) {
            modify.on_store_changed(&state.store);
        }

        match state.sync.as_mut() {
            Some(sync) => {
                for change in &changes {
                    log::debug!("Store-Aenderung: {:?}", change);
                    sync.on_store_changed(&state.store, state.field.as_mut());
                }
            }
            None => log::warn!(
                "{} Store-Aenderungen in nicht bearbeitbarem Widget '{}' ohne Rueckschreiben",
                changes.len(),
                state.id
            ),
        }
    }
}
