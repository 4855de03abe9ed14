//! Mapping von UI-Intents auf mutierende Widget-Commands.

use super::state::{WidgetMode, WidgetState};
use super::tools::Interaction;
use super::{WidgetCommand, WidgetIntent};

/// Übersetzt einen `WidgetIntent` in eine Sequenz ausführbarer `WidgetCommand`s.
///
/// Gesten werden nur übersetzt, wenn die passende Interaktion angehängt ist.
pub fn map_intent_to_commands(state: &WidgetState, intent: WidgetIntent) -> Vec<WidgetCommand> {
    let tolerance = state.defaults.pick_tolerance;
    let surface = &state.surface;

    match intent {
        WidgetIntent::ToolButtonClicked { index } => {
            if state.toolbar.is_none() {
                log::debug!("Widget '{}' hat keine Toolbar", state.id);
                return Vec::new();
            }
            vec![WidgetCommand::ActivateTool { index }]
        }
        WidgetIntent::PointerDown { pos, additive } => {
            if surface.draw_interaction().is_some() {
                vec![WidgetCommand::DrawClick { pos }]
            } else if surface.is_attached(Interaction::Select) {
                vec![WidgetCommand::SelectFeatureAt {
                    pos,
                    tolerance,
                    additive,
                }]
            } else if state.mode() == WidgetMode::RelationSelect && !state.controls.readonly {
                vec![WidgetCommand::PickRelationFeature { pos, tolerance }]
            } else {
                log::debug!("Klick ignoriert: keine passende Interaktion angehaengt");
                Vec::new()
            }
        }
        WidgetIntent::FinishSketchRequested if surface.draw_interaction().is_some() => {
            vec![WidgetCommand::FinishSketch]
        }
        WidgetIntent::AbortSketchRequested if surface.draw_interaction().is_some() => {
            vec![WidgetCommand::AbortSketch]
        }
        WidgetIntent::DragStarted { pos } if surface.is_attached(Interaction::Modify) => {
            vec![WidgetCommand::BeginVertexDrag { pos, tolerance }]
        }
        WidgetIntent::DragMoved { pos } if surface.is_attached(Interaction::Modify) => {
            vec![WidgetCommand::DragVertexTo { pos }]
        }
        WidgetIntent::DragEnded if surface.is_attached(Interaction::Modify) => {
            vec![WidgetCommand::EndVertexDrag]
        }
        WidgetIntent::SetGeometryRequested { value } => vec![WidgetCommand::SetGeometry { value }],
        other => {
            log::debug!("Geste ignoriert, Interaktion nicht angehaengt: {:?}", other);
            Vec::new()
        }
    }
}
