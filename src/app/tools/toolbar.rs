//! Toolbar: geordnete Werkzeug-Liste mit höchstens einem aktiven Umschalt-Werkzeug.

use super::{ClearTool, DrawTool, DrawingSurface, ModifyTool, StoreEdit, Tool, ToolKind};
use crate::shared::ControlsDefinition;

/// Ergebnis eines Button-Klicks.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolbarOutcome {
    /// Umschalt-Werkzeug mit diesem Index ist jetzt aktiv
    Activated(usize),
    /// Einmal-Aktion ausgeführt, Store-Edit muss angewendet werden
    Executed(StoreEdit),
    /// Unbekannter Index
    Ignored,
}

/// Verwaltet die Werkzeuge eines Widgets.
#[derive(Debug, Default, Clone)]
pub struct Toolbar {
    tools: Vec<Tool>,
}

impl Toolbar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Baut die Toolbar aus der Controls-Definition.
    ///
    /// Reihenfolge: Zeichnen (Punkt, Linie, Polygon je nach Flag), Bearbeiten, Löschen.
    /// Read-only-Widgets erhalten keine Toolbar.
    pub fn from_controls(controls: &ControlsDefinition) -> Option<Self> {
        if controls.readonly {
            return None;
        }
        let mut toolbar = Self::new();
        for base in controls.enabled_types() {
            toolbar.add_tool(Tool::Draw(DrawTool::new(base, controls.draw_tooltip(base))));
        }
        toolbar.add_tool(Tool::Modify(ModifyTool::new(controls.modify_tooltip.clone())));
        toolbar.add_tool(Tool::Clear(ClearTool::new(controls.clear_tooltip.clone())));
        Some(toolbar)
    }

    /// Hängt ein Werkzeug an und gibt seinen Index zurück.
    pub fn add_tool(&mut self, tool: Tool) -> usize {
        self.tools.push(tool);
        self.tools.len() - 1
    }

    /// Button-Klick auf Werkzeug `index`.
    ///
    /// Umschalt-Werkzeuge deaktivieren zuerst alle anderen (`notify_activated`) und
    /// hängen danach ihre eigenen Interaktionen an. Löschen lässt das aktive Werkzeug
    /// unverändert.
    pub fn click(&mut self, index: usize, surface: &mut DrawingSurface) -> ToolbarOutcome {
        let Some(tool) = self.tools.get(index) else {
            log::warn!("Unbekannter Werkzeug-Index: {}", index);
            return ToolbarOutcome::Ignored;
        };

        if !tool.is_toggle() {
            return match tool {
                Tool::Clear(clear) => ToolbarOutcome::Executed(clear.execute()),
                _ => ToolbarOutcome::Ignored,
            };
        }

        self.notify_activated(index, surface);
        let tool = &mut self.tools[index];
        if !tool.is_active() {
            tool.activate(surface);
            log::info!("Werkzeug aktiviert: {:?}", tool.kind());
        }
        ToolbarOutcome::Activated(index)
    }

    /// Deaktiviert still alle Umschalt-Werkzeuge außer `index`.
    pub fn notify_activated(&mut self, index: usize, surface: &mut DrawingSurface) {
        for (i, tool) in self.tools.iter_mut().enumerate() {
            if i != index && tool.is_active() {
                tool.deactivate(surface);
            }
        }
    }

    /// Deaktiviert alle Werkzeuge.
    pub fn deactivate_all(&mut self, surface: &mut DrawingSurface) {
        for tool in self.tools.iter_mut().filter(|t| t.is_active()) {
            tool.deactivate(surface);
        }
    }

    /// Index des aktiven Werkzeugs.
    pub fn active_index(&self) -> Option<usize> {
        self.tools.iter().position(Tool::is_active)
    }

    pub fn active_tool(&self) -> Option<&Tool> {
        self.tools.iter().find(|t| t.is_active())
    }

    /// Aktives Zeichen-Werkzeug.
    pub fn active_draw_tool_mut(&mut self) -> Option<&mut DrawTool> {
        self.tools.iter_mut().find_map(|tool| match tool {
            Tool::Draw(draw) if draw.is_active() => Some(draw),
            _ => None,
        })
    }

    /// Das Bearbeiten-Werkzeug (aktiv oder nicht).
    pub fn modify_tool(&self) -> Option<&ModifyTool> {
        self.tools.iter().find_map(|tool| match tool {
            Tool::Modify(modify) => Some(modify),
            _ => None,
        })
    }

    pub fn modify_tool_mut(&mut self) -> Option<&mut ModifyTool> {
        self.tools.iter_mut().find_map(|tool| match tool {
            Tool::Modify(modify) => Some(modify),
            _ => None,
        })
    }

    pub fn tool(&self, index: usize) -> Option<&Tool> {
        self.tools.get(index)
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    /// Index des ersten Werkzeugs der gegebenen Art.
    pub fn find(&self, kind: ToolKind) -> Option<usize> {
        self.tools.iter().position(|t| t.kind() == kind)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tools::Interaction;
    use crate::core::BaseType;

    fn controls() -> ControlsDefinition {
        ControlsDefinition {
            point: true,
            polygon: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_from_controls_order() {
        let toolbar = Toolbar::from_controls(&controls()).expect("Toolbar erwartet");
        let kinds: Vec<_> = toolbar.tools().iter().map(Tool::kind).collect();
        assert_eq!(
            kinds,
            vec![
                ToolKind::Draw(BaseType::Point),
                ToolKind::Draw(BaseType::Polygon),
                ToolKind::Modify,
                ToolKind::Clear,
            ]
        );
        assert_eq!(toolbar.active_index(), None);
    }

    #[test]
    fn test_readonly_has_no_toolbar() {
        let controls = ControlsDefinition {
            readonly: true,
            ..controls()
        };
        assert!(Toolbar::from_controls(&controls).is_none());
    }

    #[test]
    fn test_activation_is_exclusive() {
        let mut surface = DrawingSurface::new();
        let mut toolbar = Toolbar::from_controls(&controls()).unwrap();
        let draw = toolbar.find(ToolKind::Draw(BaseType::Point)).unwrap();
        let modify = toolbar.find(ToolKind::Modify).unwrap();

        assert_eq!(toolbar.click(draw, &mut surface), ToolbarOutcome::Activated(draw));
        assert_eq!(surface.attached(), &[Interaction::Draw(BaseType::Point)]);

        assert_eq!(toolbar.click(modify, &mut surface), ToolbarOutcome::Activated(modify));
        assert!(!toolbar.tool(draw).unwrap().is_active());
        assert!(toolbar.tool(modify).unwrap().is_active());
        assert_eq!(
            surface.attached(),
            toolbar.tool(modify).unwrap().interactions().as_slice()
        );
    }

    #[test]
    fn test_clear_keeps_active_tool() {
        let mut surface = DrawingSurface::new();
        let mut toolbar = Toolbar::from_controls(&controls()).unwrap();
        let modify = toolbar.find(ToolKind::Modify).unwrap();
        let clear = toolbar.find(ToolKind::Clear).unwrap();
        toolbar.click(modify, &mut surface);

        assert_eq!(
            toolbar.click(clear, &mut surface),
            ToolbarOutcome::Executed(StoreEdit::Clear)
        );
        assert_eq!(toolbar.active_index(), Some(modify));
    }

    #[test]
    fn test_repeated_click_and_unknown_index() {
        let mut surface = DrawingSurface::new();
        let mut toolbar = Toolbar::from_controls(&controls()).unwrap();
        toolbar.click(0, &mut surface);
        toolbar.click(0, &mut surface);
        assert_eq!(surface.attached().len(), 1);
        assert_eq!(toolbar.click(42, &mut surface), ToolbarOutcome::Ignored);

        toolbar.deactivate_all(&mut surface);
        assert!(surface.is_empty());
        assert_eq!(toolbar.active_index(), None);
    }
}
