use geoform_map_widget::{
    BoundField, ControlsDefinition, Extent, HiddenInput, MapView, ViewportFitter, WidgetDefaults,
    WidgetIntent, WidgetOptions, WidgetRegistry,
};
use glam::DVec2;
use std::cell::RefCell;
use std::rc::Rc;

mod editing;
mod readonly_and_registry;

/// Viewport, den der Test nach der Übergabe an die Registry weiter beobachten kann.
#[derive(Clone)]
pub struct SharedView(pub Rc<RefCell<MapView>>);

impl ViewportFitter for SharedView {
    fn fit(&mut self, extent: Extent, max_zoom: f64) {
        self.0.borrow_mut().fit(extent, max_zoom);
    }
}

/// Registry mit einem Widget plus Handles auf Feld und Viewport.
pub struct Harness {
    pub registry: WidgetRegistry,
    pub field: Rc<RefCell<HiddenInput>>,
    pub view: Rc<RefCell<MapView>>,
}

pub const WIDGET: &str = "geometry";

impl Harness {
    pub fn new(controls: ControlsDefinition, initial: &str) -> Self {
        Self::with_options(controls, initial, WidgetOptions::default())
    }

    pub fn with_options(controls: ControlsDefinition, initial: &str, options: WidgetOptions) -> Self {
        let field = Rc::new(RefCell::new(HiddenInput::new(initial)));
        let view = Rc::new(RefCell::new(MapView::new(
            DVec2::ZERO,
            2.0,
            DVec2::new(640.0, 480.0),
        )));
        let mut registry = WidgetRegistry::new(WidgetDefaults::default());
        assert!(registry.init_widget(
            WIDGET,
            options,
            controls,
            Box::new(Rc::clone(&field)),
            Box::new(SharedView(Rc::clone(&view))),
        ));
        Self {
            registry,
            field,
            view,
        }
    }

    pub fn send(&mut self, intent: WidgetIntent) {
        self.registry
            .handle_intent(WIDGET, intent)
            .expect("Intent sollte ohne Fehler durchlaufen");
    }

    pub fn click_tool(&mut self, index: usize) {
        self.send(WidgetIntent::ToolButtonClicked { index });
    }

    pub fn click_map(&mut self, x: f64, y: f64) {
        self.send(WidgetIntent::PointerDown {
            pos: DVec2::new(x, y),
            additive: false,
        });
    }

    pub fn writes(&self) -> Vec<String> {
        self.field.borrow().history().to_vec()
    }

    pub fn field_value(&self) -> String {
        self.field.borrow().value()
    }

    pub fn store_len(&self) -> usize {
        self.registry
            .get(WIDGET)
            .expect("Widget sollte existieren")
            .store
            .len()
    }
}
