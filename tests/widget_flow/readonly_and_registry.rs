use super::{Harness, SharedView, WIDGET};
use geoform_map_widget::{
    BaseType, ControlsDefinition, Feature, Geometry, HiddenInput, MapView, WidgetIntent,
    WidgetMode, WidgetOptions,
};
use geoform_map_widget::shared::FeatureSourceOptions;
use glam::DVec2;
use std::cell::RefCell;
use std::rc::Rc;

const FEATURES: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {"type": "Feature", "id": 1, "geometry": {"type": "Point", "coordinates": [0, 0]},
         "properties": {"name": "Nord"}},
        {"type": "Feature", "id": 2, "geometry": {"type": "Point", "coordinates": [1000, 500]},
         "properties": {"name": "Sued"}}
    ]
}"#;

fn readonly_point() -> ControlsDefinition {
    ControlsDefinition {
        point: true,
        readonly: true,
        ..Default::default()
    }
}

fn relation_options(feature_id: Option<&str>) -> WidgetOptions {
    WidgetOptions {
        feature_source: Some(FeatureSourceOptions {
            url: "/relations.geojson".into(),
            feature_id: feature_id.map(str::to_string),
        }),
        ..Default::default()
    }
}

#[test]
fn test_readonly_seeds_once_and_never_writes() {
    let mut harness = Harness::new(readonly_point(), "POINT(5 5)");
    {
        let state = harness.registry.get(WIDGET).expect("Widget sollte existieren");
        assert_eq!(state.mode(), WidgetMode::ReadOnly);
        assert!(state.toolbar.is_none());
        assert!(state.sync.is_none());
        assert_eq!(
            state.store.geometries().cloned().collect::<Vec<_>>(),
            vec![Geometry::point(5.0, 5.0)]
        );
    }

    harness.click_tool(0);
    harness.click_map(5.0, 5.0);
    harness.send(WidgetIntent::SetGeometryRequested {
        value: "POINT(9 9)".into(),
    });

    // Direkte Mutation am Store darf ebenfalls kein Rückschreiben auslösen
    harness
        .registry
        .get_mut(WIDGET)
        .expect("Widget sollte existieren")
        .store
        .add(Feature::new(Geometry::point(7.0, 7.0)));
    harness.send(WidgetIntent::DragEnded);
    harness.send(WidgetIntent::SetGeometryRequested { value: String::new() });

    assert!(harness.writes().is_empty());
    assert_eq!(harness.field.borrow().change_events(), 0);
    assert_eq!(harness.view.borrow().fit_count(), 1);
}

#[test]
fn test_empty_field_seeds_from_initial_options() {
    let options = WidgetOptions {
        geojson: "POINT(5 5)".into(),
        ..Default::default()
    };
    let harness = Harness::with_options(readonly_point(), "", options.clone());
    assert_eq!(harness.store_len(), 1);
    assert!(harness.writes().is_empty());
    assert_eq!(harness.view.borrow().fit_count(), 1);
    assert_eq!(harness.view.borrow().center, DVec2::new(5.0, 5.0));

    // Ein gefülltes Feld hat Vorrang vor den Startoptionen
    let editor = Harness::with_options(
        ControlsDefinition::single(BaseType::Point, false),
        r#"{"type":"Point","coordinates":[1,2]}"#,
        options,
    );
    let state = editor.registry.get(WIDGET).expect("Widget sollte existieren");
    assert_eq!(
        state.store.geometries().cloned().collect::<Vec<_>>(),
        vec![Geometry::point(1.0, 2.0)]
    );
    assert!(editor.writes().is_empty());
}

#[test]
fn test_init_widget_twice_is_noop() {
    let mut harness = Harness::new(ControlsDefinition::single(BaseType::Point, false), "");
    let second = harness.registry.init_widget(
        WIDGET,
        WidgetOptions::default(),
        readonly_point(),
        Box::new(HiddenInput::new("POINT(1 1)")),
        Box::new(MapView::new(DVec2::ZERO, 0.0, DVec2::ONE)),
    );
    assert!(!second);
    let state = harness.registry.get(WIDGET).expect("Widget sollte existieren");
    assert_eq!(state.mode(), WidgetMode::Editor);
    assert!(state.store.is_empty());
}

#[test]
fn test_unknown_widget_is_an_error() {
    let mut harness = Harness::new(ControlsDefinition::single(BaseType::Point, false), "");
    let err = harness
        .registry
        .handle_intent("fehlt", WidgetIntent::DragEnded)
        .expect_err("Unbekanntes Widget sollte Fehler liefern");
    assert!(err.to_string().contains("fehlt"));
}

#[test]
fn test_display_load_zooms_to_preselected_feature() {
    let mut harness = Harness::with_options(ControlsDefinition::default(), "", relation_options(Some("2")));
    let ticket = harness
        .registry
        .begin_display_load(WIDGET)
        .expect("Ticket erwartet");
    assert_eq!(ticket.url, "/relations.geojson");

    assert!(harness
        .registry
        .complete_display_load(ticket, Ok(FEATURES.to_string())));

    let state = harness.registry.get(WIDGET).expect("Widget sollte existieren");
    assert_eq!(state.mode(), WidgetMode::RelationSelect);
    assert_eq!(state.store.len(), 2);
    let selected = state.selected_relation.expect("Auswahl erwartet");
    assert!(state.store.get(selected).unwrap().has_external_id("2"));
    assert_eq!(harness.view.borrow().center, DVec2::new(1000.0, 500.0));
    assert!(harness.writes().is_empty());
}

#[test]
fn test_display_load_without_selection_fits_all_features() {
    let mut harness = Harness::with_options(ControlsDefinition::default(), "", relation_options(Some("99")));
    let ticket = harness.registry.begin_display_load(WIDGET).unwrap();
    assert!(harness
        .registry
        .complete_display_load(ticket, Ok(FEATURES.to_string())));

    assert_eq!(harness.view.borrow().center, DVec2::new(500.0, 250.0));
    assert!(harness.registry.get(WIDGET).unwrap().selected_relation.is_none());
}

#[test]
fn test_display_load_cancelled_by_teardown_and_superseded() {
    let mut harness = Harness::with_options(ControlsDefinition::default(), "", relation_options(None));
    let stale = harness.registry.begin_display_load(WIDGET).unwrap();
    let fresh = harness.registry.begin_display_load(WIDGET).unwrap();

    assert!(!harness
        .registry
        .complete_display_load(stale, Ok(FEATURES.to_string())));
    assert!(!harness.registry.complete_display_load(
        fresh.clone(),
        Err(anyhow::anyhow!("HTTP 500"))
    ));

    let again = harness.registry.begin_display_load(WIDGET).unwrap();
    assert!(harness.registry.teardown(WIDGET));
    assert!(!harness.registry.exists(WIDGET));
    assert!(!harness
        .registry
        .complete_display_load(again, Ok(FEATURES.to_string())));
}

#[test]
fn test_relation_pick_writes_feature_id() {
    let mut harness = Harness::with_options(ControlsDefinition::default(), "", relation_options(None));
    let ticket = harness.registry.begin_display_load(WIDGET).unwrap();
    harness
        .registry
        .complete_display_load(ticket, Ok(FEATURES.to_string()));

    harness.click_map(1001.0, 499.0);
    assert_eq!(harness.field_value(), "2");

    harness.click_map(-5000.0, -5000.0);
    assert_eq!(harness.writes(), vec!["2".to_string(), String::new()]);
}

#[test]
fn test_readonly_relation_ignores_picks() {
    let controls = ControlsDefinition {
        readonly: true,
        ..Default::default()
    };
    let mut harness = Harness::with_options(controls, "1", relation_options(None));
    let ticket = harness.registry.begin_display_load(WIDGET).unwrap();
    harness
        .registry
        .complete_display_load(ticket, Ok(FEATURES.to_string()));

    // Feldwert "1" dient als Vorauswahl
    let state = harness.registry.get(WIDGET).unwrap();
    let selected = state.selected_relation.expect("Vorauswahl erwartet");
    assert!(state.store.get(selected).unwrap().has_external_id("1"));

    harness.click_map(1000.0, 500.0);
    assert!(harness.writes().is_empty());
}

#[test]
fn test_reinit_views_refits_every_fitted_widget() {
    let mut harness = Harness::new(readonly_point(), "POINT(5 5)");
    let other_view = Rc::new(RefCell::new(MapView::new(DVec2::ZERO, 2.0, DVec2::ONE)));
    harness.registry.init_widget(
        "leer",
        WidgetOptions::default(),
        ControlsDefinition::single(BaseType::Point, false),
        Box::new(HiddenInput::default()),
        Box::new(SharedView(Rc::clone(&other_view))),
    );

    harness.view.borrow_mut().center = DVec2::ZERO;
    assert_eq!(harness.registry.reinit_views(), 1);
    assert_eq!(harness.view.borrow().fit_count(), 2);
    assert_eq!(harness.view.borrow().center, DVec2::new(5.0, 5.0));
    assert_eq!(other_view.borrow().fit_count(), 0);
}
