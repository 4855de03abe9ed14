use super::{Harness, WIDGET};
use geoform_map_widget::app::tools::ToolKind;
use geoform_map_widget::app::Interaction;
use geoform_map_widget::{codec, BaseType, ControlsDefinition, Geometry, GeometryType, WidgetIntent};
use glam::DVec2;

fn tool_index(harness: &Harness, kind: ToolKind) -> usize {
    harness
        .registry
        .get(WIDGET)
        .and_then(|state| state.toolbar.as_ref())
        .and_then(|toolbar| toolbar.find(kind))
        .expect("Werkzeug sollte vorhanden sein")
}

fn store_geometries(harness: &Harness) -> Vec<Geometry> {
    harness
        .registry
        .get(WIDGET)
        .expect("Widget sollte existieren")
        .store
        .geometries()
        .cloned()
        .collect()
}

#[test]
fn test_singleton_point_keeps_only_latest_drawing() {
    let controls = ControlsDefinition::single(BaseType::Point, false);
    let mut harness = Harness::new(controls.clone(), "");
    let draw = tool_index(&harness, ToolKind::Draw(BaseType::Point));
    harness.click_tool(draw);

    for (x, y) in [(1.0, 2.0), (5.0, 5.0), (-3.0, 7.5)] {
        harness.click_map(x, y);
        assert_eq!(harness.store_len(), 1);
        assert_eq!(store_geometries(&harness), vec![Geometry::point(x, y)]);
    }

    let decoded = codec::decode(&harness.field_value(), &controls);
    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded[0].geometry, Geometry::point(-3.0, 7.5));
}

#[test]
fn test_singleton_line_clears_on_new_sketch() {
    let controls = ControlsDefinition::single(BaseType::LineString, false);
    let mut harness = Harness::new(controls, "");
    harness.click_tool(tool_index(&harness, ToolKind::Draw(BaseType::LineString)));

    harness.click_map(0.0, 0.0);
    harness.click_map(10.0, 0.0);
    harness.send(WidgetIntent::FinishSketchRequested);
    assert_eq!(harness.store_len(), 1);

    harness.click_map(0.0, 5.0);
    assert!(harness.store_len() <= 1);
    harness.click_map(10.0, 5.0);
    harness.send(WidgetIntent::FinishSketchRequested);

    assert_eq!(
        store_geometries(&harness),
        vec![Geometry::line_string(vec![
            DVec2::new(0.0, 5.0),
            DVec2::new(10.0, 5.0)
        ])]
    );
    assert!(harness.field_value().contains("LineString"));
}

#[test]
fn test_multi_point_packing_order() {
    let controls = ControlsDefinition::single(BaseType::Point, true);
    let mut harness = Harness::new(controls.clone(), "");
    harness.click_tool(tool_index(&harness, ToolKind::Draw(BaseType::Point)));

    harness.click_map(0.0, 0.0);
    harness.click_map(1.0, 1.0);
    harness.click_map(2.0, 2.0);

    let value: serde_json::Value =
        serde_json::from_str(&harness.field_value()).expect("Feldwert sollte JSON sein");
    assert_eq!(value["type"], "MultiPoint");
    assert_eq!(
        value["coordinates"],
        serde_json::json!([[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]])
    );

    let decoded: Vec<Geometry> = codec::decode(&harness.field_value(), &controls)
        .into_iter()
        .map(|f| f.geometry)
        .collect();
    assert_eq!(
        decoded,
        vec![
            Geometry::point(0.0, 0.0),
            Geometry::point(1.0, 1.0),
            Geometry::point(2.0, 2.0)
        ]
    );
}

#[test]
fn test_activating_modify_deactivates_draw() {
    let controls = ControlsDefinition::single(BaseType::Polygon, false);
    let mut harness = Harness::new(controls, "");
    let draw = tool_index(&harness, ToolKind::Draw(BaseType::Polygon));
    let modify = tool_index(&harness, ToolKind::Modify);

    harness.click_tool(draw);
    harness.click_tool(modify);

    let state = harness.registry.get(WIDGET).expect("Widget sollte existieren");
    let toolbar = state.toolbar.as_ref().expect("Toolbar erwartet");
    assert!(!toolbar.tool(draw).unwrap().is_active());
    assert!(toolbar.tool(modify).unwrap().is_active());
    assert_eq!(
        state.surface.attached(),
        &[Interaction::Select, Interaction::Modify]
    );
}

#[test]
fn test_clear_writes_empty_sentinel_once() {
    let controls = ControlsDefinition::single(BaseType::Point, true);
    let initial = r#"{"type":"MultiPoint","coordinates":[[0,0],[1,1],[2,2]]}"#;
    let mut harness = Harness::new(controls, initial);
    assert_eq!(harness.store_len(), 3);
    assert!(harness.writes().is_empty());

    harness.click_tool(tool_index(&harness, ToolKind::Clear));

    assert_eq!(harness.store_len(), 0);
    assert_eq!(harness.writes(), vec![String::new()]);
}

#[test]
fn test_modify_drag_updates_field() {
    let controls = ControlsDefinition::single(BaseType::Polygon, false);
    let initial = "POLYGON((0 0, 10 0, 10 10, 0 10, 0 0))";
    let mut harness = Harness::new(controls, initial);
    harness.click_tool(tool_index(&harness, ToolKind::Modify));

    harness.click_map(5.0, 5.0);
    harness.send(WidgetIntent::DragStarted {
        pos: DVec2::new(10.0, 10.0),
    });
    harness.send(WidgetIntent::DragMoved {
        pos: DVec2::new(15.0, 12.0),
    });
    harness.send(WidgetIntent::DragEnded);

    let written = codec::try_decode(&harness.field_value())
        .expect("Feldwert sollte lesbar sein")
        .expect("Geometrie erwartet");
    assert_eq!(written.geometry_type(), GeometryType::Polygon);
    assert_eq!(written.vertex(2), Some(DVec2::new(15.0, 12.0)));
    assert_eq!(harness.writes().len(), 1);
}

#[test]
fn test_clear_resets_modify_selection() {
    let controls = ControlsDefinition::single(BaseType::Point, true);
    let mut harness = Harness::new(controls, "MULTIPOINT((1 1), (4 4))");
    harness.click_tool(tool_index(&harness, ToolKind::Modify));
    harness.click_map(1.0, 1.0);

    let selected = |h: &Harness| {
        h.registry
            .get(WIDGET)
            .and_then(|s| s.toolbar.as_ref())
            .and_then(|t| t.modify_tool())
            .map(|m| m.selection().len())
            .unwrap_or_default()
    };
    assert_eq!(selected(&harness), 1);

    harness.click_tool(tool_index(&harness, ToolKind::Clear));
    assert_eq!(selected(&harness), 0);
    assert_eq!(harness.field_value(), "");
}

#[test]
fn test_gestures_without_active_tool_are_ignored() {
    let controls = ControlsDefinition::single(BaseType::Point, false);
    let mut harness = Harness::new(controls, "");
    harness.click_map(3.0, 3.0);
    harness.send(WidgetIntent::DragStarted { pos: DVec2::ZERO });
    harness.send(WidgetIntent::FinishSketchRequested);

    assert_eq!(harness.store_len(), 0);
    assert!(harness.writes().is_empty());
}

#[test]
fn test_set_geometry_writes_normalized_value() {
    let controls = ControlsDefinition::single(BaseType::Point, false);
    let mut harness = Harness::new(controls, "");
    harness.send(WidgetIntent::SetGeometryRequested {
        value: "POINT(1 2)".into(),
    });

    assert_eq!(harness.store_len(), 1);
    assert_eq!(harness.writes().len(), 1);
    let written: Geometry =
        serde_json::from_str(&harness.field_value()).expect("GeoJSON erwartet");
    assert_eq!(written, Geometry::point(1.0, 2.0));
    assert_eq!(harness.view.borrow().fit_count(), 1);
}

#[test]
fn test_roundtrip_through_field() {
    let controls = ControlsDefinition::single(BaseType::Point, false);
    let mut harness = Harness::new(controls.clone(), "");
    harness.click_tool(tool_index(&harness, ToolKind::Draw(BaseType::Point)));
    harness.click_map(1.0, 2.0);

    let mut reopened = Harness::new(controls, &harness.field_value());
    assert_eq!(reopened.store_len(), 1);
    assert_eq!(
        store_geometries(&reopened),
        vec![Geometry::point(1.0, 2.0)]
    );
    assert_eq!(reopened.view.borrow().fit_count(), 1);
    reopened.click_map(0.0, 0.0);
    assert!(reopened.writes().is_empty());
}
