#![no_main]

use geoform_map_widget::{codec, ControlsDefinition};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let controls = ControlsDefinition {
        point: data.first().is_some_and(|b| b & 1 != 0),
        line: data.first().is_some_and(|b| b & 2 != 0),
        polygon: data.first().is_some_and(|b| b & 4 != 0),
        is_multi_geometry: data.first().is_some_and(|b| b & 8 != 0),
        ..Default::default()
    };

    // Lesen darf nie paniken; ein gelesener Wert muss stabil normalisieren
    let features = codec::decode(text, &controls);
    let value = codec::encode(&features, &controls);
    let again = codec::encode(&codec::decode(&value, &controls), &controls);
    assert_eq!(value, again);
});
