//! Geoform Map Widget (CLI).
//!
//! Normalisiert Feldwerte von Geometrie-Widgets und berechnet Start-Ansichten.

use anyhow::{bail, Context, Result};
use geoform_map_widget::{codec, ControlsDefinition, MapView, ViewportFitter, WidgetDefaults};
use glam::DVec2;
use std::io::Read;

fn main() -> Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Geoform Map Widget v{} startet...", env!("CARGO_PKG_VERSION"));

    let args: Vec<String> = std::env::args().collect();
    let defaults = WidgetDefaults::load_from_file(&WidgetDefaults::config_path());

    match args.get(1).map(String::as_str) {
        Some("normalize") => normalize(&args[2..]),
        Some("extent") => extent(&args[2..], &defaults),
        Some("init-config") => {
            let path = WidgetDefaults::config_path();
            WidgetDefaults::default().save_to_file(&path)
        }
        Some("help") | None => {
            print_help();
            Ok(())
        }
        Some(other) => {
            print_help();
            bail!("Unbekannter Befehl: {other}")
        }
    }
}

/// `normalize <controls.json> [wert]`: liest, zerlegt und schreibt einen Feldwert neu.
fn normalize(args: &[String]) -> Result<()> {
    let Some(controls_path) = args.first() else {
        bail!("Pfad zur Controls-Definition fehlt");
    };
    let content = std::fs::read_to_string(controls_path)
        .with_context(|| format!("Controls-Definition nicht lesbar: {controls_path}"))?;
    let controls: ControlsDefinition =
        serde_json::from_str(&content).context("Controls-Definition ist kein gültiges JSON")?;

    let value = field_value(args.get(1))?;
    // Strikt lesen: auf der Kommandozeile ist ein kaputter Wert ein Fehler
    let features = match codec::try_decode(&value)? {
        Some(geometry) => codec::unpack(geometry, &controls),
        None => Vec::new(),
    };
    println!("{}", codec::encode(&features, &controls));
    Ok(())
}

/// `extent <wert>`: Extent und Start-Ansicht einer Geometrie.
fn extent(args: &[String], defaults: &WidgetDefaults) -> Result<()> {
    let value = field_value(args.first())?;
    let Some(extent) = codec::try_decode(&value)?.and_then(|g| g.extent()) else {
        println!("leer");
        return Ok(());
    };

    let mut view = MapView::new(DVec2::ZERO, 0.0, DVec2::from(defaults.viewport_size_px));
    view.min_zoom = defaults.min_zoom;
    view.fit(extent, defaults.fit_max_zoom);

    println!(
        "min=({}, {}) max=({}, {})",
        extent.min.x, extent.min.y, extent.max.x, extent.max.y
    );
    println!(
        "center=({:.3}, {:.3}) zoom={:.2}",
        view.center.x, view.center.y, view.zoom
    );
    Ok(())
}

/// Feldwert aus Argument oder stdin.
fn field_value(arg: Option<&String>) -> Result<String> {
    match arg {
        Some(value) => Ok(value.clone()),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Feldwert von stdin nicht lesbar")?;
            Ok(buffer)
        }
    }
}

fn print_help() {
    println!("Geoform Map Widget v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Befehle:");
    println!("  normalize <controls.json> [wert]  Feldwert normalisieren (GeoJSON oder WKT)");
    println!("  extent <wert>                     Extent und Start-Ansicht ausgeben");
    println!("  init-config                       Standard-Defaults als TOML schreiben");
}
