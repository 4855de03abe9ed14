//! WKT/EWKT-Eingabe (nur 2D).
//!
//! Das Feld-Format ist GeoJSON; WKT wird beim Einlesen zusätzlich akzeptiert,
//! damit serverseitig als Text abgelegte Geometrien direkt übernommen werden.
//! Geparst wird mit dem `wkt`-Crate, ein EWKT-Präfix `SRID=…;` wird vorher entfernt.

use crate::core::geometry::close_ring;
use crate::core::Geometry;
use anyhow::{anyhow, bail, Result};
use glam::DVec2;
use std::str::FromStr;
use wkt::types::{Coord, LineString, Polygon};
use wkt::Wkt;

/// Liest eine WKT-Geometrie. `Ok(None)` für `POINT EMPTY`.
pub fn parse_wkt(text: &str) -> Result<Option<Geometry>> {
    let body = strip_srid(text.trim());
    let parsed = Wkt::<f64>::from_str(body).map_err(|e| anyhow!(e))?;
    from_wkt(parsed)
}

/// Prüft grob, ob ein Text wie WKT aussieht (beginnt mit einem Buchstaben).
pub fn looks_like_wkt(text: &str) -> bool {
    strip_srid(text.trim_start())
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
}

fn strip_srid(text: &str) -> &str {
    let has_prefix = text
        .get(..5)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("SRID="));
    match text.split_once(';') {
        Some((_, rest)) if has_prefix => rest.trim_start(),
        _ => text,
    }
}

fn coord(c: Coord<f64>) -> Result<DVec2> {
    if c.z.is_some() || c.m.is_some() {
        bail!("Nur 2D-Koordinaten werden unterstuetzt");
    }
    if !c.x.is_finite() || !c.y.is_finite() {
        bail!("Koordinate ausserhalb des Wertebereichs: ({}, {})", c.x, c.y);
    }
    Ok(DVec2::new(c.x, c.y))
}

fn line(line: LineString<f64>) -> Result<Vec<DVec2>> {
    line.0.into_iter().map(coord).collect()
}

fn rings(polygon: Polygon<f64>) -> Result<Vec<Vec<DVec2>>> {
    polygon
        .0
        .into_iter()
        .map(|ring| {
            let mut ring = line(ring)?;
            close_ring(&mut ring);
            Ok(ring)
        })
        .collect()
}

fn from_wkt(parsed: Wkt<f64>) -> Result<Option<Geometry>> {
    let geometry = match parsed {
        Wkt::Point(point) => match point.0 {
            Some(c) => Geometry::Point {
                coordinates: coord(c)?,
            },
            None => return Ok(None),
        },
        Wkt::LineString(l) => Geometry::LineString {
            coordinates: line(l)?,
        },
        Wkt::Polygon(p) => Geometry::Polygon {
            coordinates: rings(p)?,
        },
        // Leere Punkte (`MULTIPOINT (EMPTY, …)`) entfallen
        Wkt::MultiPoint(points) => Geometry::MultiPoint {
            coordinates: points
                .0
                .into_iter()
                .filter_map(|p| p.0)
                .map(coord)
                .collect::<Result<_>>()?,
        },
        Wkt::MultiLineString(lines) => Geometry::MultiLineString {
            coordinates: lines.0.into_iter().map(line).collect::<Result<_>>()?,
        },
        Wkt::MultiPolygon(polygons) => Geometry::MultiPolygon {
            coordinates: polygons.0.into_iter().map(rings).collect::<Result<_>>()?,
        },
        Wkt::GeometryCollection(collection) => {
            let mut geometries = Vec::with_capacity(collection.0.len());
            for part in collection.0 {
                geometries.extend(from_wkt(part)?);
            }
            Geometry::GeometryCollection { geometries }
        }
    };
    Ok(Some(geometry))
}
