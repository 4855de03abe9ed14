//! Geometrie-Werttypen im GeoJSON-Zuschnitt.
//!
//! `Geometry` ist direkt (de)serialisierbar: das `type`-Feld wird als interner Tag
//! geführt, die Koordinaten liegen als `[x, y]`-Arrays vor.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Basistyp einer Geometrie (ohne Multi-/Collection-Hülle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseType {
    /// Einzelner Punkt
    Point,
    /// Linienzug
    LineString,
    /// Polygon mit geschlossenen Ringen
    Polygon,
}

impl BaseType {
    /// Zugehöriger Multi-Typ (`Point` → `MultiPoint`, …).
    pub fn multi_type(self) -> GeometryType {
        match self {
            BaseType::Point => GeometryType::MultiPoint,
            BaseType::LineString => GeometryType::MultiLineString,
            BaseType::Polygon => GeometryType::MultiPolygon,
        }
    }

    /// Minimale Anzahl Stützpunkte für eine gültige Skizze dieses Typs.
    pub fn min_vertices(self) -> usize {
        match self {
            BaseType::Point => 1,
            BaseType::LineString => 2,
            BaseType::Polygon => 3,
        }
    }
}

/// Tag einer Geometrie (alle sieben Varianten).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryType {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

/// Achsenparalleles Rechteck in Karten-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    /// Untere linke Ecke
    pub min: DVec2,
    /// Obere rechte Ecke
    pub max: DVec2,
}

impl Extent {
    /// Extent, der genau einen Punkt umschließt.
    pub fn from_point(p: DVec2) -> Self {
        Self { min: p, max: p }
    }

    /// Erweitert den Extent um einen Punkt.
    pub fn extend(&mut self, p: DVec2) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Vereinigung zweier Extents.
    pub fn union(self, other: Extent) -> Extent {
        Extent {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Mittelpunkt.
    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }

    /// Breite und Höhe.
    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }

    /// `true` wenn der Extent keine Fläche hat (Punkt oder Linie entlang einer Achse).
    pub fn is_empty_area(&self) -> bool {
        let size = self.size();
        size.x <= 0.0 || size.y <= 0.0
    }

    /// Extent über eine Menge von Punkten. `None` bei leerer Menge.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a DVec2>) -> Option<Self> {
        let mut iter = points.into_iter();
        let mut extent = Extent::from_point(*iter.next()?);
        for p in iter {
            extent.extend(*p);
        }
        Some(extent)
    }
}

/// Geometrie als unveränderlicher Wert (Tagged Union).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point {
        #[serde(deserialize_with = "position::one")]
        coordinates: DVec2,
    },
    LineString {
        #[serde(deserialize_with = "position::list")]
        coordinates: Vec<DVec2>,
    },
    Polygon {
        #[serde(deserialize_with = "position::rings")]
        coordinates: Vec<Vec<DVec2>>,
    },
    MultiPoint {
        #[serde(deserialize_with = "position::list")]
        coordinates: Vec<DVec2>,
    },
    MultiLineString {
        #[serde(deserialize_with = "position::rings")]
        coordinates: Vec<Vec<DVec2>>,
    },
    MultiPolygon {
        #[serde(deserialize_with = "position::polygons")]
        coordinates: Vec<Vec<Vec<DVec2>>>,
    },
    GeometryCollection {
        geometries: Vec<Geometry>,
    },
}

impl Geometry {
    /// Erstellt einen Punkt.
    pub fn point(x: f64, y: f64) -> Self {
        Geometry::Point {
            coordinates: DVec2::new(x, y),
        }
    }

    /// Erstellt einen Linienzug.
    pub fn line_string(coordinates: Vec<DVec2>) -> Self {
        Geometry::LineString { coordinates }
    }

    /// Erstellt ein Polygon aus einem äußeren Ring. Der Ring wird bei Bedarf geschlossen.
    pub fn polygon(mut exterior: Vec<DVec2>) -> Self {
        close_ring(&mut exterior);
        Geometry::Polygon {
            coordinates: vec![exterior],
        }
    }

    /// Tag der Geometrie.
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point { .. } => GeometryType::Point,
            Geometry::LineString { .. } => GeometryType::LineString,
            Geometry::Polygon { .. } => GeometryType::Polygon,
            Geometry::MultiPoint { .. } => GeometryType::MultiPoint,
            Geometry::MultiLineString { .. } => GeometryType::MultiLineString,
            Geometry::MultiPolygon { .. } => GeometryType::MultiPolygon,
            Geometry::GeometryCollection { .. } => GeometryType::GeometryCollection,
        }
    }

    /// Basistyp für Einzel- und Multi-Geometrien, `None` für Collections.
    pub fn base_type(&self) -> Option<BaseType> {
        match self {
            Geometry::Point { .. } | Geometry::MultiPoint { .. } => Some(BaseType::Point),
            Geometry::LineString { .. } | Geometry::MultiLineString { .. } => {
                Some(BaseType::LineString)
            }
            Geometry::Polygon { .. } | Geometry::MultiPolygon { .. } => Some(BaseType::Polygon),
            Geometry::GeometryCollection { .. } => None,
        }
    }

    /// `true` für einteilige Geometrien (Point, LineString, Polygon).
    pub fn is_single(&self) -> bool {
        matches!(
            self,
            Geometry::Point { .. } | Geometry::LineString { .. } | Geometry::Polygon { .. }
        )
    }

    /// Packt einteilige Geometrien eines Basistyps zu der passenden Multi-Geometrie.
    ///
    /// Gibt `None` zurück, sobald ein Teil nicht vom Typ `base` ist.
    pub fn pack_multi<'a>(
        base: BaseType,
        parts: impl IntoIterator<Item = &'a Geometry>,
    ) -> Option<Geometry> {
        match base {
            BaseType::Point => {
                let mut coordinates = Vec::new();
                for part in parts {
                    let Geometry::Point { coordinates: c } = part else {
                        return None;
                    };
                    coordinates.push(*c);
                }
                Some(Geometry::MultiPoint { coordinates })
            }
            BaseType::LineString => {
                let mut coordinates = Vec::new();
                for part in parts {
                    let Geometry::LineString { coordinates: c } = part else {
                        return None;
                    };
                    coordinates.push(c.clone());
                }
                Some(Geometry::MultiLineString { coordinates })
            }
            BaseType::Polygon => {
                let mut coordinates = Vec::new();
                for part in parts {
                    let Geometry::Polygon { coordinates: c } = part else {
                        return None;
                    };
                    coordinates.push(c.clone());
                }
                Some(Geometry::MultiPolygon { coordinates })
            }
        }
    }

    /// Zerlegt eine Multi-Geometrie vom Basistyp `base` in ihre Teile (Reihenfolge bleibt).
    ///
    /// Gibt `None` zurück wenn die Geometrie nicht die passende Multi-Geometrie ist.
    pub fn explode(&self, base: BaseType) -> Option<Vec<Geometry>> {
        match (base, self) {
            (BaseType::Point, Geometry::MultiPoint { coordinates }) => Some(
                coordinates
                    .iter()
                    .map(|c| Geometry::Point { coordinates: *c })
                    .collect(),
            ),
            (BaseType::LineString, Geometry::MultiLineString { coordinates }) => Some(
                coordinates
                    .iter()
                    .map(|c| Geometry::LineString {
                        coordinates: c.clone(),
                    })
                    .collect(),
            ),
            (BaseType::Polygon, Geometry::MultiPolygon { coordinates }) => Some(
                coordinates
                    .iter()
                    .map(|c| Geometry::Polygon {
                        coordinates: c.clone(),
                    })
                    .collect(),
            ),
            _ => None,
        }
    }

    /// Alle Koordinaten in Speicherreihenfolge (inkl. schließender Ring-Punkte).
    pub fn coords(&self) -> Vec<DVec2> {
        let mut out = Vec::new();
        self.collect_coords(&mut out);
        out
    }

    fn collect_coords(&self, out: &mut Vec<DVec2>) {
        match self {
            Geometry::Point { coordinates } => out.push(*coordinates),
            Geometry::LineString { coordinates } | Geometry::MultiPoint { coordinates } => {
                out.extend_from_slice(coordinates)
            }
            Geometry::Polygon { coordinates } | Geometry::MultiLineString { coordinates } => {
                for ring in coordinates {
                    out.extend_from_slice(ring);
                }
            }
            Geometry::MultiPolygon { coordinates } => {
                for polygon in coordinates {
                    for ring in polygon {
                        out.extend_from_slice(ring);
                    }
                }
            }
            Geometry::GeometryCollection { geometries } => {
                for g in geometries {
                    g.collect_coords(out);
                }
            }
        }
    }

    /// Bounding-Box der Geometrie. `None` wenn keine Koordinaten vorhanden sind.
    pub fn extent(&self) -> Option<Extent> {
        Extent::from_points(self.coords().iter())
    }

    /// Bearbeitbare Stützpunkte (schließende Ring-Punkte ausgenommen).
    pub fn vertices(&self) -> Vec<DVec2> {
        let mut out = Vec::new();
        self.visit_rings(&mut |ring, closed| {
            let n = editable_len(ring, closed);
            out.extend_from_slice(&ring[..n]);
        });
        out
    }

    /// Anzahl bearbeitbarer Stützpunkte.
    pub fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Stützpunkt mit Index `index` (Zählung wie in `vertices`).
    pub fn vertex(&self, index: usize) -> Option<DVec2> {
        self.vertices().get(index).copied()
    }

    /// Nächster bearbeitbarer Stützpunkt zu `pos`: (Index, Distanz).
    pub fn nearest_vertex(&self, pos: DVec2) -> Option<(usize, f64)> {
        self.vertices()
            .iter()
            .enumerate()
            .map(|(i, v)| (i, v.distance(pos)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }

    /// Verschiebt einen Stützpunkt. Ring-Anfang und Ring-Ende bleiben deckungsgleich.
    ///
    /// Gibt `false` zurück wenn der Index außerhalb liegt.
    pub fn move_vertex(&mut self, index: usize, to: DVec2) -> bool {
        let mut remaining = index;
        let mut moved = false;
        self.visit_rings_mut(&mut |ring, closed| {
            if moved {
                return;
            }
            let n = editable_len(ring, closed);
            if remaining < n {
                ring[remaining] = to;
                if closed && remaining == 0 && ring.len() > n {
                    let last = ring.len() - 1;
                    ring[last] = to;
                }
                moved = true;
            } else {
                remaining -= n;
            }
        });
        moved
    }

    /// Minimale Distanz von `pos` zur Geometrie. Innerhalb eines Polygons ist sie 0.
    pub fn distance_to(&self, pos: DVec2) -> f64 {
        match self {
            Geometry::Point { coordinates } => coordinates.distance(pos),
            Geometry::MultiPoint { coordinates } => coordinates
                .iter()
                .map(|c| c.distance(pos))
                .fold(f64::INFINITY, f64::min),
            Geometry::LineString { coordinates } => polyline_distance(coordinates, pos),
            Geometry::MultiLineString { coordinates } => coordinates
                .iter()
                .map(|line| polyline_distance(line, pos))
                .fold(f64::INFINITY, f64::min),
            Geometry::Polygon { coordinates } => polygon_distance(coordinates, pos),
            Geometry::MultiPolygon { coordinates } => coordinates
                .iter()
                .map(|polygon| polygon_distance(polygon, pos))
                .fold(f64::INFINITY, f64::min),
            Geometry::GeometryCollection { geometries } => geometries
                .iter()
                .map(|g| g.distance_to(pos))
                .fold(f64::INFINITY, f64::min),
        }
    }

    /// Besucht alle Koordinatenfolgen; `closed` ist `true` für Polygon-Ringe.
    fn visit_rings(&self, f: &mut dyn FnMut(&[DVec2], bool)) {
        match self {
            Geometry::Point { coordinates } => f(std::slice::from_ref(coordinates), false),
            Geometry::LineString { coordinates } | Geometry::MultiPoint { coordinates } => {
                f(coordinates.as_slice(), false)
            }
            Geometry::MultiLineString { coordinates } => {
                for line in coordinates {
                    f(line.as_slice(), false);
                }
            }
            Geometry::Polygon { coordinates } => {
                for ring in coordinates {
                    f(ring.as_slice(), true);
                }
            }
            Geometry::MultiPolygon { coordinates } => {
                for polygon in coordinates {
                    for ring in polygon {
                        f(ring.as_slice(), true);
                    }
                }
            }
            Geometry::GeometryCollection { geometries } => {
                for g in geometries {
                    g.visit_rings(f);
                }
            }
        }
    }

    fn visit_rings_mut(&mut self, f: &mut dyn FnMut(&mut [DVec2], bool)) {
        match self {
            Geometry::Point { coordinates } => f(std::slice::from_mut(coordinates), false),
            Geometry::LineString { coordinates } | Geometry::MultiPoint { coordinates } => {
                f(coordinates.as_mut_slice(), false)
            }
            Geometry::MultiLineString { coordinates } => {
                for line in coordinates {
                    f(line.as_mut_slice(), false);
                }
            }
            Geometry::Polygon { coordinates } => {
                for ring in coordinates {
                    f(ring.as_mut_slice(), true);
                }
            }
            Geometry::MultiPolygon { coordinates } => {
                for polygon in coordinates {
                    for ring in polygon {
                        f(ring.as_mut_slice(), true);
                    }
                }
            }
            Geometry::GeometryCollection { geometries } => {
                for g in geometries {
                    g.visit_rings_mut(f);
                }
            }
        }
    }
}

/// Schließt einen Ring, falls erster und letzter Punkt abweichen.
pub fn close_ring(ring: &mut Vec<DVec2>) {
    if let (Some(first), Some(last)) = (ring.first().copied(), ring.last().copied()) {
        if ring.len() > 1 && first != last {
            ring.push(first);
        }
    }
}

/// Anzahl bearbeitbarer Punkte: geschlossene Ringe ohne den Schlusspunkt.
fn editable_len(ring: &[DVec2], closed: bool) -> usize {
    if closed && ring.len() > 1 && ring.first() == ring.last() {
        ring.len() - 1
    } else {
        ring.len()
    }
}

fn segment_distance(a: DVec2, b: DVec2, p: DVec2) -> f64 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return a.distance(p);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    (a + ab * t).distance(p)
}

fn polyline_distance(line: &[DVec2], pos: DVec2) -> f64 {
    match line {
        [] => f64::INFINITY,
        [only] => only.distance(pos),
        _ => line
            .windows(2)
            .map(|w| segment_distance(w[0], w[1], pos))
            .fold(f64::INFINITY, f64::min),
    }
}

/// Ray-Casting (Even-Odd) über alle Ringe, Löcher eingeschlossen.
fn ring_contains(ring: &[DVec2], p: DVec2) -> bool {
    let mut inside = false;
    let n = ring.len();
    if n < 3 {
        return false;
    }
    let mut j = n - 1;
    for i in 0..n {
        let (a, b) = (ring[i], ring[j]);
        if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
            inside = !inside;
        }
        j = i;
    }
    inside
}

fn polygon_distance(rings: &[Vec<DVec2>], pos: DVec2) -> f64 {
    let inside = rings
        .iter()
        .filter(|ring| ring_contains(ring, pos))
        .count()
        % 2
        == 1;
    if inside {
        return 0.0;
    }
    rings
        .iter()
        .map(|ring| polyline_distance(ring, pos))
        .fold(f64::INFINITY, f64::min)
}

/// GeoJSON-Positionen `[x, y, …]`: Höhe und weitere Ordinaten werden verworfen.
mod position {
    use glam::DVec2;
    use serde::de::{self, Deserializer, IgnoredAny, SeqAccess, Visitor};
    use serde::Deserialize;
    use std::fmt;

    struct Position(DVec2);

    struct PositionVisitor;

    impl<'de> Visitor<'de> for PositionVisitor {
        type Value = Position;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("eine Position [x, y] mit optionalen weiteren Ordinaten")
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Position, A::Error> {
            let x: f64 = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(0, &self))?;
            let y: f64 = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(1, &self))?;
            while seq.next_element::<IgnoredAny>()?.is_some() {}
            Ok(Position(DVec2::new(x, y)))
        }
    }

    impl<'de> Deserialize<'de> for Position {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_seq(PositionVisitor)
        }
    }

    pub fn one<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DVec2, D::Error> {
        Position::deserialize(deserializer).map(|p| p.0)
    }

    pub fn list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<DVec2>, D::Error> {
        let positions = Vec::<Position>::deserialize(deserializer)?;
        Ok(positions.into_iter().map(|p| p.0).collect())
    }

    pub fn rings<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Vec<DVec2>>, D::Error> {
        let rings = Vec::<Vec<Position>>::deserialize(deserializer)?;
        Ok(rings
            .into_iter()
            .map(|ring| ring.into_iter().map(|p| p.0).collect())
            .collect())
    }

    pub fn polygons<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<Vec<Vec<DVec2>>>, D::Error> {
        let polygons = Vec::<Vec<Vec<Position>>>::deserialize(deserializer)?;
        Ok(polygons
            .into_iter()
            .map(|rings| {
                rings
                    .into_iter()
                    .map(|ring| ring.into_iter().map(|p| p.0).collect())
                    .collect()
            })
            .collect())
    }
}
