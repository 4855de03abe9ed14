//! Viewport-Anpassung an einen Geometrie-Extent.
//!
//! Der Kern ruft `ViewportFitter::fit` nur nach dem Seeding auf; die
//! Kartenansicht selbst gehört dem Host. `MapView` ist eine einfache
//! Referenz-Implementierung mit Web-Mercator-Zoomstufen.

use super::Extent;
use glam::DVec2;

/// Kollaborator, der den sichtbaren Bereich auf einen Extent setzt.
pub trait ViewportFitter {
    /// Passt den sichtbaren Bereich an `extent` an, höchstens bis Zoomstufe `max_zoom`.
    fn fit(&mut self, extent: Extent, max_zoom: f64);
}

/// Kartenansicht mit Mittelpunkt und Zoomstufe.
#[derive(Debug, Clone)]
pub struct MapView {
    /// Mittelpunkt in Karten-Koordinaten
    pub center: DVec2,
    /// Zoomstufe (0 = ganze Welt auf einer Kachel)
    pub zoom: f64,
    /// Größe des Kartenbereichs in Pixeln
    pub size_px: DVec2,
    /// Kleinste erlaubte Zoomstufe
    pub min_zoom: f64,
    /// Letzter angepasster Extent und Zoom-Grenze (für `refit`)
    last_fit: Option<(Extent, f64)>,
    fit_count: usize,
}

impl MapView {
    /// Karten-Einheiten pro Pixel bei Zoomstufe 0 (EPSG:3857, 256px-Kacheln).
    pub const BASE_RESOLUTION: f64 = 156_543.033_928_041;

    /// Erstellt eine Ansicht mit Startwerten aus dem View-Hinweis.
    pub fn new(center: DVec2, zoom: f64, size_px: DVec2) -> Self {
        Self {
            center,
            zoom,
            size_px,
            min_zoom: 0.0,
            last_fit: None,
            fit_count: 0,
        }
    }

    /// Karten-Einheiten pro Pixel bei gegebener Zoomstufe.
    pub fn resolution_at(zoom: f64) -> f64 {
        Self::BASE_RESOLUTION / 2f64.powf(zoom)
    }

    /// Aktuell sichtbarer Bereich.
    pub fn visible_extent(&self) -> Extent {
        let half = self.size_px * Self::resolution_at(self.zoom) * 0.5;
        Extent {
            min: self.center - half,
            max: self.center + half,
        }
    }

    /// Anzahl bisheriger `fit`-Aufrufe.
    pub fn fit_count(&self) -> usize {
        self.fit_count
    }

    /// Zuletzt angepasster Extent.
    pub fn last_fit(&self) -> Option<Extent> {
        self.last_fit.map(|(extent, _)| extent)
    }

    /// Wendet den letzten Fit erneut an, z.B. nachdem der Container sichtbar wurde.
    pub fn refit(&mut self) {
        if let Some((extent, max_zoom)) = self.last_fit {
            self.fit(extent, max_zoom);
        }
    }

    /// Setzt die Pixelgröße des Kartenbereichs.
    pub fn set_size(&mut self, size_px: DVec2) {
        self.size_px = size_px;
    }
}

impl ViewportFitter for MapView {
    fn fit(&mut self, extent: Extent, max_zoom: f64) {
        self.center = extent.center();
        self.fit_count += 1;
        self.last_fit = Some((extent, max_zoom));

        let size = extent.size();
        let viewport = self.size_px.max(DVec2::ONE);
        // Benötigte Auflösung, damit der Extent in beide Richtungen passt
        let needed = (size.x / viewport.x).max(size.y / viewport.y);
        let zoom = if needed <= 0.0 {
            max_zoom
        } else {
            (Self::BASE_RESOLUTION / needed).log2()
        };
        self.zoom = zoom.clamp(self.min_zoom, max_zoom.max(self.min_zoom));

        log::debug!(
            "Viewport angepasst: center=({:.1}, {:.1}), zoom={:.2}",
            self.center.x,
            self.center.y,
            self.zoom
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn view() -> MapView {
        MapView::new(DVec2::ZERO, 2.0, DVec2::new(512.0, 512.0))
    }

    #[test]
    fn test_fit_point_uses_max_zoom() {
        let mut view = view();
        view.fit(Extent::from_point(DVec2::new(10.0, 20.0)), 18.0);
        assert_relative_eq!(view.zoom, 18.0);
        assert_eq!(view.center, DVec2::new(10.0, 20.0));
        assert_eq!(view.fit_count(), 1);
    }

    #[test]
    fn test_fit_large_extent_is_contained() {
        let mut view = view();
        let extent = Extent {
            min: DVec2::new(0.0, 0.0),
            max: DVec2::new(100_000.0, 50_000.0),
        };
        view.fit(extent, 18.0);
        assert!(view.zoom < 18.0);
        let visible = view.visible_extent();
        assert!(visible.min.x <= extent.min.x + 1e-6);
        assert!(visible.max.x >= extent.max.x - 1e-6);
        assert!(visible.max.y >= extent.max.y - 1e-6);
    }

    #[test]
    fn test_refit_repeats_last_fit() {
        let mut view = view();
        view.refit();
        assert_eq!(view.fit_count(), 0);

        view.fit(Extent::from_point(DVec2::new(1.0, 1.0)), 12.0);
        view.center = DVec2::ZERO;
        view.refit();
        assert_eq!(view.fit_count(), 2);
        assert_eq!(view.center, DVec2::new(1.0, 1.0));
        assert_relative_eq!(view.zoom, 12.0);
    }
}
