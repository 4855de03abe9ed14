//! Zeichenfläche: Menge der aktuell angehängten Interaktionen.

use crate::core::BaseType;

/// Eine Interaktion, die ein Werkzeug an die Zeichenfläche hängt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interaction {
    /// Skizzieren einer neuen Geometrie des Basistyps
    Draw(BaseType),
    /// Features per Klick auswählen
    Select,
    /// Stützpunkte ausgewählter Features verschieben
    Modify,
}

/// Geordnete Menge angehängter Interaktionen.
///
/// Gesten werden nur ausgewertet, wenn die passende Interaktion angehängt ist.
#[derive(Debug, Default, Clone)]
pub struct DrawingSurface {
    attached: Vec<Interaction>,
}

impl DrawingSurface {
    /// Erstellt eine leere Zeichenfläche.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt eine Interaktion an (doppelte Einträge werden ignoriert).
    pub fn attach(&mut self, interaction: Interaction) {
        if !self.attached.contains(&interaction) {
            self.attached.push(interaction);
        }
    }

    /// Entfernt eine Interaktion. `false` wenn sie nicht angehängt war.
    pub fn detach(&mut self, interaction: Interaction) -> bool {
        let before = self.attached.len();
        self.attached.retain(|i| *i != interaction);
        self.attached.len() != before
    }

    /// Angehängte Interaktionen in Reihenfolge des Anhängens.
    pub fn attached(&self) -> &[Interaction] {
        &self.attached
    }

    /// Prüft, ob eine Interaktion angehängt ist.
    pub fn is_attached(&self, interaction: Interaction) -> bool {
        self.attached.contains(&interaction)
    }

    /// Aktuell angehängte Zeichen-Interaktion, falls vorhanden.
    pub fn draw_interaction(&self) -> Option<BaseType> {
        self.attached.iter().find_map(|i| match i {
            Interaction::Draw(base) => Some(*base),
            _ => None,
        })
    }

    /// Gibt `true` zurück, wenn nichts angehängt ist.
    pub fn is_empty(&self) -> bool {
        self.attached.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_is_idempotent_and_ordered() {
        let mut surface = DrawingSurface::new();
        surface.attach(Interaction::Select);
        surface.attach(Interaction::Modify);
        surface.attach(Interaction::Select);
        assert_eq!(
            surface.attached(),
            &[Interaction::Select, Interaction::Modify]
        );
        assert!(surface.detach(Interaction::Select));
        assert!(!surface.detach(Interaction::Select));
        assert_eq!(surface.attached(), &[Interaction::Modify]);
    }

    #[test]
    fn test_draw_interaction_lookup() {
        let mut surface = DrawingSurface::new();
        assert_eq!(surface.draw_interaction(), None);
        surface.attach(Interaction::Draw(BaseType::Polygon));
        assert_eq!(surface.draw_interaction(), Some(BaseType::Polygon));
    }
}
