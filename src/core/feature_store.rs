//! Geordnete, veränderliche Feature-Sammlung eines Widgets.
//!
//! Jede Mutation erzeugt genau eine `StoreChange`-Benachrichtigung. Die
//! Benachrichtigungen werden vom Controller noch im selben Handler-Aufruf
//! abgeholt (`take_changes`) und synchron verteilt. Das Seeding beim Start
//! läuft über `seed` und erzeugt keine Benachrichtigung.

use super::{Extent, Feature, FeatureId, Geometry};
use indexmap::IndexMap;

/// Art einer Store-Mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreChange {
    /// Feature hinzugefügt
    Added(FeatureId),
    /// Geometrie eines Features ersetzt
    GeometryChanged(FeatureId),
    /// Einzelnes Feature entfernt
    Removed(FeatureId),
    /// Store geleert (auch wenn er bereits leer war)
    Cleared,
}

/// Feature-Sammlung mit Einfügereihenfolge.
#[derive(Debug)]
pub struct FeatureStore {
    features: IndexMap<FeatureId, Feature>,
    next_id: u64,
    revision: u64,
    pending: Vec<StoreChange>,
}

impl Default for FeatureStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self {
            features: IndexMap::new(),
            next_id: 1,
            revision: 0,
            pending: Vec::new(),
        }
    }

    fn allocate_id(&mut self) -> FeatureId {
        let id = FeatureId(self.next_id);
        self.next_id += 1;
        id
    }

    fn notify(&mut self, change: StoreChange) {
        self.revision += 1;
        self.pending.push(change);
    }

    /// Hängt ein Feature an und gibt seine ID zurück.
    pub fn add(&mut self, feature: Feature) -> FeatureId {
        let id = self.allocate_id();
        self.features.insert(id, feature);
        self.notify(StoreChange::Added(id));
        id
    }

    /// Entfernt alle Features. Benachrichtigt immer genau einmal.
    pub fn clear(&mut self) {
        self.features.clear();
        self.notify(StoreChange::Cleared);
    }

    /// Ersetzt die Geometrie eines Features. `false` wenn die ID unbekannt ist.
    pub fn replace_geometry(&mut self, id: FeatureId, geometry: Geometry) -> bool {
        let Some(feature) = self.features.get_mut(&id) else {
            return false;
        };
        feature.geometry = geometry;
        self.notify(StoreChange::GeometryChanged(id));
        true
    }

    /// Entfernt ein einzelnes Feature (Reihenfolge der übrigen bleibt erhalten).
    pub fn remove(&mut self, id: FeatureId) -> Option<Feature> {
        let removed = self.features.shift_remove(&id)?;
        self.notify(StoreChange::Removed(id));
        Some(removed)
    }

    /// Ersetzt den Inhalt ohne Benachrichtigung (Start-Seeding, Anzeige-Karten).
    pub fn seed(&mut self, features: impl IntoIterator<Item = Feature>) -> Vec<FeatureId> {
        self.features.clear();
        features
            .into_iter()
            .map(|feature| {
                let id = self.allocate_id();
                self.features.insert(id, feature);
                id
            })
            .collect()
    }

    /// Holt alle seit dem letzten Aufruf angefallenen Benachrichtigungen ab.
    pub fn take_changes(&mut self) -> Vec<StoreChange> {
        std::mem::take(&mut self.pending)
    }

    /// Gibt `true` zurück, wenn Benachrichtigungen ausstehen.
    pub fn has_pending_changes(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Zähler aller benachrichtigten Mutationen.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Anzahl Features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Gibt `true` zurück, wenn keine Features vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Prüft, ob ein Feature mit dieser ID existiert.
    pub fn contains(&self, id: FeatureId) -> bool {
        self.features.contains_key(&id)
    }

    /// Feature per ID.
    pub fn get(&self, id: FeatureId) -> Option<&Feature> {
        self.features.get(&id)
    }

    /// IDs in Einfügereihenfolge.
    pub fn ids(&self) -> impl Iterator<Item = FeatureId> + '_ {
        self.features.keys().copied()
    }

    /// Features in Einfügereihenfolge.
    pub fn features(&self) -> impl Iterator<Item = &Feature> {
        self.features.values()
    }

    /// (ID, Feature)-Paare in Einfügereihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = (FeatureId, &Feature)> {
        self.features.iter().map(|(id, f)| (*id, f))
    }

    /// Geometrien in Einfügereihenfolge.
    pub fn geometries(&self) -> impl Iterator<Item = &Geometry> {
        self.features.values().map(|f| &f.geometry)
    }

    /// Gemeinsamer Extent aller Features.
    pub fn extent(&self) -> Option<Extent> {
        self.geometries()
            .filter_map(Geometry::extent)
            .reduce(Extent::union)
    }
}
