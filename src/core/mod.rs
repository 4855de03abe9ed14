//! Core-Domänentypen: Geometrien, Features, FeatureStore und Viewport-Vertrag.

pub mod feature;
pub mod feature_store;
/// Geometrie-Werttypen (Point … GeometryCollection) und Extents
pub mod geometry;
pub mod view;

pub use feature::{parse_feature_collection, Feature, FeatureId};
pub use feature_store::{FeatureStore, StoreChange};
pub use geometry::{BaseType, Extent, Geometry, GeometryType};
pub use view::{MapView, ViewportFitter};
