//! Geoform Map Widget Library.
//! Geometrie-Editor für Formularfelder: Toolbar, Feature-Store, Feld-Format und Viewport.

pub mod app;
pub mod codec;
pub mod core;
pub mod shared;

pub use app::{
    BoundField, DisplayLoadTicket, HiddenInput, WidgetCommand, WidgetController, WidgetIntent,
    WidgetMode, WidgetRegistry, WidgetState,
};
pub use codec::{decode, encode, try_decode};
pub use core::{
    BaseType, Extent, Feature, FeatureId, FeatureStore, Geometry, GeometryType, MapView,
    ViewportFitter,
};
pub use shared::{ControlsDefinition, WidgetDefaults, WidgetOptions};
