//! Geteilte Konfigurationstypen für Widget, Codec und Host.

pub mod options;

pub use options::{
    BaseLayer, ControlsDefinition, FeatureSourceOptions, ViewHint, WidgetDefaults, WidgetOptions,
};
pub use options::{FIT_MAX_ZOOM, PICK_TOLERANCE};
