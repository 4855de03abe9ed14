//! Feld-Format eines Widgets: Features ↔ Text des versteckten Formularfelds.
//!
//! Geschrieben wird immer eine GeoJSON-Geometrie (oder `""` für "keine Geometrie").
//! Beim Lesen werden GeoJSON und WKT akzeptiert.

pub mod ewkt;
pub mod reader;
pub mod writer;

pub use reader::{decode, try_decode, unpack};
pub use writer::{encode, features_extent, pack};
