//! Application-Layer: Controller, State, Events, Werkzeuge und Use-Cases.

pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod registry;
/// Widget State
///
/// Dieses Modul verwaltet den Zustand eines Widgets (Store, Werkzeuge, Feld, Viewport).
pub mod state;
pub mod sync;
pub mod tools;
pub mod use_cases;

pub use controller::WidgetController;
pub use events::{WidgetCommand, WidgetIntent};
pub use registry::{DisplayLoadTicket, WidgetRegistry};
pub use state::{WidgetMode, WidgetState};
pub use sync::{BoundField, HiddenInput, SyncBridge};
pub use tools::{DrawingSurface, Interaction, StoreEdit, Tool, ToolKind, Toolbar};
