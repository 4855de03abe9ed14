//! Use-Cases der Application-Layer-Orchestrierung.

pub mod display_load;
pub mod relation_select;
pub mod store_edit;
