//! WidgetIntent- und WidgetCommand-Enums für den Intent/Command-Datenfluss.

mod command;
mod intent;

pub use command::WidgetCommand;
pub use intent::WidgetIntent;
