//! Application-Layer: Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod marker_registry;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (geladene Daten,
/// Selektion, Marker, View).
pub mod state;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use marker_registry::{AddOutcome, MarkerRecord, MarkerRegistry};
pub use state::{AppState, CategoryTables, SelectionState, TableState, UiState, ViewState};
