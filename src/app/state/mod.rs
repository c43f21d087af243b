//! Application State: geladene Daten, Selektion, Marker, View.

mod app_state;
mod selection;
mod tables;
mod ui;
mod view;

pub use app_state::AppState;
pub use selection::SelectionState;
pub use tables::{CategoryTables, TableState};
pub use ui::UiState;
pub use view::ViewState;
