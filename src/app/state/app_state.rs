use crate::app::marker_registry::MarkerRegistry;
use crate::app::CommandLog;
use crate::core::Category;
use crate::shared::DashboardOptions;

use super::{CategoryTables, SelectionState, UiState, ViewState};

/// Hauptzustand der Anwendung.
pub struct AppState {
    /// Bekannte Autobahn-Kennungen ("A1", "A2", ...)
    pub roads: Vec<String>,
    /// Roads-Abruf laeuft gerade
    pub roads_loading: bool,
    /// Aktuell gewaehlter Autobahn-Abschnitt (None = keine Auswahl)
    pub selected_road: Option<String>,
    /// Request-Epoche; wird bei jedem Road-Wechsel erhoeht, veraltete
    /// Antworten werden anhand dieser Epoche verworfen
    pub epoch: u64,
    /// Tabellenzustaende aller Kategorien
    pub tables: CategoryTables,
    /// Selektionszustand (expandierte Zeilen, laufende Detail-Abrufe)
    pub selection: SelectionState,
    /// Registry der aktiven Karten-Marker
    pub markers: MarkerRegistry,
    /// View-State (Kamera, Viewport)
    pub view: ViewState,
    /// UI-State (Tabs, Filter, Hinweise, Popup)
    pub ui: UiState,
    /// Laufzeit-Optionen (API, Tabelle, Karte, Farben)
    pub options: DashboardOptions,
    /// Verlauf ausgefuehrter Commands
    pub command_log: CommandLog,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State.
    pub fn new() -> Self {
        Self {
            roads: Vec::new(),
            roads_loading: false,
            selected_road: None,
            epoch: 0,
            tables: CategoryTables::new(),
            selection: SelectionState::new(),
            markers: MarkerRegistry::new(),
            view: ViewState::new(),
            ui: UiState::new(),
            options: DashboardOptions::default(),
            command_log: CommandLog::new(),
            should_exit: false,
        }
    }

    /// Kategorie des aktiven Tabs.
    pub fn active_category(&self) -> Category {
        Category::from_tab_index(self.ui.active_tab).unwrap_or(Category::Roadwork)
    }

    /// Gibt die Anzahl der aktiven Marker zurueck (fuer UI-Anzeige).
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Gibt die Anzahl expandierter Zeilen zurueck (fuer UI-Anzeige).
    pub fn expanded_count(&self) -> usize {
        self.selection.expanded_count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
