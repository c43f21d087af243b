/// UI-bezogener Anwendungszustand (Tabs, Filter, Hinweise, Popup).
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Aktiver Kategorie-Tab (Index in `Category::ALL`)
    pub active_tab: usize,
    /// Filtertext des Autobahn-Pickers
    pub road_filter: String,
    /// Transienter Fehler-Hinweis in der Status-Bar
    pub notice: Option<String>,
    /// Identifier des Markers mit offenem Popup
    pub open_popup: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}
