use glam::Vec2;

use crate::core::{Category, GeoPoint, Item, ItemDetail};

/// App-Intent Events.
/// Intents sind Eingaben aus UI, System oder Netz-Completions ohne direkte
/// Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Autobahn-Liste laden (Startup / Refresh ohne Auswahl)
    RoadsRequested,
    /// Autobahn-Liste ist eingetroffen
    RoadsLoaded { roads: Vec<String> },
    /// Autobahn-Liste konnte nicht geladen werden
    RoadsLoadFailed { error: String },

    /// Autobahn-Abschnitt wurde im Picker gewaehlt
    RoadSelected { road: String },
    /// Daten der aktuellen Auswahl neu laden
    RefreshRequested,

    /// Kategorie-Tab wurde angeklickt
    TabSelected { index: usize },
    /// Tabellenseite wurde gewechselt
    PageChanged { category: Category, page: usize },
    /// Tabellenzeile wurde angeklickt (Expand/Collapse-Toggle)
    RowClicked {
        category: Category,
        identifier: String,
    },

    /// Listen-Antwort einer Kategorie ist eingetroffen
    CategoryRowsLoaded {
        category: Category,
        road: String,
        epoch: u64,
        items: Vec<Item>,
    },
    /// Listen-Abruf einer Kategorie ist fehlgeschlagen
    CategoryLoadFailed {
        category: Category,
        road: String,
        epoch: u64,
        error: String,
    },

    /// Detail-Antwort eines Items ist eingetroffen
    DetailLoaded {
        category: Category,
        identifier: String,
        epoch: u64,
        detail: ItemDetail,
    },
    /// Detail-Abruf eines Items ist fehlgeschlagen
    DetailLoadFailed {
        category: Category,
        identifier: String,
        epoch: u64,
        error: String,
    },

    /// Alle Marker einer Kategorie entfernen
    ClearCategoryRequested { category: Category },
    /// Alle Marker und Selektionen entfernen
    ClearAllRequested,

    /// Marker auf der Karte wurde angeklickt
    MarkerClicked { identifier: String },
    /// Popup-Fenster wurde geschlossen
    PopupCloseRequested,

    /// Karte um Pixel-Delta verschieben
    MapPan { delta: Vec2 },
    /// Karte zoomen (optional auf einen Geo-Fokuspunkt)
    MapZoom {
        factor: f32,
        focus: Option<GeoPoint>,
    },
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Kartenansicht zuruecksetzen
    ResetViewRequested,
    /// Viewport-Groesse hat sich geaendert
    ViewportResized { size: [f32; 2] },

    /// Fehler-Hinweis wurde weggeklickt
    NoticeDismissed,
    /// Anwendung beenden
    ExitRequested,
}
