use glam::Vec2;

use crate::core::{Category, GeoPoint, Item, ItemDetail};

/// Mutierende App-Commands, ausgefuehrt vom Controller.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Autobahn-Liste abrufen
    FetchRoads,
    /// Autobahn-Liste in den State uebernehmen
    ApplyRoads { roads: Vec<String> },
    /// Fehlgeschlagenen Roads-Abruf verbuchen
    RoadsFailed { error: String },

    /// Autobahn-Auswahl wechseln (bumpt Epoche, leert Marker/Selektionen)
    SelectRoad { road: String },
    /// Listen-Abruf einer Kategorie dispatchen
    FetchCategory { category: Category },

    /// Listen-Antwort uebernehmen (verwirft veraltete Epochen)
    ApplyCategoryRows {
        category: Category,
        road: String,
        epoch: u64,
        items: Vec<Item>,
    },
    /// Fehlgeschlagenen Listen-Abruf verbuchen (Zeilen bleiben stehen)
    CategoryFailed {
        category: Category,
        road: String,
        epoch: u64,
        error: String,
    },

    /// Aktiven Tab wechseln
    ActivateTab { index: usize },
    /// Tabellenseite setzen (geklemmt)
    SetPage { category: Category, page: usize },

    /// Zeile expandieren und Detail-Abruf vormerken
    ExpandRowPending {
        category: Category,
        identifier: String,
    },
    /// Detail-Abruf eines Items dispatchen
    FetchDetail {
        category: Category,
        identifier: String,
    },
    /// Zeile kollabieren und Marker entfernen
    CollapseRow {
        category: Category,
        identifier: String,
    },
    /// Detail-Antwort uebernehmen (Marker anlegen/aktualisieren)
    ApplyDetail {
        category: Category,
        identifier: String,
        epoch: u64,
        detail: ItemDetail,
    },
    /// Pending-Expansion nach Fehlschlag zurueckrollen
    RollbackPending {
        category: Category,
        identifier: String,
        error: String,
    },

    /// Alle Marker einer Kategorie entfernen
    ClearCategory { category: Category },
    /// Alle Marker und Selektionen entfernen
    ClearAll,

    /// Popup eines Markers oeffnen
    ShowPopup { identifier: String },
    /// Popup schliessen
    ClosePopup,

    /// Karte um Pixel-Delta verschieben
    PanMap { delta: Vec2 },
    /// Karte zoomen
    ZoomMap {
        factor: f32,
        focus: Option<GeoPoint>,
    },
    /// Kartenansicht zuruecksetzen
    ResetView,
    /// Viewport-Groesse setzen
    SetViewportSize { size: [f32; 2] },

    /// Fehler-Hinweis entfernen
    DismissNotice,
    /// Anwendung beenden
    RequestExit,
}
