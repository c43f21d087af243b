//! Handler fuer Autobahn-Liste und Abschnitts-Auswahl.

use crate::app::AppState;

/// Uebernimmt die geladene Autobahn-Liste.
pub fn apply_roads(state: &mut AppState, roads: Vec<String>) {
    log::info!("{} Autobahnen geladen", roads.len());
    state.roads = roads;
    state.roads_loading = false;
}

/// Verbucht einen fehlgeschlagenen Roads-Abruf.
pub fn roads_failed(state: &mut AppState, error: String) {
    log::warn!("Autobahn-Liste konnte nicht geladen werden: {}", error);
    state.roads_loading = false;
    state.ui.notice = Some(format!("Autobahn-Liste nicht ladbar: {error}"));
}

/// Wechselt den gewaehlten Autobahn-Abschnitt.
///
/// Erhoeht die Request-Epoche (veraltete Antworten werden verworfen),
/// leert Marker und Selektionen aller Kategorien und markiert alle
/// Tabellen als ladend. Die alten Zeilen bleiben bis zum Eintreffen der
/// neuen Antworten sichtbar.
pub fn select_road(state: &mut AppState, road: String) {
    if state.selected_road.as_ref() == Some(&road) {
        log::debug!("Road-Auswahl unveraendert: {}", road);
        return;
    }

    log::info!("Autobahn-Auswahl: {}", road);
    state.epoch += 1;
    state.selected_road = Some(road);

    state.markers.clear_all();
    state.selection.clear_all();
    state.ui.open_popup = None;
    state.tables.mark_all_loading();
}
