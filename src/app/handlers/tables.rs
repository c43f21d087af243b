//! Handler fuer Tabellen-Zustand (Laden, Tabs, Paginierung).

use crate::app::AppState;
use crate::core::{Category, Item};

/// Uebernimmt die Listen-Antwort einer Kategorie.
///
/// Last-response-wins: Antworten unter einer veralteten Epoche oder fuer
/// einen nicht mehr gewaehlten Abschnitt werden verworfen.
pub fn apply_rows(
    state: &mut AppState,
    category: Category,
    road: String,
    epoch: u64,
    items: Vec<Item>,
) {
    if epoch != state.epoch || state.selected_road.as_ref() != Some(&road) {
        log::debug!(
            "Veraltete Listen-Antwort verworfen: {:?} fuer {} (Epoche {} != {})",
            category,
            road,
            epoch,
            state.epoch
        );
        return;
    }

    log::info!("{:?}: {} Zeilen fuer {}", category, items.len(), road);
    let table = state.tables.table_mut(category);
    table.rows = items.iter().map(Item::to_row).collect();
    table.page = 0;
    table.loaded_road = Some(road);
    table.loading = false;
    table.last_error = None;
}

/// Verbucht einen fehlgeschlagenen Listen-Abruf.
/// Die bisherigen Zeilen bleiben stale-but-present stehen.
pub fn load_failed(
    state: &mut AppState,
    category: Category,
    road: String,
    epoch: u64,
    error: String,
) {
    if epoch != state.epoch || state.selected_road.as_ref() != Some(&road) {
        log::debug!(
            "Veralteter Listen-Fehler verworfen: {:?} fuer {}",
            category,
            road
        );
        return;
    }

    log::warn!("{:?}-Abruf fuer {} fehlgeschlagen: {}", category, road, error);
    let table = state.tables.table_mut(category);
    table.loading = false;
    table.last_error = Some(error.clone());
    state.ui.notice = Some(format!("{} nicht ladbar: {error}", category.label()));
}

/// Wechselt den aktiven Kategorie-Tab.
/// Selektionen und Marker anderer Kategorien bleiben unberuehrt.
pub fn activate_tab(state: &mut AppState, index: usize) {
    if Category::from_tab_index(index).is_some() {
        state.ui.active_tab = index;
    } else {
        log::warn!("Ungueltiger Tab-Index ignoriert: {}", index);
    }
}

/// Setzt den Seiten-Cursor einer Kategorie (geklemmt).
pub fn set_page(state: &mut AppState, category: Category, page: usize) {
    let page_size = state.options.page_size;
    let table = state.tables.table_mut(category);
    table.page = page;
    table.clamp_page(page_size);
}
