//! Handler fuer den Dispatch der API-Abrufe.
//!
//! Ohne eingehaengten `FetchService` (Tests) sind die Dispatch-Commands
//! No-ops; die Tests speisen Completion-Intents direkt ein.

use crate::app::AppState;
use crate::client::FetchService;
use crate::core::Category;

/// Dispatcht den Roads-Abruf.
pub fn roads(state: &mut AppState, fetcher: Option<&FetchService>) {
    state.roads_loading = true;
    match fetcher {
        Some(fetcher) => fetcher.fetch_roads(),
        None => log::debug!("Kein FetchService: Roads-Abruf uebersprungen"),
    }
}

/// Dispatcht den Listen-Abruf einer Kategorie unter der aktuellen Epoche.
pub fn category(state: &mut AppState, fetcher: Option<&FetchService>, category: Category) {
    let Some(road) = state.selected_road.clone() else {
        log::debug!("Kein Abschnitt gewaehlt: {:?}-Abruf uebersprungen", category);
        return;
    };

    state.tables.table_mut(category).loading = true;
    match fetcher {
        Some(fetcher) => fetcher.fetch_category(road, category, state.epoch),
        None => log::debug!("Kein FetchService: {:?}-Abruf uebersprungen", category),
    }
}

/// Dispatcht den Detail-Abruf eines Items unter der aktuellen Epoche.
pub fn detail(
    state: &mut AppState,
    fetcher: Option<&FetchService>,
    category: Category,
    identifier: String,
) {
    match fetcher {
        Some(fetcher) => fetcher.fetch_detail(category, identifier, state.epoch),
        None => log::debug!(
            "Kein FetchService: Detail-Abruf {:?}/{} uebersprungen",
            category,
            identifier
        ),
    }
}
