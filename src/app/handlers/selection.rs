//! Handler fuer den Zeilen-Marker-Abgleich (Selection Controller).
//!
//! Zustandsmaschine pro Zeile: `Collapsed` ⇄ `Expanded`. Der Detail-Abruf
//! ist der einzige Suspend-Punkt; schlaegt er fehl, rollt die Expansion
//! zurueck, damit keine Zeile ohne Marker expandiert bleibt.

use crate::app::marker_registry::AddOutcome;
use crate::app::AppState;
use crate::core::{Category, ItemDetail, PopupContent};

/// Expandiert eine Zeile und merkt den laufenden Detail-Abruf vor.
pub fn expand_pending(state: &mut AppState, category: Category, identifier: String) {
    log::debug!("Expand pending: {:?}/{}", category, identifier);
    state
        .selection
        .expanded_mut(category)
        .insert(identifier.clone());
    state.selection.pending_mut(category).insert(identifier);
}

/// Kollabiert eine Zeile und entfernt ihren Marker.
///
/// Ein laufender Detail-Abruf wird durch das Entfernen aus der
/// Pending-Menge logisch storniert: die spaete Antwort wird verworfen.
pub fn collapse(state: &mut AppState, category: Category, identifier: &str) {
    state.selection.expanded_mut(category).shift_remove(identifier);
    state.selection.pending_mut(category).shift_remove(identifier);

    let removed = state.markers.remove(identifier);
    log::debug!(
        "Collapse {:?}/{} (Marker entfernt: {})",
        category,
        identifier,
        removed
    );

    if state.ui.open_popup.as_deref() == Some(identifier) {
        state.ui.open_popup = None;
    }
}

/// Uebernimmt die Detail-Antwort und legt den Marker an.
pub fn apply_detail(
    state: &mut AppState,
    category: Category,
    identifier: String,
    epoch: u64,
    detail: ItemDetail,
) {
    if epoch != state.epoch {
        log::debug!(
            "Veraltete Detail-Antwort verworfen: {} (Epoche {} != {})",
            identifier,
            epoch,
            state.epoch
        );
        return;
    }
    // Zeile wurde waehrend des Abrufs kollabiert: Antwort verwerfen.
    if !state.selection.is_pending(category, &identifier) {
        log::debug!("Detail-Antwort ohne Pending-Eintrag verworfen: {}", identifier);
        return;
    }

    let position = match detail.coordinate.to_point() {
        Ok(position) => position,
        Err(e) => {
            rollback(state, category, identifier, e.to_string());
            return;
        }
    };
    state.selection.pending_mut(category).shift_remove(&identifier);

    let popup = PopupContent::from_detail(&detail);
    let outcome = state
        .markers
        .add_or_update(identifier.clone(), category, position, popup);

    // Koordinaten-Kollision: der verdraengte Marker verliert seine Zeile,
    // sonst haette die Zeile keinen lebenden Marker mehr.
    if let AddOutcome::Displaced {
        category: displaced_category,
        identifier: displaced_identifier,
    } = outcome
    {
        log::info!(
            "Marker an identischer Position ersetzt: {:?}/{} weicht {:?}/{}",
            displaced_category,
            displaced_identifier,
            category,
            identifier
        );
        state
            .selection
            .expanded_mut(displaced_category)
            .shift_remove(&displaced_identifier);
        state
            .selection
            .pending_mut(displaced_category)
            .shift_remove(&displaced_identifier);
        if state.ui.open_popup.as_ref() == Some(&displaced_identifier) {
            state.ui.open_popup = None;
        }
    }

    log::debug!(
        "Marker aktiv: {:?}/{} @ ({}, {})",
        category,
        identifier,
        position.lat,
        position.lon
    );
}

/// Rollt eine Pending-Expansion nach fehlgeschlagenem Detail-Abruf zurueck.
pub fn rollback(state: &mut AppState, category: Category, identifier: String, error: String) {
    // Nur zurueckrollen, wenn die Expansion noch aussteht; eine laengst
    // kollabierte Zeile darf nicht erneut angefasst werden.
    let was_pending = state
        .selection
        .pending_mut(category)
        .shift_remove(&identifier);
    if !was_pending {
        log::debug!("Rollback ohne Pending-Eintrag ignoriert: {}", identifier);
        return;
    }

    log::warn!(
        "Detail-Abruf fuer {:?}/{} fehlgeschlagen: {}",
        category,
        identifier,
        error
    );
    state.selection.expanded_mut(category).shift_remove(&identifier);
    state.ui.notice = Some(format!("Details fuer {identifier} nicht ladbar: {error}"));
}

/// Entfernt alle Marker einer Kategorie und leert ihre Selektion.
pub fn clear_category(state: &mut AppState, category: Category) {
    let identifiers: Vec<String> = state
        .selection
        .expanded(category)
        .iter()
        .cloned()
        .collect();
    for identifier in &identifiers {
        state.markers.remove(identifier);
        if state.ui.open_popup.as_deref() == Some(identifier.as_str()) {
            state.ui.open_popup = None;
        }
    }
    state.selection.clear_category(category);
    log::info!("{:?}: {} Marker entfernt", category, identifiers.len());
}

/// Entfernt alle Marker und leert jede Selektion.
pub fn clear_all(state: &mut AppState) {
    let count = state.markers.len();
    state.markers.clear_all();
    state.selection.clear_all();
    state.ui.open_popup = None;
    log::info!("Alle {} Marker entfernt", count);
}

/// Oeffnet das Popup eines Markers.
pub fn show_popup(state: &mut AppState, identifier: String) {
    if state.markers.contains(&identifier) {
        state.ui.open_popup = Some(identifier);
    } else {
        log::debug!("Popup fuer unbekannten Marker ignoriert: {}", identifier);
    }
}

/// Schliesst das offene Popup.
pub fn close_popup(state: &mut AppState) {
    state.ui.open_popup = None;
}
