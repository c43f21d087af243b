//! Szenarien fuer den Zeilen-Marker-Abgleich: Toggle, Dedup, Rollback,
//! Bulk-Clear und die Selektion⟺Marker-Invariante.

use autobahn_dashboard::{
    AppController, AppIntent, AppState, Category, Coordinate, Item, ItemDetail,
};

fn sample_item(identifier: &str) -> Item {
    Item {
        identifier: identifier.to_string(),
        title: format!("A1 | {identifier}"),
        subtitle: "Testeintrag".to_string(),
        is_blocked: Some(true),
        start_timestamp: None,
        future: None,
    }
}

fn sample_detail(identifier: &str, lat: &str, long: &str) -> ItemDetail {
    ItemDetail {
        identifier: identifier.to_string(),
        title: format!("A1 | {identifier}"),
        subtitle: "Detail".to_string(),
        coordinate: Coordinate {
            lat: lat.to_string(),
            long: long.to_string(),
        },
        description: vec![
            "Beginn: 01.03.2024".to_string(),
            "Ende: 30.04.2024".to_string(),
        ],
        is_blocked: Some(true),
        start_timestamp: None,
    }
}

fn select_road(controller: &mut AppController, state: &mut AppState, road: &str) {
    controller
        .handle_intent(
            state,
            AppIntent::RoadSelected {
                road: road.to_string(),
            },
        )
        .expect("RoadSelected sollte ohne Fehler durchlaufen");
}

fn load_rows(
    controller: &mut AppController,
    state: &mut AppState,
    category: Category,
    road: &str,
    identifiers: &[&str],
) {
    let epoch = state.epoch;
    controller
        .handle_intent(
            state,
            AppIntent::CategoryRowsLoaded {
                category,
                road: road.to_string(),
                epoch,
                items: identifiers.iter().map(|id| sample_item(id)).collect(),
            },
        )
        .expect("CategoryRowsLoaded sollte ohne Fehler durchlaufen");
}

fn click_row(
    controller: &mut AppController,
    state: &mut AppState,
    category: Category,
    identifier: &str,
) {
    controller
        .handle_intent(
            state,
            AppIntent::RowClicked {
                category,
                identifier: identifier.to_string(),
            },
        )
        .expect("RowClicked sollte ohne Fehler durchlaufen");
}

fn deliver_detail(
    controller: &mut AppController,
    state: &mut AppState,
    category: Category,
    identifier: &str,
    lat: &str,
    long: &str,
) {
    let epoch = state.epoch;
    controller
        .handle_intent(
            state,
            AppIntent::DetailLoaded {
                category,
                identifier: identifier.to_string(),
                epoch,
                detail: sample_detail(identifier, lat, long),
            },
        )
        .expect("DetailLoaded sollte ohne Fehler durchlaufen");
}

/// Expandiert eine Zeile inklusive Detail-Antwort.
fn expand_row(
    controller: &mut AppController,
    state: &mut AppState,
    category: Category,
    identifier: &str,
    lat: &str,
    long: &str,
) {
    click_row(controller, state, category, identifier);
    deliver_detail(controller, state, category, identifier, lat, long);
}

/// Invariante: pro Kategorie ist ein Identifier genau dann expandiert, wenn
/// ein lebender Marker mit diesem Tag existiert. Gilt im Ruhezustand
/// (keine Pending-Eintraege).
fn assert_selection_marker_invariant(state: &AppState) {
    assert_eq!(state.selection.pending_count(), 0, "Ruhezustand erwartet");

    for category in Category::ALL {
        for identifier in state.selection.expanded(category) {
            let marker = state
                .markers
                .get(identifier)
                .unwrap_or_else(|| panic!("Expandierte Zeile {identifier} ohne Marker"));
            assert_eq!(
                marker.category, category,
                "Marker-Tag passt nicht zur Kategorie"
            );
        }
    }

    for record in state.markers.layer() {
        assert!(
            state.selection.is_expanded(record.category, &record.identifier),
            "Marker {} ohne expandierte Zeile",
            record.identifier
        );
    }
}

#[test]
fn test_row_click_adds_marker_at_parsed_coordinates() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    select_road(&mut controller, &mut state, "A1");
    load_rows(
        &mut controller,
        &mut state,
        Category::Roadwork,
        "A1",
        &["RW-5", "RW-6", "RW-7"],
    );

    click_row(&mut controller, &mut state, Category::Roadwork, "RW-7");
    assert!(state.selection.is_pending(Category::Roadwork, "RW-7"));
    assert!(state.selection.is_expanded(Category::Roadwork, "RW-7"));
    assert!(state.markers.is_empty(), "Marker erst nach Detail-Antwort");

    deliver_detail(
        &mut controller,
        &mut state,
        Category::Roadwork,
        "RW-7",
        "52.51697",
        "13.37763",
    );

    let marker = state.markers.get("RW-7").expect("Marker sollte existieren");
    assert!((marker.position.lat - 52.51697).abs() < 1e-9);
    assert!((marker.position.lon - 13.37763).abs() < 1e-9);
    assert_eq!(marker.popup.primary_line.as_deref(), Some("Beginn: 01.03.2024"));
    assert_selection_marker_invariant(&state);
}

#[test]
fn test_toggle_roundtrip_restores_pre_click_state() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    select_road(&mut controller, &mut state, "A1");
    load_rows(&mut controller, &mut state, Category::Roadwork, "A1", &["RW-7"]);

    expand_row(
        &mut controller,
        &mut state,
        Category::Roadwork,
        "RW-7",
        "52.5",
        "13.4",
    );
    assert_eq!(state.markers.len(), 1);

    // Zweiter Klick kollabiert: Registry und Selektion exakt wie vorher.
    click_row(&mut controller, &mut state, Category::Roadwork, "RW-7");

    assert!(state.markers.is_empty());
    assert!(state.markers.layer().is_empty());
    assert_eq!(state.selection.expanded_count(), 0);
    assert_eq!(state.selection.pending_count(), 0);
    assert_selection_marker_invariant(&state);
}

#[test]
fn test_detail_failure_rolls_back_selection() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    select_road(&mut controller, &mut state, "A1");
    load_rows(&mut controller, &mut state, Category::Roadwork, "A1", &["RW-9"]);

    click_row(&mut controller, &mut state, Category::Roadwork, "RW-9");

    let epoch = state.epoch;
    controller
        .handle_intent(
            &mut state,
            AppIntent::DetailLoadFailed {
                category: Category::Roadwork,
                identifier: "RW-9".to_string(),
                epoch,
                error: "HTTP 500".to_string(),
            },
        )
        .expect("DetailLoadFailed sollte ohne Fehler durchlaufen");

    assert!(!state.selection.is_expanded(Category::Roadwork, "RW-9"));
    assert!(state.markers.is_empty());
    assert!(state.ui.notice.as_deref().unwrap_or_default().contains("RW-9"));
    assert_selection_marker_invariant(&state);
}

#[test]
fn test_unparsable_coordinate_rolls_back_selection() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    select_road(&mut controller, &mut state, "A1");
    load_rows(&mut controller, &mut state, Category::Roadwork, "A1", &["RW-1"]);

    click_row(&mut controller, &mut state, Category::Roadwork, "RW-1");
    deliver_detail(
        &mut controller,
        &mut state,
        Category::Roadwork,
        "RW-1",
        "kaputt",
        "13.4",
    );

    assert!(!state.selection.is_expanded(Category::Roadwork, "RW-1"));
    assert!(state.markers.is_empty());
    assert!(state.ui.notice.is_some());
    assert_selection_marker_invariant(&state);
}

#[test]
fn test_road_switch_clears_markers_and_selections_across_categories() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    select_road(&mut controller, &mut state, "A1");
    load_rows(&mut controller, &mut state, Category::Roadwork, "A1", &["RW-1"]);
    load_rows(&mut controller, &mut state, Category::Webcam, "A1", &["WC-1"]);

    expand_row(
        &mut controller,
        &mut state,
        Category::Roadwork,
        "RW-1",
        "52.5",
        "13.4",
    );
    expand_row(
        &mut controller,
        &mut state,
        Category::Webcam,
        "WC-1",
        "50.1",
        "8.6",
    );
    assert_eq!(state.markers.len(), 2);

    // Aktiver Tab ist egal: der Wechsel raeumt alle Kategorien.
    controller
        .handle_intent(&mut state, AppIntent::TabSelected { index: 5 })
        .expect("TabSelected sollte ohne Fehler durchlaufen");
    select_road(&mut controller, &mut state, "A7");

    assert!(state.markers.is_empty());
    assert_eq!(state.selection.expanded_count(), 0);
    assert_eq!(state.selection.pending_count(), 0);
    assert_selection_marker_invariant(&state);
}

#[test]
fn test_stale_detail_after_collapse_is_discarded() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    select_road(&mut controller, &mut state, "A1");
    load_rows(&mut controller, &mut state, Category::Roadwork, "A1", &["RW-1"]);

    click_row(&mut controller, &mut state, Category::Roadwork, "RW-1");
    // Kollabieren waehrend der Abruf noch laeuft.
    click_row(&mut controller, &mut state, Category::Roadwork, "RW-1");

    deliver_detail(
        &mut controller,
        &mut state,
        Category::Roadwork,
        "RW-1",
        "52.5",
        "13.4",
    );

    assert!(state.markers.is_empty(), "Spaete Antwort darf keinen Marker anlegen");
    assert_eq!(state.selection.expanded_count(), 0);
    assert_selection_marker_invariant(&state);
}

#[test]
fn test_stale_detail_from_old_epoch_is_discarded() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    select_road(&mut controller, &mut state, "A1");
    load_rows(&mut controller, &mut state, Category::Roadwork, "A1", &["RW-1"]);

    click_row(&mut controller, &mut state, Category::Roadwork, "RW-1");
    let old_epoch = state.epoch;
    select_road(&mut controller, &mut state, "A7");

    controller
        .handle_intent(
            &mut state,
            AppIntent::DetailLoaded {
                category: Category::Roadwork,
                identifier: "RW-1".to_string(),
                epoch: old_epoch,
                detail: sample_detail("RW-1", "52.5", "13.4"),
            },
        )
        .expect("Veraltete Detail-Antwort sollte robust verworfen werden");

    assert!(state.markers.is_empty());
    assert_selection_marker_invariant(&state);
}

#[test]
fn test_coordinate_dedup_keeps_single_marker_and_later_payload_wins() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    select_road(&mut controller, &mut state, "A1");
    load_rows(&mut controller, &mut state, Category::Roadwork, "A1", &["RW-1"]);
    load_rows(&mut controller, &mut state, Category::Closure, "A1", &["CL-2"]);

    expand_row(
        &mut controller,
        &mut state,
        Category::Roadwork,
        "RW-1",
        "51.0",
        "10.0",
    );
    // Zweite Kategorie meldet exakt denselben physischen Punkt.
    expand_row(
        &mut controller,
        &mut state,
        Category::Closure,
        "CL-2",
        "51.0",
        "10.0",
    );

    assert_eq!(state.markers.len(), 1, "Kein doppelter Pin am selben Punkt");
    let marker = state.markers.get("CL-2").expect("Spaeterer Aufruf gewinnt");
    assert_eq!(marker.category, Category::Closure);
    // Die verdraengte Zeile wurde kollabiert, sonst braeche die Invariante.
    assert!(!state.selection.is_expanded(Category::Roadwork, "RW-1"));
    assert_selection_marker_invariant(&state);
}

#[test]
fn test_clear_category_only_clears_that_category() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    select_road(&mut controller, &mut state, "A1");
    load_rows(&mut controller, &mut state, Category::Roadwork, "A1", &["RW-1"]);
    load_rows(&mut controller, &mut state, Category::Parking, "A1", &["PL-1"]);

    expand_row(
        &mut controller,
        &mut state,
        Category::Roadwork,
        "RW-1",
        "52.5",
        "13.4",
    );
    expand_row(
        &mut controller,
        &mut state,
        Category::Parking,
        "PL-1",
        "50.1",
        "8.6",
    );

    controller
        .handle_intent(
            &mut state,
            AppIntent::ClearCategoryRequested {
                category: Category::Roadwork,
            },
        )
        .expect("ClearCategoryRequested sollte ohne Fehler durchlaufen");

    assert!(!state.markers.contains("RW-1"));
    assert!(state.markers.contains("PL-1"));
    assert!(state.selection.is_expanded(Category::Parking, "PL-1"));
    assert_selection_marker_invariant(&state);
}

#[test]
fn test_clear_all_resets_every_selection_set() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    select_road(&mut controller, &mut state, "A1");
    load_rows(&mut controller, &mut state, Category::Warning, "A1", &["WA-1"]);
    load_rows(&mut controller, &mut state, Category::Webcam, "A1", &["WC-1"]);

    expand_row(
        &mut controller,
        &mut state,
        Category::Warning,
        "WA-1",
        "52.5",
        "13.4",
    );
    expand_row(
        &mut controller,
        &mut state,
        Category::Webcam,
        "WC-1",
        "50.1",
        "8.6",
    );

    controller
        .handle_intent(&mut state, AppIntent::ClearAllRequested)
        .expect("ClearAllRequested sollte ohne Fehler durchlaufen");

    assert!(state.markers.is_empty());
    assert_eq!(state.selection.expanded_count(), 0);
    assert_selection_marker_invariant(&state);
}

#[test]
fn test_marker_click_opens_popup_and_collapse_closes_it() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    select_road(&mut controller, &mut state, "A1");
    load_rows(&mut controller, &mut state, Category::Roadwork, "A1", &["RW-1"]);
    expand_row(
        &mut controller,
        &mut state,
        Category::Roadwork,
        "RW-1",
        "52.5",
        "13.4",
    );

    controller
        .handle_intent(
            &mut state,
            AppIntent::MarkerClicked {
                identifier: "RW-1".to_string(),
            },
        )
        .expect("MarkerClicked sollte ohne Fehler durchlaufen");
    assert_eq!(state.ui.open_popup.as_deref(), Some("RW-1"));

    click_row(&mut controller, &mut state, Category::Roadwork, "RW-1");
    assert!(state.ui.open_popup.is_none(), "Popup schliesst mit dem Marker");
}

#[test]
fn test_repeated_detail_delivery_is_idempotent() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    select_road(&mut controller, &mut state, "A1");
    load_rows(&mut controller, &mut state, Category::Roadwork, "A1", &["RW-1"]);

    expand_row(
        &mut controller,
        &mut state,
        Category::Roadwork,
        "RW-1",
        "52.5",
        "13.4",
    );
    // Doppelte Zustellung (z.B. Retry-Rennen): keine Pending-Markierung
    // mehr, Antwort wird verworfen.
    deliver_detail(
        &mut controller,
        &mut state,
        Category::Roadwork,
        "RW-1",
        "52.5",
        "13.4",
    );

    assert_eq!(state.markers.len(), 1);
    assert_selection_marker_invariant(&state);
}
