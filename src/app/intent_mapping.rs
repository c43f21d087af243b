//! Mapping von UI-Intents auf mutierende App-Commands.

use crate::core::Category;

use super::{AppCommand, AppIntent, AppState};

/// Uebersetzt einen `AppIntent` in eine Sequenz ausfuehrbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::RoadsRequested => vec![AppCommand::FetchRoads],
        AppIntent::RoadsLoaded { roads } => vec![AppCommand::ApplyRoads { roads }],
        AppIntent::RoadsLoadFailed { error } => vec![AppCommand::RoadsFailed { error }],

        AppIntent::RoadSelected { road } => {
            // Road-Wechsel laedt alle sechs Kategorien neu.
            let mut commands = vec![AppCommand::SelectRoad { road }];
            commands.extend(
                Category::ALL
                    .into_iter()
                    .map(|category| AppCommand::FetchCategory { category }),
            );
            commands
        }
        AppIntent::RefreshRequested => {
            if state.selected_road.is_some() {
                Category::ALL
                    .into_iter()
                    .map(|category| AppCommand::FetchCategory { category })
                    .collect()
            } else {
                vec![AppCommand::FetchRoads]
            }
        }

        AppIntent::TabSelected { index } => {
            let mut commands = vec![AppCommand::ActivateTab { index }];
            // Tab-Aktivierung laedt die Kategorie nach, falls sie unter der
            // aktuellen Auswahl noch nicht geladen wurde.
            if let (Some(road), Some(category)) =
                (state.selected_road.as_ref(), Category::from_tab_index(index))
            {
                let table = state.tables.table(category);
                if !table.loading && table.loaded_road.as_ref() != Some(road) {
                    commands.push(AppCommand::FetchCategory { category });
                }
            }
            commands
        }
        AppIntent::PageChanged { category, page } => {
            vec![AppCommand::SetPage { category, page }]
        }
        AppIntent::RowClicked {
            category,
            identifier,
        } => {
            // Expand/Collapse-Toggle: der zweite Klick kollabiert.
            if state.selection.is_expanded(category, &identifier) {
                vec![AppCommand::CollapseRow {
                    category,
                    identifier,
                }]
            } else {
                vec![
                    AppCommand::ExpandRowPending {
                        category,
                        identifier: identifier.clone(),
                    },
                    AppCommand::FetchDetail {
                        category,
                        identifier,
                    },
                ]
            }
        }

        AppIntent::CategoryRowsLoaded {
            category,
            road,
            epoch,
            items,
        } => vec![AppCommand::ApplyCategoryRows {
            category,
            road,
            epoch,
            items,
        }],
        AppIntent::CategoryLoadFailed {
            category,
            road,
            epoch,
            error,
        } => vec![AppCommand::CategoryFailed {
            category,
            road,
            epoch,
            error,
        }],
        AppIntent::DetailLoaded {
            category,
            identifier,
            epoch,
            detail,
        } => vec![AppCommand::ApplyDetail {
            category,
            identifier,
            epoch,
            detail,
        }],
        AppIntent::DetailLoadFailed {
            category,
            identifier,
            epoch,
            error,
        } => vec![AppCommand::RollbackPending {
            category,
            identifier,
            error,
        }],

        AppIntent::ClearCategoryRequested { category } => {
            vec![AppCommand::ClearCategory { category }]
        }
        AppIntent::ClearAllRequested => vec![AppCommand::ClearAll],

        AppIntent::MarkerClicked { identifier } => vec![AppCommand::ShowPopup { identifier }],
        AppIntent::PopupCloseRequested => vec![AppCommand::ClosePopup],

        AppIntent::MapPan { delta } => vec![AppCommand::PanMap { delta }],
        AppIntent::MapZoom { factor, focus } => vec![AppCommand::ZoomMap { factor, focus }],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomMap {
            factor: state.options.zoom_step,
            focus: None,
        }],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomMap {
            factor: 1.0 / state.options.zoom_step,
            focus: None,
        }],
        AppIntent::ResetViewRequested => vec![AppCommand::ResetView],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],

        AppIntent::NoticeDismissed => vec![AppCommand::DismissNotice],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
