//! Application Controller fuer zentrale Event-Verarbeitung.

use crate::client::FetchService;

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController {
    fetcher: Option<FetchService>,
}

impl AppController {
    /// Erstellt einen Controller ohne FetchService (Tests).
    pub fn new() -> Self {
        Self { fetcher: None }
    }

    /// Erstellt einen Controller mit eingehaengtem FetchService.
    pub fn with_fetcher(fetcher: FetchService) -> Self {
        Self {
            fetcher: Some(fetcher),
        }
    }

    /// Verarbeitet einen Intent ueber Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Fuehrt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Roads & Auswahl ===
            AppCommand::FetchRoads => handlers::fetch::roads(state, self.fetcher.as_ref()),
            AppCommand::ApplyRoads { roads } => handlers::roads::apply_roads(state, roads),
            AppCommand::RoadsFailed { error } => handlers::roads::roads_failed(state, error),
            AppCommand::SelectRoad { road } => handlers::roads::select_road(state, road),

            // === Tabellen ===
            AppCommand::FetchCategory { category } => {
                handlers::fetch::category(state, self.fetcher.as_ref(), category)
            }
            AppCommand::ApplyCategoryRows {
                category,
                road,
                epoch,
                items,
            } => handlers::tables::apply_rows(state, category, road, epoch, items),
            AppCommand::CategoryFailed {
                category,
                road,
                epoch,
                error,
            } => handlers::tables::load_failed(state, category, road, epoch, error),
            AppCommand::ActivateTab { index } => handlers::tables::activate_tab(state, index),
            AppCommand::SetPage { category, page } => {
                handlers::tables::set_page(state, category, page)
            }

            // === Selektion & Marker ===
            AppCommand::ExpandRowPending {
                category,
                identifier,
            } => handlers::selection::expand_pending(state, category, identifier),
            AppCommand::FetchDetail {
                category,
                identifier,
            } => handlers::fetch::detail(state, self.fetcher.as_ref(), category, identifier),
            AppCommand::CollapseRow {
                category,
                identifier,
            } => handlers::selection::collapse(state, category, &identifier),
            AppCommand::ApplyDetail {
                category,
                identifier,
                epoch,
                detail,
            } => handlers::selection::apply_detail(state, category, identifier, epoch, detail),
            AppCommand::RollbackPending {
                category,
                identifier,
                error,
            } => handlers::selection::rollback(state, category, identifier, error),
            AppCommand::ClearCategory { category } => {
                handlers::selection::clear_category(state, category)
            }
            AppCommand::ClearAll => handlers::selection::clear_all(state),
            AppCommand::ShowPopup { identifier } => {
                handlers::selection::show_popup(state, identifier)
            }
            AppCommand::ClosePopup => handlers::selection::close_popup(state),

            // === Karte ===
            AppCommand::PanMap { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomMap { factor, focus } => handlers::view::zoom(state, factor, focus),
            AppCommand::ResetView => handlers::view::reset(state),
            AppCommand::SetViewportSize { size } => {
                handlers::view::set_viewport_size(state, size)
            }

            // === Sonstiges ===
            AppCommand::DismissNotice => state.ui.notice = None,
            AppCommand::RequestExit => state.should_exit = true,
        }

        Ok(())
    }
}
