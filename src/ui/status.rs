//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppIntent, AppState};

/// Rendert die Status-Bar.
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            match &state.selected_road {
                Some(road) => {
                    ui.label(format!("Autobahn: {}", road));
                }
                None => {
                    ui.label("No road selected");
                }
            }

            ui.separator();

            let category = state.active_category();
            let table = state.tables.table(category);
            ui.label(format!("{}: {} rows", category.label(), table.rows.len()));
            if table.loading {
                ui.spinner();
            }

            ui.separator();

            ui.label(format!(
                "Markers: {} | Expanded: {}",
                state.marker_count(),
                state.expanded_count()
            ));

            if state.selection.pending_count() > 0 {
                ui.separator();
                ui.spinner();
                ui.label(format!("{} details loading", state.selection.pending_count()));
            }

            ui.separator();

            ui.label(format!(
                "Zoom: {:.2}x | Center: ({:.2}, {:.2})",
                state.view.camera.zoom, state.view.camera.center.y, state.view.camera.center.x
            ));

            // Transienter Fehler-Hinweis
            if let Some(ref notice) = state.ui.notice {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", notice)).color(egui::Color32::YELLOW));
                if ui.small_button("✕").clicked() {
                    events.push(AppIntent::NoticeDismissed);
                }
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });

    events
}
