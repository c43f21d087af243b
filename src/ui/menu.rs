//! Top-Menue (File, Data, Map).

use crate::app::{AppIntent, AppState};

/// Rendert die Menue-Leiste.
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Refresh").clicked() {
                    events.push(AppIntent::RefreshRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Data", |ui| {
                let category = state.active_category();
                let has_markers = state.markers.category_count(category) > 0;

                if ui
                    .add_enabled(
                        has_markers,
                        egui::Button::new(format!("Clear {} markers", category.label())),
                    )
                    .clicked()
                {
                    events.push(AppIntent::ClearCategoryRequested { category });
                    ui.close();
                }

                if ui
                    .add_enabled(
                        !state.markers.is_empty(),
                        egui::Button::new("Clear all markers"),
                    )
                    .clicked()
                {
                    events.push(AppIntent::ClearAllRequested);
                    ui.close();
                }
            });

            ui.menu_button("Map", |ui| {
                if ui.button("Reset View").clicked() {
                    events.push(AppIntent::ResetViewRequested);
                    ui.close();
                }

                if ui.button("Zoom In").clicked() {
                    events.push(AppIntent::ZoomInRequested);
                    ui.close();
                }

                if ui.button("Zoom Out").clicked() {
                    events.push(AppIntent::ZoomOutRequested);
                    ui.close();
                }
            });
        });
    });

    events
}
