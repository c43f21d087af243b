//! Popup-Fenster eines angeklickten Markers.

use crate::app::{AppIntent, MarkerRecord};

/// Rendert das Popup-Fenster fuer einen Marker an der projizierten
/// Bildschirmposition.
pub fn render_popup_window(
    ctx: &egui::Context,
    record: &MarkerRecord,
    screen_pos: egui::Pos2,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let popup = &record.popup;

    egui::Window::new(format!("{} {}", record.category.glyph(), popup.title))
        .id(egui::Id::new("marker_popup"))
        .current_pos(screen_pos + egui::vec2(18.0, -18.0))
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            if !popup.subtitle.is_empty() {
                ui.label(egui::RichText::new(&popup.subtitle).strong());
            }

            if let Some(ref footnote) = popup.footnote {
                ui.label(egui::RichText::new(footnote).weak());
            }

            if popup.primary_line.is_some() || popup.secondary_line.is_some() {
                ui.separator();
            }

            // Farbkonvention: erste Zeile rot, zweite gruen.
            if let Some(ref line) = popup.primary_line {
                ui.label(
                    egui::RichText::new(line).color(egui::Color32::from_rgb(0xe7, 0x4c, 0x3c)),
                );
            }
            if let Some(ref line) = popup.secondary_line {
                ui.label(
                    egui::RichText::new(line).color(egui::Color32::from_rgb(0x27, 0xae, 0x60)),
                );
            }

            ui.separator();
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(&record.identifier)
                        .weak()
                        .small(),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("Close").clicked() {
                        events.push(AppIntent::PopupCloseRequested);
                    }
                });
            });
        });

    events
}
