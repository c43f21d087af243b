//! Autobahn-Picker unterhalb des Menues.

use crate::app::{AppIntent, AppState};

/// Rendert die Abschnitts-Auswahl (ComboBox mit Filter).
pub fn render_road_picker(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("road_picker").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Autobahn:");

            let selected_text = state
                .selected_road
                .clone()
                .unwrap_or_else(|| "- auswaehlen -".to_string());

            egui::ComboBox::from_id_salt("road_select")
                .selected_text(selected_text)
                .width(140.0)
                .show_ui(ui, |ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut state.ui.road_filter)
                            .hint_text("Filter (z.B. A1)"),
                    );
                    ui.separator();

                    egui::ScrollArea::vertical().max_height(260.0).show(ui, |ui| {
                        for road in filter_roads(&state.roads, &state.ui.road_filter) {
                            let selected = state.selected_road.as_deref() == Some(road.as_str());
                            if ui.selectable_label(selected, &road).clicked() {
                                events.push(AppIntent::RoadSelected { road: road.clone() });
                                ui.close();
                            }
                        }
                    });
                });

            if state.roads_loading {
                ui.spinner();
            } else {
                ui.label(format!("{} Abschnitte", state.roads.len()));
            }

            if ui.button("⟳").on_hover_text("Daten neu laden").clicked() {
                events.push(AppIntent::RefreshRequested);
            }
        });
    });

    events
}

/// Filtert die Road-Liste per Regex (case-insensitive).
/// Ungueltige Muster fallen auf simples Substring-Matching zurueck.
fn filter_roads(roads: &[String], filter: &str) -> Vec<String> {
    let filter = filter.trim();
    if filter.is_empty() {
        return roads.to_vec();
    }

    match regex::RegexBuilder::new(filter)
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => roads
            .iter()
            .filter(|road| pattern.is_match(road))
            .cloned()
            .collect(),
        Err(_) => {
            let needle = filter.to_lowercase();
            roads
                .iter()
                .filter(|road| road.to_lowercase().contains(&needle))
                .cloned()
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::filter_roads;

    fn roads() -> Vec<String> {
        ["A1", "A10", "A2", "A99"]
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn empty_filter_returns_all() {
        assert_eq!(filter_roads(&roads(), "  ").len(), 4);
    }

    #[test]
    fn regex_filter_matches_case_insensitive() {
        let matched = filter_roads(&roads(), "^a1");
        assert_eq!(matched, vec!["A1".to_string(), "A10".to_string()]);
    }

    #[test]
    fn invalid_regex_falls_back_to_substring() {
        let matched = filter_roads(&roads(), "a[9");
        assert!(matched.is_empty());

        let matched = filter_roads(&roads(), "99");
        assert_eq!(matched, vec!["A99".to_string()]);
    }
}
