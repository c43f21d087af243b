//! Seitliches Daten-Panel: Kategorie-Tabs, Tabelle, Paginierung.

use egui_extras::{Column, TableBuilder};

use crate::app::{AppIntent, AppState};
use crate::core::Category;

/// Rendert das Daten-Panel links neben der Karte.
pub fn render_table_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::left("data_panel")
        .resizable(true)
        .default_width(470.0)
        .min_width(380.0)
        .show(ctx, |ui| {
            render_tabs(ui, state, &mut events);
            ui.separator();
            render_table(ui, state, &mut events);
            ui.separator();
            render_paginator(ui, state, &mut events);
        });

    events
}

fn render_tabs(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    ui.horizontal_wrapped(|ui| {
        for category in Category::ALL {
            let marker_count = state.markers.category_count(category);
            let label = if marker_count > 0 {
                format!("{} {} ({})", category.glyph(), category.label(), marker_count)
            } else {
                format!("{} {}", category.glyph(), category.label())
            };

            let active = state.ui.active_tab == category.index();
            if ui.selectable_label(active, label).clicked() && !active {
                events.push(AppIntent::TabSelected {
                    index: category.index(),
                });
            }
        }
    });
}

fn render_table(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    let category = state.active_category();
    let table = state.tables.table(category);

    if let Some(ref error) = table.last_error {
        ui.label(
            egui::RichText::new(format!("⚠ Letzter Abruf fehlgeschlagen: {}", error))
                .color(egui::Color32::LIGHT_RED)
                .small(),
        );
    }

    if table.rows.is_empty() {
        if table.loading {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading...");
            });
        } else if state.selected_road.is_some() {
            ui.label(egui::RichText::new("No entries for this road.").weak());
        } else {
            ui.label(egui::RichText::new("Select an Autobahn to load data.").weak());
        }
        return;
    }

    let page_rows = table.page_rows(state.options.page_size);

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .sense(egui::Sense::click())
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::remainder().at_least(120.0))
        .column(Column::auto().at_least(60.0))
        .column(Column::remainder().at_least(120.0))
        .column(Column::auto().at_least(90.0))
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Name");
            });
            header.col(|ui| {
                ui.strong("Blocked road");
            });
            header.col(|ui| {
                ui.strong("Details");
            });
            header.col(|ui| {
                ui.strong("Starting");
            });
        })
        .body(|mut body| {
            for row_data in page_rows {
                let expanded = state.selection.is_expanded(category, &row_data.identifier);
                let pending = state.selection.is_pending(category, &row_data.identifier);

                body.row(22.0, |mut row| {
                    row.set_selected(expanded);

                    row.col(|ui| {
                        if pending {
                            ui.spinner();
                        }
                        ui.label(&row_data.title);
                    });
                    row.col(|ui| {
                        ui.label(&row_data.blocked);
                    });
                    row.col(|ui| {
                        ui.label(&row_data.subtitle);
                    });
                    row.col(|ui| {
                        ui.label(&row_data.starting);
                    });

                    if row.response().clicked() {
                        events.push(AppIntent::RowClicked {
                            category,
                            identifier: row_data.identifier.clone(),
                        });
                    }
                });
            }
        });
}

fn render_paginator(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    let category = state.active_category();
    let table = state.tables.table(category);
    let page_count = table.page_count(state.options.page_size);
    let page = table.page.min(page_count - 1);

    ui.horizontal(|ui| {
        if ui
            .add_enabled(page > 0, egui::Button::new("⏮"))
            .clicked()
        {
            events.push(AppIntent::PageChanged { category, page: 0 });
        }
        if ui
            .add_enabled(page > 0, egui::Button::new("◀"))
            .clicked()
        {
            events.push(AppIntent::PageChanged {
                category,
                page: page - 1,
            });
        }

        ui.label(format!("Page {} / {}", page + 1, page_count));

        if ui
            .add_enabled(page + 1 < page_count, egui::Button::new("▶"))
            .clicked()
        {
            events.push(AppIntent::PageChanged {
                category,
                page: page + 1,
            });
        }
        if ui
            .add_enabled(page + 1 < page_count, egui::Button::new("⏭"))
            .clicked()
        {
            events.push(AppIntent::PageChanged {
                category,
                page: page_count - 1,
            });
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(format!("{} rows", table.rows.len()))
                    .weak()
                    .small(),
            );
        });
    });
}
