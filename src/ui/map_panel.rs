//! Karten-Panel: Deutschland-Ansicht mit Marker-Layer.
//!
//! Gezeichnet wird direkt mit dem egui-Painter (Begrenzung, Gradnetz,
//! Marker); eine Tile-Ebene gibt es bewusst nicht.

use glam::Vec2;

use crate::app::{AppIntent, AppState};
use crate::core::{GeoPoint, GERMANY_BOUNDS};

use super::{color32, popup};

/// Rendert das zentrale Karten-Panel und sammelt Viewport-Events.
pub fn render_map_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            let (rect, response) =
                ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

            let viewport_size = [rect.width(), rect.height()];
            if viewport_size != state.view.viewport_size {
                events.push(AppIntent::ViewportResized {
                    size: viewport_size,
                });
            }

            draw_background(ui, state, rect);
            draw_markers(ui, state, rect);

            collect_input_events(ui, state, rect, &response, &mut events);

            if state.selected_road.is_none() {
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "No road selected. Choose an Autobahn above.",
                    egui::FontId::proportional(20.0),
                    egui::Color32::WHITE,
                );
            }

            // Popup des angeklickten Markers an der Marker-Position.
            if let Some(record) = state
                .ui
                .open_popup
                .as_deref()
                .and_then(|identifier| state.markers.get(identifier))
            {
                let pos = project(state, rect, record.position);
                events.extend(popup::render_popup_window(ui.ctx(), record, pos));
            }
        });

    events
}

/// Projiziert einen Geo-Punkt in Panel-Koordinaten.
fn project(state: &AppState, rect: egui::Rect, point: GeoPoint) -> egui::Pos2 {
    let offset = state.view.camera.geo_to_screen(point, rect.height());
    rect.center() + egui::vec2(offset.x, offset.y)
}

fn draw_background(ui: &egui::Ui, state: &AppState, rect: egui::Rect) {
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(0x1b, 0x1f, 0x27));

    // Deutschland-Begrenzung
    let south_west = project(
        state,
        rect,
        GeoPoint::new(GERMANY_BOUNDS.south, GERMANY_BOUNDS.west),
    );
    let north_east = project(
        state,
        rect,
        GeoPoint::new(GERMANY_BOUNDS.north, GERMANY_BOUNDS.east),
    );
    let bounds_rect = egui::Rect::from_two_pos(south_west, north_east);
    painter.rect_stroke(
        bounds_rect,
        2.0,
        egui::Stroke::new(1.5, egui::Color32::from_rgb(0x3a, 0x44, 0x55)),
        egui::StrokeKind::Middle,
    );

    // Gradnetz (ganze Breiten-/Laengengrade)
    let grid_stroke = egui::Stroke::new(0.5, egui::Color32::from_rgb(0x28, 0x2e, 0x3a));
    let mut lat = GERMANY_BOUNDS.south.ceil();
    while lat < GERMANY_BOUNDS.north {
        let left = project(state, rect, GeoPoint::new(lat, GERMANY_BOUNDS.west));
        let right = project(state, rect, GeoPoint::new(lat, GERMANY_BOUNDS.east));
        painter.line_segment([left, right], grid_stroke);
        lat += 1.0;
    }
    let mut lon = GERMANY_BOUNDS.west.ceil();
    while lon < GERMANY_BOUNDS.east {
        let top = project(state, rect, GeoPoint::new(GERMANY_BOUNDS.north, lon));
        let bottom = project(state, rect, GeoPoint::new(GERMANY_BOUNDS.south, lon));
        painter.line_segment([top, bottom], grid_stroke);
        lon += 1.0;
    }
}

fn draw_markers(ui: &egui::Ui, state: &AppState, rect: egui::Rect) {
    let painter = ui.painter_at(rect);
    let radius = state.options.marker_radius_px;
    let outline = color32(state.options.marker_outline_color);

    for record in state.markers.layer() {
        let pos = project(state, rect, record.position);
        if !rect.expand(radius * 2.0).contains(pos) {
            continue;
        }

        let fill = color32(state.options.marker_color(record.category));

        if state.ui.open_popup.as_deref() == Some(record.identifier.as_str()) {
            painter.circle_stroke(pos, radius + 4.0, egui::Stroke::new(2.0, fill));
        }

        painter.circle(pos, radius, fill, egui::Stroke::new(1.5, outline));
        painter.text(
            pos,
            egui::Align2::CENTER_CENTER,
            record.category.glyph(),
            egui::FontId::proportional(radius * 1.1),
            egui::Color32::WHITE,
        );
    }
}

fn collect_input_events(
    ui: &egui::Ui,
    state: &AppState,
    rect: egui::Rect,
    response: &egui::Response,
    events: &mut Vec<AppIntent>,
) {
    // Marker-Klick: naechster Marker innerhalb des Pick-Radius.
    if response.clicked() {
        if let Some(pointer) = response.interact_pointer_pos() {
            if let Some(identifier) = hit_test_marker(state, rect, pointer) {
                events.push(AppIntent::MarkerClicked { identifier });
            }
        }
    }

    // Drag verschiebt die Karte mit dem Cursor.
    if response.dragged() {
        let delta = response.drag_delta();
        if delta != egui::Vec2::ZERO {
            events.push(AppIntent::MapPan {
                delta: Vec2::new(-delta.x, -delta.y),
            });
        }
    }

    // Mausrad zoomt auf den Cursor.
    if response.hovered() {
        let scroll = ui.input(|i| i.raw_scroll_delta.y);
        if scroll.abs() > 0.1 {
            let step = state.options.scroll_zoom_step;
            let factor = if scroll > 0.0 { step } else { 1.0 / step };
            let focus = ui
                .input(|i| i.pointer.hover_pos())
                .map(|pointer| {
                    let offset = pointer - rect.center();
                    state
                        .view
                        .camera
                        .screen_to_geo(Vec2::new(offset.x, offset.y), rect.height())
                });
            events.push(AppIntent::MapZoom { factor, focus });
        }
    }
}

/// Findet den naechstgelegenen Marker innerhalb des Pick-Radius.
fn hit_test_marker(state: &AppState, rect: egui::Rect, pointer: egui::Pos2) -> Option<String> {
    let pick_radius = state.options.marker_pick_radius_px;
    let mut best: Option<(f32, &str)> = None;

    for record in state.markers.layer() {
        let pos = project(state, rect, record.position);
        let distance = pos.distance(pointer);
        if distance <= pick_radius {
            match best {
                Some((best_distance, _)) if best_distance <= distance => {}
                _ => best = Some((distance, record.identifier.as_str())),
            }
        }
    }

    best.map(|(_, identifier)| identifier.to_string())
}
