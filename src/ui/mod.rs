//! UI-Schicht: egui-Panels, die Intents emittieren und State nur lesen.

pub mod map_panel;
pub mod menu;
pub mod popup;
pub mod road_picker;
pub mod status;
pub mod table_panel;

pub use map_panel::render_map_panel;
pub use menu::render_menu;
pub use popup::render_popup_window;
pub use road_picker::render_road_picker;
pub use status::render_status_bar;
pub use table_panel::render_table_panel;

/// Konvertiert eine RGBA-Options-Farbe in `egui::Color32`.
pub(crate) fn color32(rgba: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (rgba[0] * 255.0) as u8,
        (rgba[1] * 255.0) as u8,
        (rgba[2] * 255.0) as u8,
        (rgba[3] * 255.0) as u8,
    )
}
