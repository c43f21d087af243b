//! Handler fuer Kartenansicht (Pan, Zoom, Viewport).

use crate::app::AppState;
use crate::core::GeoPoint;

/// Verschiebt die Karte um ein Pixel-Delta.
pub fn pan(state: &mut AppState, delta: glam::Vec2) {
    let viewport_height = state.view.viewport_size[1];
    state.view.camera.pan_pixels(delta, viewport_height);
}

/// Zoomt die Karte, optional auf einen Geo-Fokuspunkt.
pub fn zoom(state: &mut AppState, factor: f32, focus: Option<GeoPoint>) {
    state.view.camera.zoom_by(factor, focus);
}

/// Setzt die Kartenansicht auf die Deutschland-Vollansicht zurueck.
pub fn reset(state: &mut AppState) {
    state.view.camera.reset();
}

/// Uebernimmt die aktuelle Viewport-Groesse.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}
