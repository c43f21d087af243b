use crate::core::MapCamera;

/// View-bezogener Anwendungszustand.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Karten-Kamera (Zentrum, Zoom)
    pub camera: MapCamera,
    /// Aktuelle Viewport-Groesse in Pixel
    pub viewport_size: [f32; 2],
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            camera: MapCamera::new(),
            viewport_size: [0.0, 0.0],
        }
    }
}
