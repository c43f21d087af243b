//! Karten-Kamera fuer Pan und Zoom ueber der Deutschland-Ansicht.

use glam::Vec2;

use super::geo::{GeoPoint, GERMANY_BOUNDS, GERMANY_CENTER};

/// Kamera ueber der Geo-Ebene. `x` ist Laengengrad, `y` Breitengrad.
#[derive(Debug, Clone, PartialEq)]
pub struct MapCamera {
    /// Kartenzentrum in Grad (lon, lat)
    pub center: Vec2,
    /// Zoom-Level (1.0 = ganz Deutschland sichtbar)
    pub zoom: f32,
}

impl MapCamera {
    /// Sichtbare Breitengrad-Spanne bei Zoom 1.0.
    pub const BASE_LAT_EXTENT: f32 = 8.5;
    /// Minimaler Zoom-Faktor (Deutschland-Vollansicht).
    pub const ZOOM_MIN: f32 = 1.0;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f32 = 60.0;
    /// Laengengrad-Stauchung bei ~51° Nord (aequirektangulaere Projektion).
    pub const LON_COMPRESSION: f32 = 0.63;

    /// Erstellt die Standard-Kamera ueber der Mitte Deutschlands.
    pub fn new() -> Self {
        Self {
            center: Vec2::new(GERMANY_CENTER.lon as f32, GERMANY_CENTER.lat as f32),
            zoom: 1.0,
        }
    }

    /// Setzt die Kamera auf die Standardansicht zurueck.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Grad pro Bildschirm-Pixel bei gegebener Viewport-Hoehe.
    pub fn degrees_per_pixel(&self, viewport_height: f32) -> f32 {
        let vh = viewport_height.max(1.0);
        Self::BASE_LAT_EXTENT / (self.zoom * vh)
    }

    /// Projiziert einen Geo-Punkt in Bildschirm-Offsets relativ zum
    /// Viewport-Zentrum (x nach Osten, y nach Sueden).
    pub fn geo_to_screen(&self, point: GeoPoint, viewport_height: f32) -> Vec2 {
        let px_per_deg = 1.0 / self.degrees_per_pixel(viewport_height);
        Vec2::new(
            (point.lon as f32 - self.center.x) * px_per_deg * Self::LON_COMPRESSION,
            -(point.lat as f32 - self.center.y) * px_per_deg,
        )
    }

    /// Umkehrung von `geo_to_screen`.
    pub fn screen_to_geo(&self, offset: Vec2, viewport_height: f32) -> GeoPoint {
        let deg_per_px = self.degrees_per_pixel(viewport_height);
        GeoPoint::new(
            (self.center.y - offset.y * deg_per_px) as f64,
            (self.center.x + offset.x * deg_per_px / Self::LON_COMPRESSION) as f64,
        )
    }

    /// Verschiebt die Kamera um ein Pixel-Delta und klemmt das Zentrum in
    /// die Deutschland-Begrenzung.
    pub fn pan_pixels(&mut self, delta: Vec2, viewport_height: f32) {
        let deg_per_px = self.degrees_per_pixel(viewport_height);
        self.center.x -= delta.x * deg_per_px / Self::LON_COMPRESSION;
        self.center.y += delta.y * deg_per_px;
        self.clamp_center();
    }

    /// Zoomt um einen Faktor, optional auf einen Fokuspunkt.
    pub fn zoom_by(&mut self, factor: f32, focus: Option<GeoPoint>) {
        let old_zoom = self.zoom;
        self.zoom = (self.zoom * factor).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);

        // Fokuspunkt unter dem Cursor halten: Zentrum anteilig nachziehen.
        if let Some(focus) = focus {
            if self.zoom != old_zoom {
                let ratio = old_zoom / self.zoom;
                let focus = Vec2::new(focus.lon as f32, focus.lat as f32);
                self.center = focus + (self.center - focus) * ratio;
            }
        }
        self.clamp_center();
    }

    fn clamp_center(&mut self) {
        self.center.x = self
            .center
            .x
            .clamp(GERMANY_BOUNDS.west as f32, GERMANY_BOUNDS.east as f32);
        self.center.y = self
            .center
            .y
            .clamp(GERMANY_BOUNDS.south as f32, GERMANY_BOUNDS.north as f32);
    }
}

impl Default for MapCamera {
    fn default() -> Self {
        Self::new()
    }
}
