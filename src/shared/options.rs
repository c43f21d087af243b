//! Zentrale Konfiguration fuer das Autobahn-Dashboard.
//!
//! `DashboardOptions` enthaelt alle zur Laufzeit aenderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── API ─────────────────────────────────────────────────────────────

/// Basis-URL der oeffentlichen Autobahn-API.
pub const API_BASE_URL: &str = "https://verkehr.autobahn.de/o/autobahn";
/// Request-Timeout in Sekunden (Listen- und Detail-Abrufe).
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
/// Anzahl Wiederholungsversuche nach Netzwerkfehlern.
pub const RETRY_COUNT: u32 = 1;
/// Backoff zwischen Wiederholungsversuchen in Millisekunden.
pub const RETRY_BACKOFF_MS: u64 = 500;

// ── Tabelle ─────────────────────────────────────────────────────────

/// Zeilen pro Tabellenseite.
pub const PAGE_SIZE: usize = 5;

// ── Karte ───────────────────────────────────────────────────────────

/// Zoom-Schritt bei Menue-Buttons / Shortcuts.
pub const ZOOM_STEP: f32 = 1.2;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const SCROLL_ZOOM_STEP: f32 = 1.1;
/// Marker-Radius in Bildschirm-Pixeln.
pub const MARKER_RADIUS_PX: f32 = 9.0;
/// Pick-Radius fuer Marker-Klicks in Bildschirm-Pixeln.
pub const MARKER_PICK_RADIUS_PX: f32 = 14.0;

// ── Marker-Farben (RGBA) ───────────────────────────────────────────

/// Baustellen: Orange.
pub const MARKER_COLOR_ROADWORK: [f32; 4] = [0.95, 0.55, 0.10, 1.0];
/// Sperrungen: Rot.
pub const MARKER_COLOR_CLOSURE: [f32; 4] = [0.90, 0.15, 0.15, 1.0];
/// Verkehrsmeldungen: Gelb.
pub const MARKER_COLOR_WARNING: [f32; 4] = [0.95, 0.85, 0.10, 1.0];
/// E-Ladestationen: Gruen.
pub const MARKER_COLOR_CHARGING: [f32; 4] = [0.15, 0.75, 0.30, 1.0];
/// LKW-Parkplaetze: Blau.
pub const MARKER_COLOR_PARKING: [f32; 4] = [0.20, 0.45, 0.95, 1.0];
/// Webcams: Violett.
pub const MARKER_COLOR_WEBCAM: [f32; 4] = [0.60, 0.30, 0.85, 1.0];
/// Outline-Farbe aller Marker.
pub const MARKER_OUTLINE_COLOR: [f32; 4] = [0.10, 0.10, 0.12, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit aenderbaren Dashboard-Optionen.
/// Wird als `autobahn_dashboard.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardOptions {
    // ── API ─────────────────────────────────────────────────────
    /// Basis-URL der Autobahn-API
    pub api_base_url: String,
    /// Request-Timeout in Sekunden
    pub request_timeout_secs: u64,
    /// Wiederholungsversuche nach Netzwerkfehlern
    pub retry_count: u32,
    /// Backoff zwischen Wiederholungsversuchen in Millisekunden
    pub retry_backoff_ms: u64,

    // ── Tabelle ─────────────────────────────────────────────────
    /// Zeilen pro Tabellenseite
    pub page_size: usize,

    // ── Karte ───────────────────────────────────────────────────
    /// Zoom-Schritt bei Menue-Buttons
    pub zoom_step: f32,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub scroll_zoom_step: f32,
    /// Marker-Radius in Pixeln
    pub marker_radius_px: f32,
    /// Pick-Radius fuer Marker-Klicks in Pixeln
    #[serde(default = "default_marker_pick_radius_px")]
    pub marker_pick_radius_px: f32,

    // ── Marker-Farben ───────────────────────────────────────────
    /// Farbe Baustellen-Marker (RGBA)
    pub marker_color_roadwork: [f32; 4],
    /// Farbe Sperrungs-Marker
    pub marker_color_closure: [f32; 4],
    /// Farbe Warnungs-Marker
    pub marker_color_warning: [f32; 4],
    /// Farbe Ladestations-Marker
    pub marker_color_charging: [f32; 4],
    /// Farbe Parkplatz-Marker
    pub marker_color_parking: [f32; 4],
    /// Farbe Webcam-Marker
    pub marker_color_webcam: [f32; 4],
    /// Outline-Farbe aller Marker
    pub marker_outline_color: [f32; 4],
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            api_base_url: API_BASE_URL.to_string(),
            request_timeout_secs: REQUEST_TIMEOUT_SECS,
            retry_count: RETRY_COUNT,
            retry_backoff_ms: RETRY_BACKOFF_MS,

            page_size: PAGE_SIZE,

            zoom_step: ZOOM_STEP,
            scroll_zoom_step: SCROLL_ZOOM_STEP,
            marker_radius_px: MARKER_RADIUS_PX,
            marker_pick_radius_px: MARKER_PICK_RADIUS_PX,

            marker_color_roadwork: MARKER_COLOR_ROADWORK,
            marker_color_closure: MARKER_COLOR_CLOSURE,
            marker_color_warning: MARKER_COLOR_WARNING,
            marker_color_charging: MARKER_COLOR_CHARGING,
            marker_color_parking: MARKER_COLOR_PARKING,
            marker_color_webcam: MARKER_COLOR_WEBCAM,
            marker_outline_color: MARKER_OUTLINE_COLOR,
        }
    }
}

/// Serde-Default fuer `marker_pick_radius_px` (Abwaertskompatibilitaet
/// bestehender TOML-Dateien).
fn default_marker_pick_radius_px() -> f32 {
    MARKER_PICK_RADIUS_PX
}

impl DashboardOptions {
    /// Laedt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("autobahn_dashboard"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("autobahn_dashboard.toml")
    }

    /// Marker-Farbe einer Kategorie.
    pub fn marker_color(&self, category: crate::core::Category) -> [f32; 4] {
        use crate::core::Category;
        match category {
            Category::Roadwork => self.marker_color_roadwork,
            Category::Closure => self.marker_color_closure,
            Category::Warning => self.marker_color_warning,
            Category::ChargingStation => self.marker_color_charging,
            Category::Parking => self.marker_color_parking,
            Category::Webcam => self.marker_color_webcam,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_toml_roundtrip() {
        let options = DashboardOptions::default();
        let toml = toml::to_string_pretty(&options).expect("Optionen serialisierbar");
        let back: DashboardOptions = toml::from_str(&toml).expect("Optionen deserialisierbar");
        assert_eq!(back.api_base_url, options.api_base_url);
        assert_eq!(back.page_size, options.page_size);
    }

    #[test]
    fn missing_pick_radius_falls_back_to_default() {
        let mut toml = toml::to_string_pretty(&DashboardOptions::default())
            .expect("Optionen serialisierbar");
        toml = toml
            .lines()
            .filter(|line| !line.starts_with("marker_pick_radius_px"))
            .collect::<Vec<_>>()
            .join("\n");
        let back: DashboardOptions = toml::from_str(&toml).expect("alte Datei bleibt lesbar");
        assert_eq!(back.marker_pick_radius_px, MARKER_PICK_RADIUS_PX);
    }
}
