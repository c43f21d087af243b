//! Geo-Koordinaten und Deutschland-Begrenzung der Kartenansicht.

use serde::{Deserialize, Serialize};

/// Geografischer Punkt (WGS84). Exakte Gleichheit wird fuer die
/// Koordinaten-Deduplizierung der Marker benoetigt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Breitengrad
    pub lat: f64,
    /// Laengengrad
    pub lon: f64,
}

impl GeoPoint {
    /// Erstellt einen Punkt aus Breiten- und Laengengrad.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Fehler beim Parsen string-kodierter API-Koordinaten.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Koordinate nicht parsebar: {field}='{value}'")]
pub struct CoordinateParseError {
    /// Betroffenes Feld (`lat` oder `long`)
    pub field: &'static str,
    /// Roher Feldinhalt aus der API-Antwort
    pub value: String,
}

/// Parst die string-kodierten Koordinaten der Detail-Antwort.
///
/// Die API liefert `lat`/`long` als Strings ("51.1657"); Whitespace wird
/// toleriert, alles andere ist ein `CoordinateParseError`.
pub fn parse_coordinate(lat: &str, long: &str) -> Result<GeoPoint, CoordinateParseError> {
    let lat_value: f64 = lat
        .trim()
        .parse()
        .map_err(|_| CoordinateParseError {
            field: "lat",
            value: lat.to_string(),
        })?;
    let lon_value: f64 = long
        .trim()
        .parse()
        .map_err(|_| CoordinateParseError {
            field: "long",
            value: long.to_string(),
        })?;
    Ok(GeoPoint::new(lat_value, lon_value))
}

/// Rechteckige Geo-Begrenzung (Sued-West / Nord-Ost).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    /// Suedlicher Breitengrad
    pub south: f64,
    /// Westlicher Laengengrad
    pub west: f64,
    /// Noerdlicher Breitengrad
    pub north: f64,
    /// Oestlicher Laengengrad
    pub east: f64,
}

/// Begrenzung der Kartenansicht auf Deutschland.
pub const GERMANY_BOUNDS: GeoBounds = GeoBounds {
    south: 47.2701,
    west: 5.8663,
    north: 55.0585,
    east: 15.0419,
};

/// Standard-Kartenzentrum (geografische Mitte Deutschlands).
pub const GERMANY_CENTER: GeoPoint = GeoPoint {
    lat: 51.1657,
    lon: 10.4515,
};

impl GeoBounds {
    /// Breitengrad-Spanne der Begrenzung.
    pub fn lat_span(&self) -> f64 {
        self.north - self.south
    }

    /// Laengengrad-Spanne der Begrenzung.
    pub fn lon_span(&self) -> f64 {
        self.east - self.west
    }

    /// Gibt zurueck ob der Punkt innerhalb der Begrenzung liegt.
    pub fn contains(&self, point: GeoPoint) -> bool {
        point.lat >= self.south
            && point.lat <= self.north
            && point.lon >= self.west
            && point.lon <= self.east
    }

    /// Klemmt einen Punkt in die Begrenzung.
    pub fn clamp(&self, point: GeoPoint) -> GeoPoint {
        GeoPoint {
            lat: point.lat.clamp(self.south, self.north),
            lon: point.lon.clamp(self.west, self.east),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn parse_coordinate_accepts_string_floats() {
        let point = parse_coordinate("52.51697", "13.37763").expect("gueltige Koordinate");
        assert_relative_eq!(point.lat, 52.51697);
        assert_relative_eq!(point.lon, 13.37763);
    }

    #[test]
    fn parse_coordinate_tolerates_whitespace() {
        let point = parse_coordinate(" 51.0 ", "10.5\n").expect("Whitespace sollte toleriert werden");
        assert_relative_eq!(point.lat, 51.0);
        assert_relative_eq!(point.lon, 10.5);
    }

    #[test]
    fn parse_coordinate_rejects_garbage() {
        let err = parse_coordinate("not-a-lat", "10.5").expect_err("muss fehlschlagen");
        assert_eq!(err.field, "lat");
        assert_eq!(err.value, "not-a-lat");
    }

    #[test]
    fn germany_bounds_contain_center() {
        assert!(GERMANY_BOUNDS.contains(GERMANY_CENTER));
    }

    #[test]
    fn clamp_pulls_point_into_bounds() {
        let outside = GeoPoint::new(60.0, 2.0);
        let clamped = GERMANY_BOUNDS.clamp(outside);
        assert_relative_eq!(clamped.lat, GERMANY_BOUNDS.north);
        assert_relative_eq!(clamped.lon, GERMANY_BOUNDS.west);
    }
}
