//! Item- und Detail-Datensaetze der Autobahn-API.

use serde::{Deserialize, Deserializer};

use super::geo::{parse_coordinate, CoordinateParseError, GeoPoint};

/// Listen-Datensatz einer Kategorie.
///
/// Die API liefert `isBlocked` je nach Endpunkt als Bool oder als String
/// ("true"/"false"); fehlende Felder werden toleriert.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Eindeutige Kennung innerhalb der Kategorie
    pub identifier: String,
    /// Titel (z.B. "A1 | AS Hamburg-Stillhorn")
    #[serde(default)]
    pub title: String,
    /// Untertitel / Kurzbeschreibung
    #[serde(default)]
    pub subtitle: String,
    /// Ob der Abschnitt gesperrt ist (invertiert angezeigt, siehe `ItemRow`)
    #[serde(default, deserialize_with = "deserialize_lenient_bool")]
    pub is_blocked: Option<bool>,
    /// Startzeitpunkt als ISO-String
    #[serde(default)]
    pub start_timestamp: Option<String>,
    /// Zukuenftige Massnahme
    #[serde(default)]
    pub future: Option<bool>,
}

/// Rohe Koordinate der Detail-Antwort (string-kodierte Floats).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Coordinate {
    /// Breitengrad als String
    pub lat: String,
    /// Laengengrad als String
    pub long: String,
}

impl Coordinate {
    /// Parst die String-Koordinaten zu einem `GeoPoint`.
    pub fn to_point(&self) -> Result<GeoPoint, CoordinateParseError> {
        parse_coordinate(&self.lat, &self.long)
    }
}

/// Detail-Datensatz, lazy pro Identifier geladen.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDetail {
    /// Eindeutige Kennung
    pub identifier: String,
    /// Titel
    #[serde(default)]
    pub title: String,
    /// Untertitel
    #[serde(default)]
    pub subtitle: String,
    /// Marker-Position (string-kodiert)
    pub coordinate: Coordinate,
    /// Beschreibungszeilen, positionsbasiert (siehe `PopupContent`)
    #[serde(default)]
    pub description: Vec<String>,
    /// Ob der Abschnitt gesperrt ist
    #[serde(default, deserialize_with = "deserialize_lenient_bool")]
    pub is_blocked: Option<bool>,
    /// Startzeitpunkt als ISO-String
    #[serde(default)]
    pub start_timestamp: Option<String>,
}

/// Anzeigefertige Tabellenzeile einer Kategorie.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRow {
    /// Eindeutige Kennung (Rueckverweis auf das Item)
    pub identifier: String,
    /// Spalte "Name"
    pub title: String,
    /// Spalte "Details"
    pub subtitle: String,
    /// Spalte "Blocked road" (invertierte Konvention, siehe `blocked_display`)
    pub blocked: String,
    /// Spalte "Starting" (formatiertes Datum)
    pub starting: String,
}

impl Item {
    /// Leitet die anzeigefertige Tabellenzeile ab.
    pub fn to_row(&self) -> ItemRow {
        ItemRow {
            identifier: self.identifier.clone(),
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            blocked: blocked_display(self.is_blocked),
            starting: self
                .start_timestamp
                .as_deref()
                .map(format_start_timestamp)
                .unwrap_or_default(),
        }
    }
}

/// Anzeige-Konvention fuer `isBlocked`: `true` → "No", `false` → "Yes".
///
/// Die invertierte Darstellung ist beabsichtigt. Fehlt das Feld, wird
/// "-" angezeigt.
pub fn blocked_display(raw: Option<bool>) -> String {
    match raw {
        Some(true) => "No".to_string(),
        Some(false) => "Yes".to_string(),
        None => "-".to_string(),
    }
}

/// Formatiert den API-Zeitstempel als `dd.MM.yyyy HH:mm`.
///
/// Nicht parsebare Werte werden unveraendert angezeigt statt die Zeile
/// scheitern zu lassen.
pub fn format_start_timestamp(raw: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(raw) {
        Ok(timestamp) => timestamp.format("%d.%m.%Y %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Akzeptiert Bool oder String ("true"/"false") fuer `isBlocked`.
fn deserialize_lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        Text(String),
    }

    let value = Option::<BoolOrString>::deserialize(deserializer)?;
    Ok(match value {
        Some(BoolOrString::Bool(b)) => Some(b),
        Some(BoolOrString::Text(s)) => match s.trim() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocked_true_displays_no_and_false_displays_yes() {
        // Invertierte Anzeige-Konvention: ein gesperrter Abschnitt zeigt
        // "No" an, ein freier "Yes".
        assert_eq!(blocked_display(Some(true)), "No");
        assert_eq!(blocked_display(Some(false)), "Yes");
        assert_eq!(blocked_display(None), "-");
    }

    #[test]
    fn item_deserializes_string_encoded_is_blocked() {
        let json = r#"{
            "identifier": "RW-1",
            "title": "A1 | AS Lohne",
            "subtitle": "Fahrbahnerneuerung",
            "isBlocked": "false",
            "startTimestamp": "2024-03-01T08:00:00.000+01:00"
        }"#;
        let item: Item = serde_json::from_str(json).expect("Item sollte dekodierbar sein");
        assert_eq!(item.is_blocked, Some(false));
        assert_eq!(item.to_row().blocked, "Yes");
    }

    #[test]
    fn start_timestamp_formats_to_german_date() {
        assert_eq!(
            format_start_timestamp("2024-03-01T08:30:00.000+01:00"),
            "01.03.2024 08:30"
        );
    }

    #[test]
    fn unparsable_timestamp_is_displayed_verbatim() {
        assert_eq!(format_start_timestamp("demnaechst"), "demnaechst");
    }

    #[test]
    fn detail_parses_coordinate_strings() {
        let json = r#"{
            "identifier": "RW-1",
            "title": "A1",
            "subtitle": "",
            "coordinate": { "lat": "52.51697", "long": "13.37763" },
            "description": ["Beginn: 01.03.2024", "Ende: 30.04.2024"]
        }"#;
        let detail: ItemDetail = serde_json::from_str(json).expect("Detail sollte dekodierbar sein");
        let point = detail.coordinate.to_point().expect("Koordinate gueltig");
        assert!((point.lat - 52.51697).abs() < 1e-9);
    }
}
