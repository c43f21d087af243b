//! Datenkategorien der Autobahn-API.
//!
//! Eine Kategorie bestimmt Service-Endpunkt, Antwort-Schluessel,
//! Tab-Position und Marker-Darstellung.

/// Datenkategorie eines Autobahn-Abschnitts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Baustellen
    Roadwork,
    /// Sperrungen
    Closure,
    /// Verkehrsmeldungen
    Warning,
    /// E-Ladestationen
    ChargingStation,
    /// LKW-Parkplaetze
    Parking,
    /// Webcams
    Webcam,
}

impl Category {
    /// Alle Kategorien in Tab-Reihenfolge.
    pub const ALL: [Category; 6] = [
        Category::Roadwork,
        Category::Closure,
        Category::Warning,
        Category::ChargingStation,
        Category::Parking,
        Category::Webcam,
    ];

    /// Index der Kategorie in Tab-Reihenfolge.
    pub fn index(self) -> usize {
        match self {
            Category::Roadwork => 0,
            Category::Closure => 1,
            Category::Warning => 2,
            Category::ChargingStation => 3,
            Category::Parking => 4,
            Category::Webcam => 5,
        }
    }

    /// Kategorie zum Tab-Index (None bei ungueltigem Index).
    pub fn from_tab_index(index: usize) -> Option<Category> {
        Category::ALL.get(index).copied()
    }

    /// Pfadsegment des Listen-Endpunkts (`{base}/{road}/services/{slug}`).
    pub fn service_slug(self) -> &'static str {
        match self {
            Category::Roadwork => "roadworks",
            Category::Closure => "closure",
            Category::Warning => "warning",
            Category::ChargingStation => "electric_charging_station",
            Category::Parking => "parking_lorry",
            Category::Webcam => "webcam",
        }
    }

    /// Schluessel des Item-Arrays in der Listen-Antwort.
    pub fn list_key(self) -> &'static str {
        match self {
            Category::Roadwork => "roadworks",
            Category::Closure => "closure",
            Category::Warning => "warning",
            Category::ChargingStation => "electric_charging_station",
            Category::Parking => "parking_lorry",
            Category::Webcam => "webcams",
        }
    }

    /// Schluessel des Detail-Objekts in der Detail-Antwort.
    pub fn detail_key(self) -> &'static str {
        match self {
            Category::Roadwork => "roadworkDetails",
            Category::Closure => "closureDetails",
            Category::Warning => "warningDetails",
            Category::ChargingStation => "chargingDetails",
            Category::Parking => "parkingDetails",
            Category::Webcam => "webcamDetails",
        }
    }

    /// Anzeigename fuer Tabs und Menues.
    pub fn label(self) -> &'static str {
        match self {
            Category::Roadwork => "Roadworks",
            Category::Closure => "Closures",
            Category::Warning => "Warnings",
            Category::ChargingStation => "Charging",
            Category::Parking => "Parking",
            Category::Webcam => "Webcams",
        }
    }

    /// Marker-Glyphe auf der Karte.
    pub fn glyph(self) -> &'static str {
        match self {
            Category::Roadwork => "🚧",
            Category::Closure => "⛔",
            Category::Warning => "⚠",
            Category::ChargingStation => "⚡",
            Category::Parking => "🅿",
            Category::Webcam => "📷",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_index_roundtrip() {
        for category in Category::ALL {
            assert_eq!(Category::from_tab_index(category.index()), Some(category));
        }
        assert_eq!(Category::from_tab_index(6), None);
    }

    #[test]
    fn list_key_differs_from_slug_only_for_webcams() {
        for category in Category::ALL {
            if category == Category::Webcam {
                assert_eq!(category.service_slug(), "webcam");
                assert_eq!(category.list_key(), "webcams");
            } else {
                assert_eq!(category.service_slug(), category.list_key());
            }
        }
    }
}
