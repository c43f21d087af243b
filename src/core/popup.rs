//! Popup-Inhalt eines Markers.
//!
//! Die API liefert die Beschreibung als positionsbasiertes String-Array;
//! hier wird daraus eine benannte Struktur. Die Bedeutung der Indizes ist
//! upstream nicht dokumentiert; bekannt ist nur: Index 0 und 1 werden
//! hervorgehoben dargestellt, Index 5 gedaempft.

use super::item::ItemDetail;

/// Anzeigefertiger Popup-Inhalt, ausschliesslich aus einem `ItemDetail`
/// abgeleitet.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PopupContent {
    /// Ueberschrift
    pub title: String,
    /// Unterzeile
    pub subtitle: String,
    /// Gedaempfte Zusatzzeile (Beschreibungsindex 5)
    pub footnote: Option<String>,
    /// Erste hervorgehobene Zeile (Beschreibungsindex 0)
    pub primary_line: Option<String>,
    /// Zweite hervorgehobene Zeile (Beschreibungsindex 1)
    pub secondary_line: Option<String>,
}

impl PopupContent {
    /// Baut den Popup-Inhalt aus einem Detail-Datensatz.
    /// Fehlende oder leere Beschreibungszeilen bleiben einfach weg.
    pub fn from_detail(detail: &ItemDetail) -> Self {
        Self {
            title: detail.title.clone(),
            subtitle: detail.subtitle.clone(),
            footnote: description_line(detail, 5),
            primary_line: description_line(detail, 0),
            secondary_line: description_line(detail, 1),
        }
    }
}

fn description_line(detail: &ItemDetail, index: usize) -> Option<String> {
    detail
        .description
        .get(index)
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::item::Coordinate;

    fn detail_with_description(description: Vec<&str>) -> ItemDetail {
        ItemDetail {
            identifier: "RW-1".to_string(),
            title: "A1".to_string(),
            subtitle: "Baustelle".to_string(),
            coordinate: Coordinate {
                lat: "51.0".to_string(),
                long: "10.0".to_string(),
            },
            description: description.into_iter().map(str::to_string).collect(),
            is_blocked: None,
            start_timestamp: None,
        }
    }

    #[test]
    fn popup_picks_indices_zero_one_and_five() {
        let detail = detail_with_description(vec![
            "Beginn: 01.03.2024",
            "Ende: 30.04.2024",
            "x",
            "y",
            "z",
            "Laenge: 2.3 km",
        ]);
        let popup = PopupContent::from_detail(&detail);
        assert_eq!(popup.primary_line.as_deref(), Some("Beginn: 01.03.2024"));
        assert_eq!(popup.secondary_line.as_deref(), Some("Ende: 30.04.2024"));
        assert_eq!(popup.footnote.as_deref(), Some("Laenge: 2.3 km"));
    }

    #[test]
    fn popup_tolerates_short_or_empty_descriptions() {
        let popup = PopupContent::from_detail(&detail_with_description(vec!["", "Ende"]));
        assert_eq!(popup.primary_line, None);
        assert_eq!(popup.secondary_line.as_deref(), Some("Ende"));
        assert_eq!(popup.footnote, None);
    }
}
