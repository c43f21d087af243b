//! Registry aller aktuell gerenderten Karten-Marker.
//!
//! Einzige Quelle der Wahrheit dafuer, welche Marker sichtbar sind. Die
//! Registry ist transient und gilt nur fuer die aktuelle Session; ein
//! Wechsel des Autobahn-Abschnitts leert sie vollstaendig.
//!
//! Marker werden ausschliesslich hier konstruiert. Lookup per Identifier
//! ist indiziert (IndexMap); die Koordinaten-Deduplizierung scannt die
//! kleine Markerliste linear.

use indexmap::IndexMap;

use crate::core::{Category, GeoPoint, PopupContent};

/// Ein registrierter Karten-Marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerRecord {
    /// Rueckverweis auf das Item (eindeutig ueber alle Kategorien)
    pub identifier: String,
    /// Kategorie (bestimmt Farbe und Glyphe)
    pub category: Category,
    /// Geo-Position (exakte Gleichheit fuer Dedup)
    pub position: GeoPoint,
    /// Anzeigefertiger Popup-Inhalt
    pub popup: PopupContent,
}

/// Ergebnis von [`MarkerRegistry::add_or_update`].
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    /// Neuer Marker wurde angehaengt.
    Added,
    /// Bestehender Marker (gleicher Identifier oder gleiche Position)
    /// wurde in-place aktualisiert.
    Repositioned,
    /// Ein fremder Marker an identischer Position wurde verdraengt; der
    /// spaetere Aufruf gewinnt. Der Aufrufer muss die verdraengte Zeile
    /// kollabieren, damit Selektion und Marker konsistent bleiben.
    Displaced {
        /// Kategorie des verdraengten Markers
        category: Category,
        /// Identifier des verdraengten Markers
        identifier: String,
    },
}

/// Registry der aktiven Marker inklusive Render-Layer.
#[derive(Debug, Clone, Default)]
pub struct MarkerRegistry {
    records: IndexMap<String, MarkerRecord>,
    layer: Vec<MarkerRecord>,
}

impl MarkerRegistry {
    /// Erstellt eine leere Registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fuegt einen Marker hinzu oder aktualisiert einen bestehenden.
    ///
    /// Existiert bereits ein Marker mit exakt gleicher Position, wird kein
    /// zweiter Pin an diesem Punkt angelegt: der Eintrag wird in-place
    /// ersetzt und die Payload des spaeteren Aufrufs gewinnt. Existiert der
    /// Identifier an anderer Position, wird der Marker dorthin verschoben.
    pub fn add_or_update(
        &mut self,
        identifier: String,
        category: Category,
        position: GeoPoint,
        popup: PopupContent,
    ) -> AddOutcome {
        let colliding = self
            .records
            .values()
            .find(|record| record.position == position)
            .map(|record| record.identifier.clone());

        let outcome = match colliding {
            Some(existing) if existing == identifier => {
                if let Some(record) = self.records.get_mut(&identifier) {
                    record.category = category;
                    record.popup = popup;
                }
                AddOutcome::Repositioned
            }
            Some(existing) => {
                let displaced = self.records.shift_remove(&existing);
                self.records.insert(
                    identifier.clone(),
                    MarkerRecord {
                        identifier,
                        category,
                        position,
                        popup,
                    },
                );
                match displaced {
                    Some(record) => AddOutcome::Displaced {
                        category: record.category,
                        identifier: record.identifier,
                    },
                    None => AddOutcome::Added,
                }
            }
            None => {
                if let Some(record) = self.records.get_mut(&identifier) {
                    record.category = category;
                    record.position = position;
                    record.popup = popup;
                    AddOutcome::Repositioned
                } else {
                    self.records.insert(
                        identifier.clone(),
                        MarkerRecord {
                            identifier,
                            category,
                            position,
                            popup,
                        },
                    );
                    AddOutcome::Added
                }
            }
        };

        self.render();
        outcome
    }

    /// Entfernt den Marker mit dem angegebenen Identifier.
    /// Gibt zurueck ob ein Marker entfernt wurde; fehlende Identifier sind
    /// ein No-op.
    pub fn remove(&mut self, identifier: &str) -> bool {
        let removed = self.records.shift_remove(identifier).is_some();
        if removed {
            self.render();
        }
        removed
    }

    /// Entfernt alle Marker einer Kategorie.
    pub fn clear_category(&mut self, category: Category) {
        self.records.retain(|_, record| record.category != category);
        self.render();
    }

    /// Entfernt alle Marker.
    pub fn clear_all(&mut self) {
        self.records.clear();
        self.render();
    }

    /// Baut den sichtbaren Layer vollstaendig aus der Registry neu auf
    /// (detach all, reattach all). Idempotent.
    pub fn render(&mut self) {
        self.layer.clear();
        self.layer.extend(self.records.values().cloned());
    }

    /// Der aktuell sichtbare Marker-Layer in Einfuege-Reihenfolge.
    pub fn layer(&self) -> &[MarkerRecord] {
        &self.layer
    }

    /// Gibt den Marker mit dem angegebenen Identifier zurueck.
    pub fn get(&self, identifier: &str) -> Option<&MarkerRecord> {
        self.records.get(identifier)
    }

    /// Gibt zurueck ob ein Marker mit diesem Identifier existiert.
    pub fn contains(&self, identifier: &str) -> bool {
        self.records.contains_key(identifier)
    }

    /// Anzahl der Marker einer Kategorie (fuer Tab-Badges).
    pub fn category_count(&self, category: Category) -> usize {
        self.records
            .values()
            .filter(|record| record.category == category)
            .count()
    }

    /// Gibt die Anzahl aller Marker zurueck.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Gibt zurueck ob die Registry leer ist.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn popup(title: &str) -> PopupContent {
        PopupContent {
            title: title.to_string(),
            ..PopupContent::default()
        }
    }

    fn point(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon)
    }

    #[test]
    fn add_appends_and_renders() {
        let mut registry = MarkerRegistry::new();
        let outcome = registry.add_or_update(
            "RW-1".to_string(),
            Category::Roadwork,
            point(51.0, 10.0),
            popup("A1"),
        );
        assert_eq!(outcome, AddOutcome::Added);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.layer().len(), 1);
    }

    #[test]
    fn identical_coordinates_keep_single_entry_and_later_payload_wins() {
        let mut registry = MarkerRegistry::new();
        registry.add_or_update(
            "RW-1".to_string(),
            Category::Roadwork,
            point(51.0, 10.0),
            popup("Baustelle"),
        );
        let outcome = registry.add_or_update(
            "CL-2".to_string(),
            Category::Closure,
            point(51.0, 10.0),
            popup("Sperrung"),
        );

        assert_eq!(
            outcome,
            AddOutcome::Displaced {
                category: Category::Roadwork,
                identifier: "RW-1".to_string(),
            }
        );
        assert_eq!(registry.len(), 1);
        let record = registry.get("CL-2").expect("spaeterer Aufruf gewinnt");
        assert_eq!(record.category, Category::Closure);
        assert_eq!(record.popup.title, "Sperrung");
        assert!(!registry.contains("RW-1"));
    }

    #[test]
    fn same_identifier_at_same_position_updates_in_place() {
        let mut registry = MarkerRegistry::new();
        registry.add_or_update(
            "RW-1".to_string(),
            Category::Roadwork,
            point(51.0, 10.0),
            popup("alt"),
        );
        let outcome = registry.add_or_update(
            "RW-1".to_string(),
            Category::Roadwork,
            point(51.0, 10.0),
            popup("neu"),
        );
        assert_eq!(outcome, AddOutcome::Repositioned);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("RW-1").map(|r| r.popup.title.as_str()), Some("neu"));
    }

    #[test]
    fn known_identifier_moves_to_new_position() {
        let mut registry = MarkerRegistry::new();
        registry.add_or_update(
            "RW-1".to_string(),
            Category::Roadwork,
            point(51.0, 10.0),
            popup("A1"),
        );
        let outcome = registry.add_or_update(
            "RW-1".to_string(),
            Category::Roadwork,
            point(52.0, 11.0),
            popup("A1"),
        );
        assert_eq!(outcome, AddOutcome::Repositioned);
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get("RW-1").map(|r| r.position),
            Some(point(52.0, 11.0))
        );
    }

    #[test]
    fn remove_missing_identifier_is_noop() {
        let mut registry = MarkerRegistry::new();
        assert!(!registry.remove("unbekannt"));
        registry.add_or_update(
            "RW-1".to_string(),
            Category::Roadwork,
            point(51.0, 10.0),
            popup("A1"),
        );
        assert!(registry.remove("RW-1"));
        assert!(registry.is_empty());
        assert!(registry.layer().is_empty());
    }

    #[test]
    fn render_is_idempotent() {
        let mut registry = MarkerRegistry::new();
        registry.add_or_update(
            "RW-1".to_string(),
            Category::Roadwork,
            point(51.0, 10.0),
            popup("A1"),
        );
        registry.add_or_update(
            "WC-2".to_string(),
            Category::Webcam,
            point(52.0, 11.0),
            popup("Cam"),
        );

        registry.render();
        let first = registry.layer().to_vec();
        registry.render();
        assert_eq!(registry.layer(), first.as_slice());
    }

    #[test]
    fn clear_category_only_touches_that_category() {
        let mut registry = MarkerRegistry::new();
        registry.add_or_update(
            "RW-1".to_string(),
            Category::Roadwork,
            point(51.0, 10.0),
            popup("A1"),
        );
        registry.add_or_update(
            "WC-2".to_string(),
            Category::Webcam,
            point(52.0, 11.0),
            popup("Cam"),
        );

        registry.clear_category(Category::Roadwork);
        assert!(!registry.contains("RW-1"));
        assert!(registry.contains("WC-2"));
        assert_eq!(registry.category_count(Category::Webcam), 1);
    }
}
