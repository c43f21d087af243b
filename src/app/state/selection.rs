use indexmap::IndexSet;

use crate::core::Category;

/// Auswahlbezogener Anwendungszustand.
///
/// Pro Kategorie eine geordnete Menge expandierter Identifier plus die
/// Menge der Identifier mit laufendem Detail-Abruf. Invariante im
/// Ruhezustand (keine Pending-Eintraege): ein Identifier ist genau dann
/// expandiert, wenn die Marker-Registry einen Marker mit diesem Tag haelt.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    expanded: [IndexSet<String>; Category::ALL.len()],
    pending: [IndexSet<String>; Category::ALL.len()],
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expandierte Identifier einer Kategorie in Klick-Reihenfolge.
    pub fn expanded(&self, category: Category) -> &IndexSet<String> {
        &self.expanded[category.index()]
    }

    /// Mutable Sicht auf die expandierten Identifier einer Kategorie.
    pub fn expanded_mut(&mut self, category: Category) -> &mut IndexSet<String> {
        &mut self.expanded[category.index()]
    }

    /// Identifier mit laufendem Detail-Abruf.
    pub fn pending(&self, category: Category) -> &IndexSet<String> {
        &self.pending[category.index()]
    }

    /// Mutable Sicht auf die Pending-Menge einer Kategorie.
    pub fn pending_mut(&mut self, category: Category) -> &mut IndexSet<String> {
        &mut self.pending[category.index()]
    }

    /// Gibt zurueck ob die Zeile expandiert ist.
    pub fn is_expanded(&self, category: Category, identifier: &str) -> bool {
        self.expanded[category.index()].contains(identifier)
    }

    /// Gibt zurueck ob fuer die Zeile ein Detail-Abruf laeuft.
    pub fn is_pending(&self, category: Category, identifier: &str) -> bool {
        self.pending[category.index()].contains(identifier)
    }

    /// Leert Selektion und Pending-Menge einer Kategorie.
    pub fn clear_category(&mut self, category: Category) {
        self.expanded[category.index()].clear();
        self.pending[category.index()].clear();
    }

    /// Leert alle Selektionen und Pending-Mengen.
    pub fn clear_all(&mut self) {
        for index in 0..Category::ALL.len() {
            self.expanded[index].clear();
            self.pending[index].clear();
        }
    }

    /// Gesamtzahl expandierter Zeilen ueber alle Kategorien.
    pub fn expanded_count(&self) -> usize {
        self.expanded.iter().map(IndexSet::len).sum()
    }

    /// Gesamtzahl laufender Detail-Abrufe.
    pub fn pending_count(&self) -> usize {
        self.pending.iter().map(IndexSet::len).sum()
    }
}
