use crate::core::{Category, ItemRow};

/// Tabellenzustand einer einzelnen Kategorie.
#[derive(Debug, Clone, Default)]
pub struct TableState {
    /// Anzeigefertige Zeilen (ersetzt bei jedem erfolgreichen Load)
    pub rows: Vec<ItemRow>,
    /// Seiten-Cursor (0-basiert)
    pub page: usize,
    /// Autobahn-Abschnitt unter dem die Zeilen geladen wurden
    pub loaded_road: Option<String>,
    /// Abruf laeuft gerade
    pub loading: bool,
    /// Letzter Abruf-Fehler (Zeilen bleiben stale-but-present stehen)
    pub last_error: Option<String>,
}

impl TableState {
    /// Anzahl Seiten bei gegebener Seitengroesse (mindestens 1).
    pub fn page_count(&self, page_size: usize) -> usize {
        if self.rows.is_empty() || page_size == 0 {
            return 1;
        }
        self.rows.len().div_ceil(page_size)
    }

    /// Die Zeilen der aktuellen Seite.
    pub fn page_rows(&self, page_size: usize) -> &[ItemRow] {
        if page_size == 0 {
            return &self.rows;
        }
        let start = (self.page * page_size).min(self.rows.len());
        let end = (start + page_size).min(self.rows.len());
        &self.rows[start..end]
    }

    /// Klemmt den Seiten-Cursor auf den gueltigen Bereich.
    pub fn clamp_page(&mut self, page_size: usize) {
        let max = self.page_count(page_size).saturating_sub(1);
        if self.page > max {
            self.page = max;
        }
    }
}

/// Tabellenzustaende aller Kategorien.
#[derive(Debug, Clone, Default)]
pub struct CategoryTables {
    tables: [TableState; Category::ALL.len()],
}

impl CategoryTables {
    /// Erstellt leere Tabellenzustaende.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tabellenzustand einer Kategorie.
    pub fn table(&self, category: Category) -> &TableState {
        &self.tables[category.index()]
    }

    /// Mutable Sicht auf den Tabellenzustand einer Kategorie.
    pub fn table_mut(&mut self, category: Category) -> &mut TableState {
        &mut self.tables[category.index()]
    }

    /// Markiert alle Tabellen als ladend (Road-Wechsel).
    pub fn mark_all_loading(&mut self) {
        for table in &mut self.tables {
            table.loading = true;
            table.last_error = None;
        }
    }
}
