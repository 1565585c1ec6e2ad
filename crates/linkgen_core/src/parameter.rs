use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One selectable filter choice within a category.
///
/// `id` is the catalogue's numeric `search_id`, carried as a string so it can
/// double as a map key. Only the user toggles `is_selected`; the catalogue
/// never carries selection state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub is_selected: bool,
}

impl SelectionEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_selected: false,
        }
    }

    pub fn selected(mut self) -> Self {
        self.is_selected = true;
        self
    }
}

/// One filter dimension: an identifier-keyed set of selectable entries.
///
/// Invariant: the map key equals the entry's `id`, so ids are unique within
/// the category. Map iteration order carries no meaning; ordered views are
/// produced on demand.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterCategory(HashMap<String, SelectionEntry>);

impl ParameterCategory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry keyed by its id. A same-id insert replaces the
    /// previous entry.
    pub fn insert(&mut self, entry: SelectionEntry) {
        self.0.insert(entry.id.clone(), entry);
    }

    pub fn get(&self, id: &str) -> Option<&SelectionEntry> {
        self.0.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut SelectionEntry> {
        self.0.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &SelectionEntry> {
        self.0.values()
    }

    /// Ids of the selected entries in ascending order.
    ///
    /// Catalogue ids are numeric, so ids that parse as integers compare
    /// numerically ("2" before "10"); anything else falls back to a plain
    /// string comparison. This is the deterministic order the URL builder
    /// relies on.
    pub fn selected_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self
            .0
            .values()
            .filter(|entry| entry.is_selected)
            .map(|entry| entry.id.as_str())
            .collect();
        ids.sort_unstable_by(|a, b| match (a.parse::<u64>(), b.parse::<u64>()) {
            (Ok(left), Ok(right)) => left.cmp(&right),
            _ => a.cmp(b),
        });
        ids
    }

    /// Display labels sorted case-insensitively, optionally restricted to
    /// selected entries.
    pub fn names(&self, selected_only: bool) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .0
            .values()
            .filter(|entry| !selected_only || entry.is_selected)
            .map(|entry| entry.name.as_str())
            .collect();
        names.sort_unstable_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
        names
    }

    /// Reconciles this category against a freshly fetched catalogue.
    ///
    /// The result contains exactly the remote ids. The catalogue is
    /// authoritative for labels and for which entries exist; local state is
    /// authoritative for selection flags. An entry the catalogue dropped
    /// disappears, selected or not.
    pub fn merged(&self, remote: &Self) -> Self {
        let entries = remote
            .0
            .values()
            .map(|entry| {
                let is_selected = self
                    .0
                    .get(&entry.id)
                    .is_some_and(|local| local.is_selected);
                SelectionEntry {
                    id: entry.id.clone(),
                    name: entry.name.clone(),
                    is_selected,
                }
            })
            .collect();
        entries
    }
}

impl FromIterator<SelectionEntry> for ParameterCategory {
    fn from_iter<I: IntoIterator<Item = SelectionEntry>>(iter: I) -> Self {
        let mut category = Self::new();
        for entry in iter {
            category.insert(entry);
        }
        category
    }
}
