//! Habit catalogs and completion sets
//!
//! Two fixed, disjoint, ordered catalogs exist: *required* habits (higher
//! scoring weight) and *bonus* habits (supportive but optional). A
//! [`HabitSet`] is always constructed from a catalog, so every canonical
//! habit is present in the set by construction and iteration preserves
//! catalog declaration order.

use serde::{Deserialize, Serialize};

/// Default required habits, in canonical order
pub const DEFAULT_REQUIRED_HABITS: [&str; 7] = [
    "Fajr",
    "Dhuhr",
    "Asr",
    "Maghrib",
    "Isha",
    "Read Qur'an",
    "No Caffeine",
];

/// Default bonus habits, in canonical order
pub const DEFAULT_BONUS_HABITS: [&str; 3] = ["Stretch", "Journal", "Lowered Gaze"];

/// An ordered catalog of habit display names
///
/// Order is canonical declaration order and is preserved through scoring,
/// recommendations, and the journal column layout. Names are unique;
/// duplicates are dropped on construction (first occurrence wins).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitCatalog {
    names: Vec<String>,
}

impl HabitCatalog {
    /// Create a catalog from an ordered list of names
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = Vec::new();
        for name in names {
            let name = name.into();
            if !seen.contains(&name) {
                seen.push(name);
            }
        }
        Self { names: seen }
    }

    /// The default required-habit catalog
    pub fn required_default() -> Self {
        Self::new(DEFAULT_REQUIRED_HABITS)
    }

    /// The default bonus-habit catalog
    pub fn bonus_default() -> Self {
        Self::new(DEFAULT_BONUS_HABITS)
    }

    /// Iterate names in canonical order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Whether a display name belongs to this catalog
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Resolve a name case-insensitively to its canonical display name
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.names
            .iter()
            .find(|n| n.eq_ignore_ascii_case(name))
            .map(String::as_str)
    }

    /// Number of habits in the catalog
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Create a completion set over this catalog with nothing completed
    pub fn empty_set(&self) -> HabitSet {
        HabitSet::from_catalog(self)
    }
}

/// A single habit with its completion flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitEntry {
    /// Display name, as declared in the catalog
    pub name: String,
    /// Whether the habit was completed today
    pub completed: bool,
}

/// An ordered mapping from habit name to completion flag
///
/// Always fully populated over its source catalog: constructing from a
/// catalog and toggling by name is the only way to change it, which is what
/// makes the completion-ratio division in scoring well defined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitSet {
    entries: Vec<HabitEntry>,
}

impl HabitSet {
    /// Create a set over a catalog with every habit incomplete
    pub fn from_catalog(catalog: &HabitCatalog) -> Self {
        Self {
            entries: catalog
                .names()
                .map(|name| HabitEntry {
                    name: name.to_string(),
                    completed: false,
                })
                .collect(),
        }
    }

    /// Mark a habit complete or incomplete
    ///
    /// Returns `false` when the name is not in the set; the set is unchanged.
    pub fn set_completed(&mut self, name: &str, completed: bool) -> bool {
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => {
                entry.completed = completed;
                true
            }
            None => false,
        }
    }

    /// Completion flag for a habit, `None` when the name is unknown
    pub fn is_completed(&self, name: &str) -> Option<bool> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.completed)
    }

    /// Number of completed habits
    pub fn completed_count(&self) -> usize {
        self.entries.iter().filter(|e| e.completed).count()
    }

    /// Number of habits in the set
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &HabitEntry> {
        self.entries.iter()
    }

    /// Iterate the names of incomplete habits, in catalog order
    pub fn incomplete(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|e| !e.completed)
            .map(|e| e.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_preserves_order_and_dedupes() {
        let catalog = HabitCatalog::new(["Fajr", "Dhuhr", "Fajr", "Asr"]);
        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, vec!["Fajr", "Dhuhr", "Asr"]);
    }

    #[test]
    fn test_default_catalogs_are_disjoint() {
        let required = HabitCatalog::required_default();
        let bonus = HabitCatalog::bonus_default();
        assert_eq!(required.len(), 7);
        assert_eq!(bonus.len(), 3);
        assert!(!bonus.names().any(|n| required.contains(n)));
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let catalog = HabitCatalog::required_default();
        assert_eq!(catalog.resolve("fajr"), Some("Fajr"));
        assert_eq!(catalog.resolve("READ QUR'AN"), Some("Read Qur'an"));
        assert_eq!(catalog.resolve("Vitamins"), None);
    }

    #[test]
    fn test_set_is_fully_populated_and_ordered() {
        let catalog = HabitCatalog::required_default();
        let set = catalog.empty_set();
        assert_eq!(set.len(), catalog.len());
        assert_eq!(set.completed_count(), 0);
        let names: Vec<&str> = set.iter().map(|e| e.name.as_str()).collect();
        let expected: Vec<&str> = catalog.names().collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_set_completed_rejects_unknown_names() {
        let mut set = HabitCatalog::bonus_default().empty_set();
        assert!(set.set_completed("Journal", true));
        assert!(!set.set_completed("Meditate", true));
        assert_eq!(set.completed_count(), 1);
        assert_eq!(set.is_completed("Journal"), Some(true));
        assert_eq!(set.is_completed("Meditate"), None);
    }

    #[test]
    fn test_incomplete_iterates_in_catalog_order() {
        let mut set = HabitCatalog::required_default().empty_set();
        set.set_completed("Fajr", true);
        set.set_completed("Dhuhr", true);
        let missing: Vec<&str> = set.incomplete().collect();
        assert_eq!(
            missing,
            vec!["Asr", "Maghrib", "Isha", "Read Qur'an", "No Caffeine"]
        );
    }
}
