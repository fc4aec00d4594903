//! Speciality data handed to the landing components.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

// 专科条目
/// One selectable speciality: its display name (also the route key) and the
/// image shown on its tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialityEntry {
    /// Display name, used verbatim as the listing route key.
    pub speciality: String,
    /// Image resource reference, resolved by the frontend's asset helper.
    pub image: String,
}

impl SpecialityEntry {
    /// Convenience constructor.
    pub fn new(speciality: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            speciality: speciality.into(),
            image: image.into(),
        }
    }
}

/// Validated, ordered list of specialities. Order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecialityCatalog {
    entries: Vec<SpecialityEntry>,
}

impl SpecialityCatalog {
    /// Build a catalog, rejecting blank and duplicate names.
    ///
    /// Names are stored trimmed since they double as route keys. An empty
    /// list is a valid catalog.
    pub fn new(mut entries: Vec<SpecialityEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for (index, entry) in entries.iter_mut().enumerate() {
            let name = entry.speciality.trim();
            if name.is_empty() {
                return Err(CatalogError::BlankSpeciality {
                    index,
                });
            }
            if name.len() != entry.speciality.len() {
                entry.speciality = name.to_string();
            }
            if !seen.insert(entry.speciality.clone()) {
                return Err(CatalogError::DuplicateSpeciality {
                    name: entry.speciality.clone(),
                });
            }
        }
        Ok(Self {
            entries,
        })
    }

    /// Parse a JSON array of `{ "speciality": .., "image": .. }` objects.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let entries: Vec<SpecialityEntry> = serde_json::from_str(raw)?;
        Self::new(entries)
    }

    /// Entries in display order.
    pub fn entries(&self) -> &[SpecialityEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&SpecialityEntry> {
        self.entries.get(index)
    }
}

/// The specialities the site ships with.
pub fn default_specialities() -> SpecialityCatalog {
    let entries = vec![
        SpecialityEntry::new("General physician", "General_physician.svg"),
        SpecialityEntry::new("Gynecologist", "Gynecologist.svg"),
        SpecialityEntry::new("Dermatologist", "Dermatologist.svg"),
        SpecialityEntry::new("Pediatricians", "Pediatricians.svg"),
        SpecialityEntry::new("Neurologist", "Neurologist.svg"),
        SpecialityEntry::new("Gastroenterologist", "Gastroenterologist.svg"),
    ];
    SpecialityCatalog {
        entries,
    }
}
