//! Error types for data handed to the landing components.

use thiserror::Error;

/// Reasons a speciality catalog is rejected.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// An entry has an empty or whitespace-only speciality name.
    #[error("speciality entry #{index} has a blank name")]
    BlankSpeciality {
        /// Position of the offending entry.
        index: usize,
    },

    /// Two entries share the same speciality name.
    #[error("speciality `{name}` appears more than once")]
    DuplicateSpeciality {
        /// The repeated name.
        name: String,
    },

    /// The catalog JSON could not be parsed.
    #[error("invalid speciality catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
