//! The paper record data model.

use serde::{Deserialize, Serialize};

/// Unique identifier for a paper, the external lookup key.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct PaperId(pub u32);

impl PaperId {
    /// Creates a new `PaperId`.
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PaperId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PaperId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Metadata for a single paper.
///
/// All fields are free-form text; no format validation is applied. Records
/// are constructed once when the catalog is built and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    /// Unique identifier, used as the lookup key.
    pub id: PaperId,
    /// Paper title.
    pub title: String,
    /// Authors, as a single display string.
    pub authors: String,
    /// Journal or venue name.
    pub journal: String,
    /// Publication date.
    pub date: String,
    /// Abstract summary.
    pub summary: String,
    /// Ordered keyword tags.
    pub keywords: Vec<String>,
}
