//! The immutable in-memory paper catalog.
//!
//! The catalog is an ordered, read-only collection built once at startup.
//! There are no create/update/delete operations; handlers only read it, so
//! sharing it across tasks needs no locking.

use crate::error::{Error, Result};
use crate::paper::{Paper, PaperId};

/// Outcome of a catalog lookup.
///
/// A missing paper is a documented result, not an error: the rendering
/// boundary receives it explicitly and produces a not-found page.
#[derive(Debug, Clone, Copy)]
pub enum Lookup<'a> {
    /// A paper with the requested identifier exists.
    Found(&'a Paper),
    /// No paper with the requested identifier exists.
    Missing(PaperId),
}

impl<'a> Lookup<'a> {
    /// Returns the paper if the lookup succeeded.
    #[must_use]
    pub fn paper(&self) -> Option<&'a Paper> {
        match self {
            Self::Found(paper) => Some(paper),
            Self::Missing(_) => None,
        }
    }

    /// Returns `true` if the lookup found a paper.
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Read-only ordered collection of papers.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    papers: Vec<Paper>,
}

impl Catalog {
    /// Creates a catalog from the given papers, preserving their order.
    #[must_use]
    pub fn new(papers: Vec<Paper>) -> Self {
        Self { papers }
    }

    /// Creates the placeholder catalog used for demonstration.
    #[must_use]
    pub fn placeholder() -> Self {
        Self::new(vec![
            Paper {
                id: PaperId(1),
                title: "Placeholder Paper".to_string(),
                authors: "A. Author".to_string(),
                journal: "Journal X".to_string(),
                date: "2023-01-01".to_string(),
                summary: "This is a placeholder abstract summary with AI insights.".to_string(),
                keywords: vec!["AI".to_string(), "placeholder".to_string()],
            },
            Paper {
                id: PaperId(2),
                title: "Another Paper".to_string(),
                authors: "B. Researcher".to_string(),
                journal: "Journal Y".to_string(),
                date: "2023-01-02".to_string(),
                summary: "Another sample summary with key results.".to_string(),
                keywords: vec!["ML".to_string(), "test".to_string()],
            },
        ])
    }

    /// Returns all papers in insertion order.
    #[must_use]
    pub fn papers(&self) -> &[Paper] {
        &self.papers
    }

    /// Returns the number of papers in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.papers.len()
    }

    /// Returns `true` if the catalog holds no papers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }

    /// Returns the first paper whose id matches, if any.
    #[must_use]
    pub fn find(&self, id: PaperId) -> Option<&Paper> {
        self.papers.iter().find(|paper| paper.id == id)
    }

    /// Looks up a paper, reporting absence explicitly.
    #[must_use]
    pub fn lookup(&self, id: PaperId) -> Lookup<'_> {
        match self.find(id) {
            Some(paper) => Lookup::Found(paper),
            None => Lookup::Missing(id),
        }
    }

    /// Returns the paper with the given id, or [`Error::PaperNotFound`].
    ///
    /// # Errors
    ///
    /// Returns an error if no paper with the given id exists.
    pub fn get(&self, id: PaperId) -> Result<&Paper> {
        self.find(id).ok_or(Error::PaperNotFound { id })
    }
}
