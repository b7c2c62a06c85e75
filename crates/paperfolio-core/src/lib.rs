//! # Paperfolio Core
//!
//! Core types for the paperfolio site: the paper data model, the immutable
//! in-memory catalog, and the shared error types.
//!
//! The catalog is populated once at startup and never mutated afterwards, so
//! it can be shared freely across request handlers without locking.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod error;
pub mod paper;

pub use catalog::{Catalog, Lookup};
pub use error::{Error, Result};
pub use paper::{Paper, PaperId};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
