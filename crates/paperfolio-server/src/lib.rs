//! # Paperfolio Server
//!
//! HTTP server for the paperfolio site. Serves three pages: the paper
//! listing, a static personal page, and per-paper detail pages.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod render;
pub mod server;

pub use server::{Server, ServerConfig};
