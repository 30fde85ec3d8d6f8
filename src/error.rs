//! Crate error type.
//!
//! There is exactly one fallible operation in the core: loading and parsing
//! the bundled catalog snapshot. Everything downstream works over optional
//! fields and cannot fail.

use thiserror::Error;

/// Errors raised while loading a catalog snapshot.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The named resource could not be read.
    #[error("resource {name:?} unavailable: {source}")]
    Resource {
        /// Qualified resource name, e.g. `cards.json`.
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// The resource was read but is not a valid catalog document.
    #[error("catalog snapshot failed to parse: {0}")]
    Parse(#[from] serde_json::Error),
}
