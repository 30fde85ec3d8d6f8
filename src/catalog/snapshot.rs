//! Catalog envelope and snapshot loading.
//!
//! A snapshot is a single JSON document: envelope metadata (`object`,
//! `total_cards`, `has_more`) plus the ordered card list. It is parsed once
//! at startup, held in memory for the process lifetime, and never written
//! back.

use serde::{Deserialize, Serialize};

use crate::catalog::card::Card;
use crate::error::CatalogError;
use crate::resources::ResourceLoader;

/// The full loaded card set plus envelope metadata.
///
/// The four envelope fields are the only required structure in the whole
/// format; everything inside a [`Card`] is optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub object: String,
    pub total_cards: u32,
    pub has_more: bool,
    pub data: Vec<Card>,
}

impl Catalog {
    /// Parse a catalog document from raw bytes.
    ///
    /// Unknown fields are ignored; missing optional fields are tolerated.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CatalogError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Parse a catalog document from a reader.
    pub fn from_reader(reader: impl std::io::Read) -> Result<Self, CatalogError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load the snapshot named by `source` through the resource collaborator,
    /// then parse it.
    pub fn load(
        loader: &impl ResourceLoader,
        source: &SnapshotSource,
    ) -> Result<Self, CatalogError> {
        let bytes = loader
            .load(&source.name, &source.extension)
            .map_err(|error| CatalogError::Resource {
                name: source.qualified_name(),
                source: error,
            })?;
        Self::from_slice(&bytes)
    }

    /// The loaded cards, in snapshot order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.data
    }

    /// Number of cards actually present in this snapshot.
    ///
    /// `total_cards` is what the envelope claims the full set holds; the
    /// two differ when `has_more` is set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the snapshot holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Which bundled resource holds the catalog snapshot.
///
/// The host configures this at startup; the default matches the common
/// `cards.json` bundling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnapshotSource {
    /// Resource name without extension.
    pub name: String,
    /// Resource extension, normally `json`.
    pub extension: String,
}

impl SnapshotSource {
    /// Source for `<name>.json`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extension: "json".to_string(),
        }
    }

    /// Override the extension.
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Full resource file name, e.g. `cards.json`.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.name, self.extension)
    }
}

impl Default for SnapshotSource {
    fn default() -> Self {
        Self::new("cards")
    }
}
