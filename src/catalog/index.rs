//! Card lookup by catalog id.
//!
//! The visible list is positional, but detail flows occasionally need to
//! resolve a card by its id (deep links, restoring a selection). The index
//! is built once over a loaded catalog and borrows from it.

use rustc_hash::FxHashMap;

use crate::catalog::card::Card;
use crate::catalog::snapshot::Catalog;

/// Id -> card lookup over a loaded catalog.
///
/// Duplicate ids are permitted in snapshots and unremarkable; the first
/// occurrence wins. Cards without an id are simply not indexed.
#[derive(Debug)]
pub struct CatalogIndex<'a> {
    by_id: FxHashMap<&'a str, usize>,
    cards: &'a [Card],
}

impl<'a> CatalogIndex<'a> {
    /// Build the index over `catalog`.
    #[must_use]
    pub fn build(catalog: &'a Catalog) -> Self {
        let mut by_id = FxHashMap::default();
        for (position, card) in catalog.cards().iter().enumerate() {
            if let Some(id) = card.id.as_deref() {
                by_id.entry(id).or_insert(position);
            }
        }
        Self {
            by_id,
            cards: catalog.cards(),
        }
    }

    /// Resolve a card by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&'a Card> {
        self.by_id.get(id).map(|&position| &self.cards[position])
    }

    /// Check whether an id is present.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Number of indexed ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// True when no card carried an id.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
