//! Browsing session state.
//!
//! `CardBrowser` is the toolkit-free counterpart of the app's main view:
//! it loads the snapshot once, holds the transient search text and sort
//! selection, and derives the visible list as a pure function on demand.
//! Selection state is never persisted - every launch starts from the
//! default sort and an empty search.

use log::{debug, error};

use crate::catalog::{Card, Catalog, SnapshotSource};
use crate::query::{visible_cards, SortOption};
use crate::resources::ResourceLoader;

/// In-memory browsing session over one loaded catalog.
#[derive(Clone, Debug, Default)]
pub struct CardBrowser {
    catalog: Catalog,
    search: String,
    sort: SortOption,
}

impl CardBrowser {
    /// Browse an already-loaded catalog.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            search: String::new(),
            sort: SortOption::default(),
        }
    }

    /// A session over no cards at all.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the bundled snapshot and start a session over it.
    ///
    /// Load or parse failure is logged and degrades to an empty session;
    /// the UI shows an empty list instead of crashing. This is the only
    /// error path in the core.
    pub fn load(loader: &impl ResourceLoader, source: &SnapshotSource) -> Self {
        match Catalog::load(loader, source) {
            Ok(catalog) => {
                debug!(
                    "loaded {} cards from {} (envelope total {})",
                    catalog.len(),
                    source.qualified_name(),
                    catalog.total_cards
                );
                Self::new(catalog)
            }
            Err(err) => {
                error!("failed to load {}: {err}", source.qualified_name());
                Self::empty()
            }
        }
    }

    /// The loaded catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current search text.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Replace the search text (every keystroke).
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Currently selected sort mode.
    #[must_use]
    pub fn sort(&self) -> SortOption {
        self.sort
    }

    /// Select a sort mode from the menu.
    pub fn set_sort(&mut self, option: SortOption) {
        self.sort = option;
    }

    /// The ordered card sequence to render right now.
    ///
    /// Recomputed in full on each call; cheap at catalog scale.
    #[must_use]
    pub fn visible(&self) -> Vec<&Card> {
        visible_cards(self.catalog.cards(), &self.search, self.sort)
    }

    /// Open a detail pager over the current visible sequence.
    ///
    /// Returns `None` when `start` is out of bounds (including the empty
    /// list).
    #[must_use]
    pub fn pager(&self, start: usize) -> Option<CardPager<'_>> {
        CardPager::new(self.visible(), start)
    }
}

/// Prev/next navigation over a fixed visible sequence.
///
/// Mirrors the detail view's arrow buttons: both ends clamp rather than
/// wrap.
#[derive(Clone, Debug)]
pub struct CardPager<'a> {
    cards: Vec<&'a Card>,
    current: usize,
}

impl<'a> CardPager<'a> {
    /// Pager over `cards` starting at `start`, if in bounds.
    #[must_use]
    pub fn new(cards: Vec<&'a Card>, start: usize) -> Option<Self> {
        if start < cards.len() {
            Some(Self {
                cards,
                current: start,
            })
        } else {
            None
        }
    }

    /// The card the detail view shows.
    #[must_use]
    pub fn current(&self) -> &'a Card {
        self.cards[self.current]
    }

    /// Position of the current card.
    #[must_use]
    pub fn index(&self) -> usize {
        self.current
    }

    /// Number of cards in the sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True when the sequence has no cards.
    ///
    /// Never the case for a pager built through [`CardPager::new`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Step back one card. Returns whether the position moved.
    pub fn previous(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Step forward one card. Returns whether the position moved.
    pub fn next(&mut self) -> bool {
        if self.current + 1 < self.cards.len() {
            self.current += 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> Card {
        Card {
            name: Some(name.to_string()),
            ..Card::default()
        }
    }

    fn catalog(names: &[&str]) -> Catalog {
        Catalog {
            object: "list".to_string(),
            total_cards: names.len() as u32,
            has_more: false,
            data: names.iter().map(|name| named(name)).collect(),
        }
    }

    #[test]
    fn test_fresh_session_defaults() {
        let browser = CardBrowser::new(catalog(&["Shock"]));
        assert_eq!(browser.search(), "");
        assert_eq!(browser.sort(), SortOption::SourceOrder);
        assert_eq!(browser.visible().len(), 1);
    }

    #[test]
    fn test_search_and_sort_drive_visible() {
        let mut browser = CardBrowser::new(catalog(&["Shock", "Bolt", "Boltwave"]));

        browser.set_search("bolt");
        let names: Vec<&str> = browser
            .visible()
            .iter()
            .map(|card| card.name_or_empty())
            .collect();
        assert_eq!(names, ["Bolt", "Boltwave"]);

        browser.set_sort(SortOption::NameDescending);
        let names: Vec<&str> = browser
            .visible()
            .iter()
            .map(|card| card.name_or_empty())
            .collect();
        assert_eq!(names, ["Boltwave", "Bolt"]);
    }

    #[test]
    fn test_empty_session_shows_nothing() {
        let browser = CardBrowser::empty();
        assert!(browser.visible().is_empty());
        assert!(browser.pager(0).is_none());
    }

    #[test]
    fn test_pager_clamps_at_both_ends() {
        let browser = CardBrowser::new(catalog(&["A", "B", "C"]));
        let mut pager = browser.pager(0).unwrap();

        assert_eq!(pager.current().name_or_empty(), "A");
        assert!(!pager.previous());
        assert_eq!(pager.index(), 0);

        assert!(pager.next());
        assert!(pager.next());
        assert_eq!(pager.current().name_or_empty(), "C");
        assert!(!pager.next());
        assert_eq!(pager.index(), 2);

        assert!(pager.previous());
        assert_eq!(pager.current().name_or_empty(), "B");
    }

    #[test]
    fn test_pager_out_of_bounds_start() {
        let browser = CardBrowser::new(catalog(&["A"]));
        assert!(browser.pager(1).is_none());
        assert_eq!(browser.pager(0).unwrap().len(), 1);
    }
}
