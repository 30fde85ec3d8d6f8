//! Sort modes over the filtered card list.
//!
//! Sorts are stable and non-mutating; the catalog itself is never
//! reordered. Two behaviors are deliberate quirks carried over from the
//! shipped app, pending a product decision:
//!
//! - `Rarity` compares rarity strings lexicographically, not by tier
//!   (common < mythic < rare < uncommon alphabetically).
//! - `Color` compares only the first entry of `color_identity`; the rest
//!   of a multi-color identity is ignored.

use serde::{Deserialize, Serialize};

use crate::catalog::Card;

/// Closed set of sort modes offered by the sort menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOption {
    /// Filtered order preserved (source catalog order).
    #[default]
    SourceOrder,
    /// Lexicographic on name, absent name treated as empty.
    NameAscending,
    /// Reverse lexicographic on name.
    NameDescending,
    /// Lexicographic on the rarity string.
    Rarity,
    /// Lexicographic on the first color-identity entry.
    Color,
}

impl SortOption {
    /// Every option, in menu order.
    pub const ALL: [SortOption; 5] = [
        SortOption::SourceOrder,
        SortOption::NameAscending,
        SortOption::NameDescending,
        SortOption::Rarity,
        SortOption::Color,
    ];

    /// Menu label for this option.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SortOption::SourceOrder => "Default",
            SortOption::NameAscending => "Sort A-Z",
            SortOption::NameDescending => "Sort Z-A",
            SortOption::Rarity => "Sort by Rarity",
            SortOption::Color => "Sort by Color",
        }
    }
}

/// Apply `option` to an already-filtered list.
///
/// Stable, so equal keys keep their filtered order.
#[must_use]
pub fn sort_cards<'a>(mut cards: Vec<&'a Card>, option: SortOption) -> Vec<&'a Card> {
    match option {
        SortOption::SourceOrder => {}
        SortOption::NameAscending => cards.sort_by(|a, b| name_key(a).cmp(name_key(b))),
        SortOption::NameDescending => cards.sort_by(|a, b| name_key(b).cmp(name_key(a))),
        SortOption::Rarity => cards.sort_by(|a, b| rarity_key(a).cmp(rarity_key(b))),
        SortOption::Color => cards.sort_by(|a, b| color_key(a).cmp(color_key(b))),
    }
    cards
}

fn name_key(card: &Card) -> &str {
    card.name.as_deref().unwrap_or("")
}

fn rarity_key(card: &Card) -> &str {
    card.rarity.as_deref().unwrap_or("")
}

fn color_key(card: &Card) -> &str {
    card.color_identity
        .as_ref()
        .and_then(|identity| identity.first())
        .map(String::as_str)
        .unwrap_or("")
}
