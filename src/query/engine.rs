//! Visible-list derivation.
//!
//! The one pure function the UI binds to: filter by search text, then sort
//! by the selected mode. Recomputed in full on every keystroke or menu
//! change; catalogs are small enough that incremental updates would buy
//! nothing.

use crate::catalog::Card;
use crate::query::filter::matches_search;
use crate::query::sort::{sort_cards, SortOption};

/// The ordered sequence of cards to display.
///
/// Pure function of its three inputs; no side effects, nothing mutated.
#[must_use]
pub fn visible_cards<'a>(cards: &'a [Card], search: &str, sort: SortOption) -> Vec<&'a Card> {
    let filtered = cards
        .iter()
        .filter(|card| matches_search(card, search))
        .collect();
    sort_cards(filtered, sort)
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

    #[test]
    fn test_filter_then_sort() {
        let cards = vec![named("Shock"), named("Lightning Bolt"), named("Bolt")];

        let visible = visible_cards(&cards, "bolt", SortOption::NameAscending);
        let names: Vec<&str> = visible.iter().map(|card| card.name_or_empty()).collect();
        assert_eq!(names, ["Bolt", "Lightning Bolt"]);
    }

    #[test]
    fn test_empty_search_default_sort_is_identity() {
        let cards = vec![named("C"), named("A"), named("B")];
        let visible = visible_cards(&cards, "", SortOption::SourceOrder);
        assert_eq!(visible.len(), 3);
        for (original, shown) in cards.iter().zip(&visible) {
            assert!(std::ptr::eq(original, *shown));
        }
    }

    #[test]
    fn test_no_matches_yields_empty() {
        let cards = vec![named("Shock")];
        assert!(visible_cards(&cards, "bolt", SortOption::SourceOrder).is_empty());
    }
}
