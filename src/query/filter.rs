//! Name filter.
//!
//! A card passes when the search string is empty, or when its name contains
//! the search string case-insensitively. A card with no name never matches
//! a non-empty search - that is exclusion, not an error.

use crate::catalog::Card;

/// Whether `card` matches `search`.
///
/// Case folding is Unicode-aware (`str::to_lowercase`), not locale-tailored.
#[must_use]
pub fn matches_search(card: &Card, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    match card.name.as_deref() {
        Some(name) => name.to_lowercase().contains(&search.to_lowercase()),
        None => false,
    }
}
