//! # cardscope
//!
//! Core model and query logic for a card-catalog browsing app: parse a
//! bundled JSON snapshot, search and sort it, and shape single-card data
//! for a detail view. Rendering, image fetching, and asset lookup stay on
//! the host side behind small collaborator traits.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Free**: no layout, no toolkit types. The crate hands
//!    the UI ordered sequences and leaves drawing to it.
//!
//! 2. **Optional-First Records**: almost every card field can be absent,
//!    and absence is ordinary data. Call sites pick the fallback.
//!
//! 3. **Pure Derivations**: the visible list, legality rows, and mana
//!    symbols are pure functions of immutable inputs, recomputed in full
//!    on every state change. Catalogs are small; nothing is incremental.
//!
//! ## Modules
//!
//! - `catalog`: snapshot envelope, card records, id lookup
//! - `query`: search filter and sort modes
//! - `display`: legality projection and mana-symbol decoding
//! - `browser`: the load-once browsing session and detail pager
//! - `resources`: collaborator seams (resource loader, image fetcher)
//! - `error`: the single load/parse error type

pub mod browser;
pub mod catalog;
pub mod display;
pub mod error;
pub mod query;
pub mod resources;

// Re-export commonly used types
pub use crate::catalog::{
    Card, Catalog, CatalogIndex, ImageUris, Legalities, Prices, PurchaseUris, RelatedUris,
    SnapshotSource,
};

pub use crate::query::{matches_search, sort_cards, visible_cards, SortOption};

pub use crate::display::{
    decode_mana_cost, legality_rows, LegalityRow, ManaSymbol, ManaSymbols, Treatment, FORMAT_COUNT,
};

pub use crate::browser::{CardBrowser, CardPager};

pub use crate::resources::{DirectoryLoader, ImageFetcher, ImageState, ResourceLoader};

pub use crate::error::CatalogError;
