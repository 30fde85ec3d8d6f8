//! Card catalog model: envelope, card records, and id lookup.
//!
//! ## Key Types
//!
//! - `Catalog`: the snapshot envelope (`object`, `total_cards`, `has_more`)
//!   plus the ordered card list
//! - `Card`: one record of ~60 optional named fields
//! - `ImageUris` / `Legalities` / `Prices` / `RelatedUris` / `PurchaseUris`:
//!   nested optional-field records
//! - `SnapshotSource`: which bundled resource holds the snapshot
//! - `CatalogIndex`: id -> card lookup
//!
//! Everything here is immutable after load.

pub mod card;
pub mod index;
pub mod snapshot;

pub use card::{Card, ImageUris, Legalities, Prices, PurchaseUris, RelatedUris};
pub use index::CatalogIndex;
pub use snapshot::{Catalog, SnapshotSource};
