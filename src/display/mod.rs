//! Detail-view projections: legality rows and mana symbols.
//!
//! ## Key Items
//!
//! - `legality_rows` / `LegalityRow` / `Treatment`: the fixed-order
//!   format-legality table
//! - `decode_mana_cost` / `ManaSymbol`: brace-token cost decoding
//!
//! Both are stateless pure transformations over immutable card data.

pub mod legality;
pub mod mana;

pub use legality::{legality_rows, LegalityRow, Treatment, FORMAT_COUNT};
pub use mana::{decode_mana_cost, ManaSymbol, ManaSymbols};
