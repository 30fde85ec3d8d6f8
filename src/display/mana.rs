//! Mana-cost symbol decoding.
//!
//! Costs arrive as brace-delimited token strings like `{2}{W}{W}`. The
//! decoder walks the tokens in order and keeps the ones it has icons for;
//! everything else (hybrid, phyrexian, X costs) is silently dropped. A
//! lossy best-effort decode, not a full cost parser.

use smallvec::SmallVec;

use crate::catalog::Card;

/// Decoded symbol run. Typical costs run well under 8 symbols.
pub type ManaSymbols = SmallVec<[ManaSymbol; 8]>;

/// A mana symbol with a matching display icon.
///
/// The generic-cost digits are a closed set: 0 through 5 and 7. There is
/// no `Six` because the shipped icon set never had a 6 - a known gap kept
/// as-is pending a product decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ManaSymbol {
    White,
    Blue,
    Black,
    Red,
    Green,
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Seven,
}

impl ManaSymbol {
    /// Decode one brace-stripped token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "W" => Some(ManaSymbol::White),
            "U" => Some(ManaSymbol::Blue),
            "B" => Some(ManaSymbol::Black),
            "R" => Some(ManaSymbol::Red),
            "G" => Some(ManaSymbol::Green),
            "0" => Some(ManaSymbol::Zero),
            "1" => Some(ManaSymbol::One),
            "2" => Some(ManaSymbol::Two),
            "3" => Some(ManaSymbol::Three),
            "4" => Some(ManaSymbol::Four),
            "5" => Some(ManaSymbol::Five),
            "7" => Some(ManaSymbol::Seven),
            _ => None,
        }
    }

    /// Icon asset name for this symbol.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            ManaSymbol::White => "W",
            ManaSymbol::Blue => "U",
            ManaSymbol::Black => "B",
            ManaSymbol::Red => "R",
            ManaSymbol::Green => "G",
            ManaSymbol::Zero => "0",
            ManaSymbol::One => "1",
            ManaSymbol::Two => "2",
            ManaSymbol::Three => "3",
            ManaSymbol::Four => "4",
            ManaSymbol::Five => "5",
            ManaSymbol::Seven => "7",
        }
    }
}

/// Decode a cost string into its recognized symbols, in order.
///
/// Tokens are the `}`-separated pieces with any `{` stripped; unrecognized
/// tokens are dropped without error. The empty string decodes to an empty
/// run.
#[must_use]
pub fn decode_mana_cost(cost: &str) -> ManaSymbols {
    let mut symbols = ManaSymbols::new();
    for piece in cost.split('}') {
        let token = piece.replace('{', "");
        if let Some(symbol) = ManaSymbol::from_token(&token) {
            symbols.push(symbol);
        }
    }
    symbols
}

impl Card {
    /// Symbols for this card's mana cost; empty when the cost is absent.
    #[must_use]
    pub fn mana_symbols(&self) -> ManaSymbols {
        decode_mana_cost(self.mana_cost.as_deref().unwrap_or(""))
    }
}
