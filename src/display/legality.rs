//! Legality projection for the detail view.
//!
//! Transposes the fixed-schema legality record into an ordered list of
//! (format label, status) rows. The row count and order never vary with
//! the source record - missing statuses project as empty strings so the
//! grid stays aligned.

use crate::catalog::card::{Card, Legalities};

/// Number of rows every projection produces.
pub const FORMAT_COUNT: usize = 21;

/// One rendered legality row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegalityRow {
    /// Display label, e.g. `Standard`.
    pub label: &'static str,
    /// Raw status string, empty when the field was absent.
    pub status: String,
}

impl LegalityRow {
    /// Status as rendered: uppercased.
    #[must_use]
    pub fn status_display(&self) -> String {
        self.status.to_uppercase()
    }

    /// Display treatment for this status.
    #[must_use]
    pub fn treatment(&self) -> Treatment {
        Treatment::of(&self.status)
    }
}

/// How a status cell is highlighted.
///
/// `banned` and `restricted` fall through to `Plain` alongside unknown
/// statuses - the shipped classification never distinguished them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Treatment {
    /// `legal`: positive indicator.
    Positive,
    /// `not_legal`: muted indicator.
    Muted,
    /// Everything else, including empty: no indicator.
    Plain,
}

impl Treatment {
    /// Classify a raw status string.
    #[must_use]
    pub fn of(status: &str) -> Self {
        match status {
            "legal" => Treatment::Positive,
            "not_legal" => Treatment::Muted,
            _ => Treatment::Plain,
        }
    }
}

impl Legalities {
    /// The ordered (label, status) table this record projects through.
    ///
    /// Single source of truth for both the label order and the
    /// field-per-format mapping.
    fn rows(&self) -> [(&'static str, Option<&str>); FORMAT_COUNT] {
        [
            ("Standard", self.standard.as_deref()),
            ("Future", self.future.as_deref()),
            ("Historic", self.historic.as_deref()),
            ("Gladiator", self.gladiator.as_deref()),
            ("Pioneer", self.pioneer.as_deref()),
            ("Explorer", self.explorer.as_deref()),
            ("Modern", self.modern.as_deref()),
            ("Legacy", self.legacy.as_deref()),
            ("Pauper", self.pauper.as_deref()),
            ("Vintage", self.vintage.as_deref()),
            ("Penny", self.penny.as_deref()),
            ("Commander", self.commander.as_deref()),
            ("Oathbreaker", self.oathbreaker.as_deref()),
            ("Brawl", self.brawl.as_deref()),
            ("Historic Brawl", self.historicbrawl.as_deref()),
            ("Alchemy", self.alchemy.as_deref()),
            ("Pauper Commander", self.paupercommander.as_deref()),
            ("Duel", self.duel.as_deref()),
            ("Old School", self.oldschool.as_deref()),
            ("Premodern", self.premodern.as_deref()),
            ("PrEDH", self.predh.as_deref()),
        ]
    }
}

/// Project a legality record (or its absence) into the fixed row sequence.
///
/// Always exactly [`FORMAT_COUNT`] rows in the fixed label order, however
/// sparse the source record is.
#[must_use]
pub fn legality_rows(legalities: Option<&Legalities>) -> Vec<LegalityRow> {
    let empty = Legalities::default();
    legalities
        .unwrap_or(&empty)
        .rows()
        .into_iter()
        .map(|(label, status)| LegalityRow {
            label,
            status: status.unwrap_or("").to_string(),
        })
        .collect()
}

impl Card {
    /// Legality rows for this card's detail view.
    #[must_use]
    pub fn legality_rows(&self) -> Vec<LegalityRow> {
        legality_rows(self.legalities.as_ref())
    }
}
