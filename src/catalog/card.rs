//! Card records - static catalog data.
//!
//! `Card` mirrors one entry of the public card-catalog export format. Field
//! names are bit-exact with the JSON document; nearly every field is
//! optional, and absence is a valid, expected state rather than an error.
//! Cards are read-only value records - nothing mutates them after load.

use serde::{Deserialize, Serialize};

/// One card record from the catalog snapshot.
///
/// Only the catalog envelope enforces structure; here, every field is
/// optional. Call sites supply their own fallback (usually the empty
/// string) instead of treating `None` as a failure.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub object: Option<String>,
    pub id: Option<String>,
    pub oracle_id: Option<String>,
    pub multiverse_ids: Option<Vec<u32>>,
    pub mtgo_id: Option<u32>,
    pub arena_id: Option<u32>,
    pub tcgplayer_id: Option<u32>,
    pub cardmarket_id: Option<u32>,
    pub name: Option<String>,
    pub lang: Option<String>,
    pub released_at: Option<String>,
    pub uri: Option<String>,
    pub scryfall_uri: Option<String>,
    pub layout: Option<String>,
    pub highres_image: Option<bool>,
    pub image_status: Option<String>,
    pub image_uris: Option<ImageUris>,
    pub mana_cost: Option<String>,
    pub cmc: Option<f64>,
    pub type_line: Option<String>,
    pub oracle_text: Option<String>,
    pub colors: Option<Vec<String>>,
    pub color_identity: Option<Vec<String>>,
    pub keywords: Option<Vec<String>>,
    pub legalities: Option<Legalities>,
    pub games: Option<Vec<String>>,
    pub reserved: Option<bool>,
    pub foil: Option<bool>,
    pub nonfoil: Option<bool>,
    pub finishes: Option<Vec<String>>,
    pub oversized: Option<bool>,
    pub promo: Option<bool>,
    pub reprint: Option<bool>,
    pub variation: Option<bool>,
    pub set_id: Option<String>,
    pub set: Option<String>,
    pub set_name: Option<String>,
    pub set_type: Option<String>,
    pub set_uri: Option<String>,
    pub set_search_uri: Option<String>,
    pub scryfall_set_uri: Option<String>,
    pub rulings_uri: Option<String>,
    pub prints_search_uri: Option<String>,
    pub collector_number: Option<String>,
    pub digital: Option<bool>,
    pub rarity: Option<String>,
    pub flavor_text: Option<String>,
    pub card_back_id: Option<String>,
    pub artist: Option<String>,
    pub artist_ids: Option<Vec<String>>,
    pub illustration_id: Option<String>,
    pub border_color: Option<String>,
    pub frame: Option<String>,
    pub frame_effects: Option<Vec<String>>,
    pub security_stamp: Option<String>,
    pub full_art: Option<bool>,
    pub textless: Option<bool>,
    pub booster: Option<bool>,
    pub story_spotlight: Option<bool>,
    pub promo_types: Option<Vec<String>>,
    pub edhrec_rank: Option<u32>,
    pub penny_rank: Option<u32>,
    pub prices: Option<Prices>,
    pub related_uris: Option<RelatedUris>,
    pub purchase_uris: Option<PurchaseUris>,
}

impl Card {
    /// Card name, or the empty string when absent.
    #[must_use]
    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Image URL for grid cells (the `normal` size variant).
    #[must_use]
    pub fn thumbnail_url(&self) -> Option<&str> {
        self.image_uris.as_ref().and_then(|uris| uris.normal.as_deref())
    }

    /// Image URL for the detail-view header (the `art_crop` variant).
    #[must_use]
    pub fn art_crop_url(&self) -> Option<&str> {
        self.image_uris.as_ref().and_then(|uris| uris.art_crop.as_deref())
    }

    /// Image URL for the full-screen overlay (the `normal` variant again).
    #[must_use]
    pub fn full_image_url(&self) -> Option<&str> {
        self.thumbnail_url()
    }

    /// Artist credit line for the detail view.
    #[must_use]
    pub fn artist_credit(&self) -> String {
        format!("Illustrated By {}", self.artist.as_deref().unwrap_or(""))
    }
}

/// Size-variant artwork URLs, all optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageUris {
    pub small: Option<String>,
    pub normal: Option<String>,
    pub large: Option<String>,
    pub png: Option<String>,
    pub art_crop: Option<String>,
    pub border_crop: Option<String>,
}

/// Per-format play-eligibility statuses.
///
/// Statuses are stored as-is - `legal`, `not_legal`, `restricted`, and
/// `banned` are the usual values, but nothing is validated here.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Legalities {
    pub standard: Option<String>,
    pub future: Option<String>,
    pub historic: Option<String>,
    pub gladiator: Option<String>,
    pub pioneer: Option<String>,
    pub explorer: Option<String>,
    pub modern: Option<String>,
    pub legacy: Option<String>,
    pub pauper: Option<String>,
    pub vintage: Option<String>,
    pub penny: Option<String>,
    pub commander: Option<String>,
    pub oathbreaker: Option<String>,
    pub brawl: Option<String>,
    pub historicbrawl: Option<String>,
    pub alchemy: Option<String>,
    pub paupercommander: Option<String>,
    pub duel: Option<String>,
    pub oldschool: Option<String>,
    pub premodern: Option<String>,
    pub predh: Option<String>,
}

/// Passthrough pricing strings; never computed on.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Prices {
    pub usd: Option<String>,
    pub usd_foil: Option<String>,
    pub usd_etched: Option<String>,
    pub eur: Option<String>,
    pub eur_foil: Option<String>,
    pub tix: Option<String>,
}

/// External reference URLs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RelatedUris {
    pub gatherer: Option<String>,
    pub tcgplayer_infinite_articles: Option<String>,
    pub tcgplayer_infinite_decks: Option<String>,
    pub edhrec: Option<String>,
}

/// Storefront purchase URLs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PurchaseUris {
    pub tcgplayer: Option<String>,
    pub cardmarket: Option<String>,
    pub cardhoarder: Option<String>,
}
