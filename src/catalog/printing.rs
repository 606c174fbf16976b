//! Raw printing records: the catalog wire format.
//!
//! One `Printing` per historical print of a card, deserialized straight
//! from the catalog's JSON array. Fields the feed may omit are explicit
//! `Option`s or defaults; the loader validates what the pool actually
//! needs and turns gaps into typed [`CatalogError`]s instead of deferring
//! lookup failures to use time.
//!
//! [`CatalogError`]: crate::error::CatalogError

use rustc_hash::FxHashMap;
use serde::Deserialize;
use smallvec::SmallVec;

/// One historical print of a card, as shipped by the catalog.
///
/// Immutable once loaded; owned by the loader until merged into a
/// canonical card or the basic-land table.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Printing {
    /// Per-printing identifier (meld parts link through these).
    #[serde(default)]
    pub id: String,

    /// Rules-identity key shared by every printing of one card.
    #[serde(default)]
    pub oracle_id: Option<String>,

    pub name: String,

    /// Printing language code ("en" is canonical).
    #[serde(default)]
    pub lang: String,

    #[serde(default)]
    pub type_line: String,

    #[serde(default)]
    pub oracle_text: Option<String>,

    #[serde(default)]
    pub mana_cost: Option<String>,

    /// Pip symbols ("W", "U", ...) for deck-building restrictions.
    #[serde(default)]
    pub color_identity: Vec<String>,

    /// The printing's original printed rarity.
    #[serde(default)]
    pub rarity: Option<String>,

    /// Format name → legality value ("legal", "not_legal", ...).
    #[serde(default)]
    pub legalities: FxHashMap<String, String>,

    /// Set code, e.g. "m21".
    #[serde(default)]
    pub set: String,

    /// Set category, e.g. "core", "token", "memorabilia".
    #[serde(default)]
    pub set_type: String,

    #[serde(default)]
    pub oversized: bool,

    /// Layout tag: "normal", "split", "flip", "transform", "meld", ...
    #[serde(default)]
    pub layout: String,

    #[serde(default)]
    pub prices: Option<PriceSheet>,

    /// Per-face sub-records for multi-face layouts.
    #[serde(default)]
    pub card_faces: Vec<CardFace>,

    /// Linked records; meld printings point at their meld result here.
    #[serde(default)]
    pub all_parts: Vec<RelatedPart>,
}

impl Printing {
    /// True for printings with more than one logical face.
    #[must_use]
    pub fn is_multi_face(&self) -> bool {
        self.card_faces.len() > 1 || self.layout == "meld"
    }
}

/// Per-finish market price observations, as decimal strings.
///
/// Two currencies × up to three finishes. Absent or null fields mean no
/// observation for that finish.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PriceSheet {
    #[serde(default)]
    pub usd: Option<String>,
    #[serde(default)]
    pub usd_foil: Option<String>,
    #[serde(default)]
    pub usd_etched: Option<String>,
    #[serde(default)]
    pub eur: Option<String>,
    #[serde(default)]
    pub eur_foil: Option<String>,
    #[serde(default)]
    pub eur_etched: Option<String>,
}

impl PriceSheet {
    /// Every usable observation, in dollars.
    ///
    /// Present, parseable values only; euro observations are converted
    /// with the given fixed rate. Unparseable values are simply not
    /// usable (the loader trusts the catalog, it does not validate it).
    #[must_use]
    pub fn usable_prices(&self, eur_to_usd: f64) -> SmallVec<[f64; 6]> {
        let mut prices = SmallVec::new();
        for field in [&self.usd, &self.usd_foil, &self.usd_etched] {
            if let Some(value) = field.as_deref().and_then(|s| s.parse::<f64>().ok()) {
                prices.push(value);
            }
        }
        for field in [&self.eur, &self.eur_foil, &self.eur_etched] {
            if let Some(value) = field.as_deref().and_then(|s| s.parse::<f64>().ok()) {
                prices.push(value * eur_to_usd);
            }
        }
        prices
    }
}

/// One face of a multi-face printing.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CardFace {
    pub name: String,
    #[serde(default)]
    pub type_line: String,
    #[serde(default)]
    pub mana_cost: Option<String>,
    #[serde(default)]
    pub oracle_text: Option<String>,
}

/// A record linked from a printing (meld pairs, tokens, combo pieces).
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RelatedPart {
    pub id: String,
    /// Relationship tag; "meld_result" marks the combined card.
    #[serde(default)]
    pub component: String,
    #[serde(default)]
    pub name: String,
}
