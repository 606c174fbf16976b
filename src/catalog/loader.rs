//! Catalog loading and filtering.
//!
//! Ingests the raw printing array, splits off basic lands, filters
//! everything the generators must never sample (priceless, oversized,
//! universally illegal, blocklisted, ante-clause cards), and merges the
//! survivors into canonical cards keyed by oracle identity.

use std::path::Path;

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use super::pool::CardPool;
use super::printing::Printing;
use crate::colors::BasicLand;
use crate::error::CatalogError;

/// Fixed euro→dollar conversion for catalog prices.
///
/// Updated by hand whenever the catalog snapshot changes; not worth a
/// finance API for a card list refreshed a few times a year.
pub const EUR_TO_USD: f64 = 1.07;

/// The printing language the pool treats as canonical.
pub const CANONICAL_LANG: &str = "en";

/// Card types a printing must have at least one of.
pub const VALID_TYPES: &[&str] = &[
    "Artifact",
    "Battle",
    "Conspiracy",
    "Creature",
    "Enchantment",
    "Instant",
    "Land",
    "Planeswalker",
    "Sorcery",
];

/// Type words that disqualify a printing (basic lands are handled by the
/// basic-land table, never as canonical cards).
pub const INVALID_TYPES: &[&str] = &["Basic"];

/// Set categories that by definition contain no playable cards.
pub const INVALID_SET_TYPES: &[&str] = &["memorabilia", "token", "minigame"];

/// Set codes excluded outright (crossover and promotional products the
/// proxy pipeline may not reproduce).
pub const INVALID_SET_IDS: &[&str] = &[
    "40k", "ltc", "who", "sld", "pip", "ltr", "pltr", "bot", "rex", "pf23", "pw23",
];

/// Rules text that marks the legacy ante mechanic.
const ANTE_CLAUSE: &str = "playing for ante";

/// Read and parse the catalog file, then build the pool.
///
/// A missing or malformed file is fatal: there is nothing to generate
/// from without a pool.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<CardPool, CatalogError> {
    let raw = std::fs::read_to_string(path)?;
    let printings: Vec<Printing> = serde_json::from_str(&raw)?;
    build_pool(printings)
}

/// Filter and merge an already-deserialized printing collection.
///
/// Pure over its input; tests feed synthetic printings here without disk.
pub fn build_pool(printings: Vec<Printing>) -> Result<CardPool, CatalogError> {
    let mut pool = CardPool::new();
    let mut discards: FxHashMap<&'static str, usize> = FxHashMap::default();
    let mut basic_variants = 0usize;

    for printing in printings {
        if let Some(land) = BasicLand::from_name(&printing.name) {
            if !INVALID_SET_IDS.contains(&printing.set.as_str())
                && printing.lang == CANONICAL_LANG
            {
                pool.basics_mut().add(land, printing);
                basic_variants += 1;
            } else {
                *discards.entry("basic-land variant").or_default() += 1;
            }
            continue;
        }

        let prices = printing
            .prices
            .as_ref()
            .map(|sheet| sheet.usable_prices(EUR_TO_USD))
            .unwrap_or_default();

        if let Some(reason) = exclusion_reason(&printing, &prices) {
            *discards.entry(reason).or_default() += 1;
            continue;
        }

        let oracle_id = match printing.oracle_id.clone() {
            Some(id) => id,
            None => {
                return Err(CatalogError::MissingField {
                    name: printing.name,
                    field: "oracle_id",
                })
            }
        };
        pool.merge_printing(&oracle_id, printing, &prices);
    }

    for (reason, count) in &discards {
        debug!(reason, count, "discarded printings");
    }
    info!(
        cards = pool.len(),
        basic_variants,
        "catalog loaded"
    );
    Ok(pool)
}

/// Why a non-basic printing stays out of the pool, or `None` to keep it.
///
/// Checks run in the cheapest-first order; only the first failure is
/// reported.
fn exclusion_reason(printing: &Printing, prices: &[f64]) -> Option<&'static str> {
    if prices.is_empty() {
        return Some("no usable price");
    }

    let types: Vec<&str> = printing.type_line.split_whitespace().collect();
    if !VALID_TYPES.iter().any(|t| types.contains(t)) {
        return Some("no recognized card type");
    }
    if INVALID_TYPES.iter().any(|t| types.contains(t)) {
        return Some("invalid card type");
    }
    if INVALID_SET_TYPES.contains(&printing.set_type.as_str()) {
        return Some("excluded set category");
    }
    if printing.oversized {
        return Some("oversized");
    }
    if printing.legalities.values().all(|v| v == "not_legal") {
        return Some("illegal in every format");
    }
    if INVALID_SET_IDS.contains(&printing.set.as_str()) {
        return Some("blocklisted set");
    }
    if printing
        .oracle_text
        .as_deref()
        .is_some_and(|text| text.contains(ANTE_CLAUSE))
    {
        return Some("ante clause");
    }

    None
}
