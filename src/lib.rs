//! # proxy-league
//!
//! Sealed-product generation for a proxy-card production pipeline:
//! booster packs, starter decks, basic-land bundles, and custom
//! decklists, drawn from a large catalog of trading-card printings.
//!
//! ## Design Principles
//!
//! 1. **One pool, built once**: The loader merges per-printing records
//!    into canonical cards and the classifier stamps each card's
//!    price-derived rarity bracket exactly once. Everything after that
//!    reads the pool by shared reference; no ambient global state.
//!
//! 2. **Price is rarity**: Sampling ignores printed rarity. A card's
//!    bracket comes from its minimum observed market price, which makes
//!    bracket sizes approximate real booster proportions.
//!
//! 3. **Caller-owned randomness**: Generators take a seedable
//!    `SamplerRng`. Production uses entropy seeding; tests replay seeds.
//!
//! 4. **Fail, don't fudge**: An unsatisfiable slot or unresolvable
//!    decklist name is a typed error, never a silent substitution or a
//!    partial product.
//!
//! ## Modules
//!
//! - `catalog`: printings, canonical cards, loading, rarity brackets
//! - `colors`: pip colors, color identities, the eleven basic lands
//! - `generate`: booster pack and starter deck generators
//! - `product`: the sealed-product model and capacity splitting
//! - `decklist`: plain-text serialization and parsing
//! - `rng`: the seedable ChaCha8 sampling source
//! - `error`: the failure taxonomy
//!
//! ## Example
//!
//! ```no_run
//! use proxy_league::{
//!     generate_booster, load_catalog, BracketPools, RarityThresholds, SamplerRng,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut pool = load_catalog("cards.json")?;
//! let pools = BracketPools::classify(&mut pool, &RarityThresholds::default());
//!
//! let mut rng = SamplerRng::from_entropy();
//! let pack = generate_booster(&pools, &mut rng)?;
//! assert_eq!(pack.size(), 15);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod colors;
pub mod decklist;
pub mod error;
pub mod generate;
pub mod product;
pub mod rng;

// Re-export commonly used types
pub use crate::catalog::{
    build_pool, load_catalog, BasicLandTable, Bracket, BracketPools, BracketSummary,
    CanonicalCard, CardId, CardPool, Face, FaceLayout, Printing, RarityThresholds,
};
pub use crate::colors::{BasicLand, Color, ColorIdentity};
pub use crate::decklist::{from_decklist, to_decklist};
pub use crate::error::{CatalogError, DecklistError, SamplingError, TooManyCardsError};
pub use crate::generate::{
    deck_template, generate_booster, generate_starter_deck, DeckSlot, PoolSelector,
    DECK_BASICS, DECK_SIZE, DECK_SPELLS, PACK_SIZE,
};
pub use crate::product::{
    basic_land_bundle, capacity_bracket, split_products, SealedProduct,
    PRINT_CAPACITY_BRACKETS,
};
pub use crate::rng::SamplerRng;
