//! Catalog system: raw printings, canonical cards, loading, rarity.
//!
//! ## Key Types
//!
//! - `Printing`: one historical print, straight off the catalog JSON
//! - `CanonicalCard`: one rules identity merged across printings
//! - `CardPool` / `BasicLandTable`: the immutable-after-build lookup state
//! - `RarityThresholds` / `BracketPools`: price-derived rarity classification
//!
//! ## Pipeline
//!
//! `load_catalog` (or `build_pool` over in-memory printings) filters and
//! merges once at startup; `BracketPools::classify` stamps each card's
//! bracket exactly once. Everything downstream reads the pool by shared
//! reference.

pub mod card;
pub mod loader;
pub mod pool;
pub mod printing;
pub mod rarity;

pub use card::{CanonicalCard, CardId, Face, FaceLayout};
pub use loader::{build_pool, load_catalog, CANONICAL_LANG, EUR_TO_USD};
pub use pool::{BasicLandTable, CardPool};
pub use printing::{CardFace, PriceSheet, Printing, RelatedPart};
pub use rarity::{Bracket, BracketPools, BracketSummary, RarityThresholds};
