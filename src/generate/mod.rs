//! Product generators.
//!
//! Each generator is a pure function over the classified pool and a
//! caller-owned RNG; it either returns a complete [`SealedProduct`] or a
//! [`SamplingError`], never a partial or silently substituted result.
//!
//! [`SealedProduct`]: crate::product::SealedProduct
//! [`SamplingError`]: crate::error::SamplingError

pub mod booster;
pub mod starter;

pub use booster::{generate_booster, PACK_SIZE};
pub use starter::{
    deck_template, generate_starter_deck, DeckSlot, PoolSelector, DECK_BASICS, DECK_SIZE,
    DECK_SPELLS,
};
