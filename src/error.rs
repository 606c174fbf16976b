//! Error types.
//!
//! One enum per failure domain, `thiserror`-derived. Load-time failures
//! are fatal to startup; generation and parse failures are reported to
//! the caller and never retried internally, since an unsatisfiable slot
//! means a configuration or data problem rather than a transient one.

use thiserror::Error;

use crate::catalog::rarity::Bracket;
use crate::generate::starter::PoolSelector;

/// Catalog loading failures. Fatal: there is no pool to work with.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog file is not a valid printing array.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// A printing that passed filtering lacks a field the pool needs.
    #[error("printing \"{name}\" is missing required field `{field}`")]
    MissingField {
        name: String,
        field: &'static str,
    },
}

/// A generation request could not satisfy its slot template.
///
/// Retryable by the caller with different parameters; never silently
/// relaxed by substituting from another pool.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SamplingError {
    /// A booster slot drew from a rarity bracket with no cards.
    #[error("no cards available in the {bracket} bracket")]
    EmptyBracket { bracket: Bracket },

    /// A deck slot's combined rarity/type/color constraints matched nothing.
    #[error("deck slot {slot}: no {pool} cards in the {bracket} bracket for the chosen colors")]
    EmptySlot {
        slot: usize,
        bracket: Bracket,
        pool: PoolSelector,
    },
}

/// A decklist line referenced a name the pool cannot resolve.
///
/// Parsing aborts on the first unresolved entry; a sealed product must be
/// fully resolved before use, so there is no partial result.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecklistError {
    #[error("card not found: {0}")]
    CardNotFound(String),
}

/// A product or product group exceeds a packing capacity limit.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("too many cards: {got} > {maximum}")]
pub struct TooManyCardsError {
    pub got: usize,
    pub maximum: usize,
}
